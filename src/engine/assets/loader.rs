// Asset loading functionality

use super::AssetError;
use std::path::{Path, PathBuf};

/// Environment variable overriding the asset directory
pub const ASSET_DIR_ENV: &str = "CAT_FIGHTER_ASSETS";

/// Default asset directory, relative to the working directory
pub const DEFAULT_ASSET_DIR: &str = "assets";

/// Supported asset types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetType {
    Texture,
    Sound,
}

impl AssetType {
    /// Get the default directory for this asset type
    pub fn default_directory(&self) -> &'static str {
        match self {
            AssetType::Texture => "textures",
            AssetType::Sound => "sounds",
        }
    }
}

/// Asset loader responsible for finding and loading asset files
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Loader rooted at `$CAT_FIGHTER_ASSETS`, or `assets/` when unset
    pub fn from_env() -> Self {
        let base = std::env::var_os(ASSET_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR));
        Self::new(base)
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, asset_type: AssetType, name: &str) -> PathBuf {
        self.base_path
            .join(asset_type.default_directory())
            .join(name)
    }

    /// Check if an asset exists
    pub fn exists(&self, asset_type: AssetType, name: &str) -> bool {
        self.resolve_path(asset_type, name).is_file()
    }

    /// Load asset bytes from disk
    pub fn load_bytes(&self, asset_type: AssetType, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve_path(asset_type, name);
        if !path.is_file() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }
        Ok(std::fs::read(&path)?)
    }

    /// Load and decode a texture into RGBA8 pixels
    pub fn load_image(&self, name: &str) -> Result<image::RgbaImage, AssetError> {
        let bytes = self.load_bytes(AssetType::Texture, name)?;
        let img = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
            name: name.to_string(),
            source,
        })?;
        Ok(img.to_rgba8())
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
