// Asset lookup and decoding
//
// Every asset is optional: callers log the error and fall back to flat colours
// or silent sound cues.

mod loader;

pub use loader::{AssetLoader, AssetType};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_display() {
        let err = AssetError::NotFound("cat1.png".to_string());
        assert_eq!(err.to_string(), "Asset not found: cat1.png");
    }
}
