// Fire-and-forget sound cues
//
// The simulation never talks to an audio device. It records cues into a
// `SoundCues` queue during a step; the app drains the queue into an `AudioSink`
// after the step completes.

use std::collections::HashSet;

/// Every sound the game can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Jump,
    LightHit,
    HeavyHit,
    Hit,
    /// Looping squeak while a mouse is on screen
    PickupAmbient,
    Eat,
}

impl Sound {
    pub const ALL: [Sound; 6] = [
        Sound::Jump,
        Sound::LightHit,
        Sound::HeavyHit,
        Sound::Hit,
        Sound::PickupAmbient,
        Sound::Eat,
    ];

    /// File name of the clip under the sounds directory
    pub fn file_name(self) -> &'static str {
        match self {
            Sound::Jump => "jump.mp3",
            Sound::LightHit => "punch_light.mp3",
            Sound::HeavyHit => "punch_heavy.mp3",
            Sound::Hit => "hit.mp3",
            Sound::PickupAmbient => "mouse.mp3",
            Sound::Eat => "eat.mp3",
        }
    }
}

/// A single request to the audio backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Play(Sound),
    Stop(Sound),
}

/// Cues emitted during one simulation step, in emission order
#[derive(Debug, Default)]
pub struct SoundCues {
    cues: Vec<SoundCue>,
}

impl SoundCues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self, sound: Sound) {
        self.cues.push(SoundCue::Play(sound));
    }

    pub fn stop(&mut self, sound: Sound) {
        self.cues.push(SoundCue::Stop(sound));
    }

    pub fn as_slice(&self) -> &[SoundCue] {
        &self.cues
    }

    pub fn contains(&self, cue: SoundCue) -> bool {
        self.cues.contains(&cue)
    }

    pub fn clear(&mut self) {
        self.cues.clear();
    }

    /// Move every queued cue into the sink
    pub fn flush_into(&mut self, sink: &mut dyn AudioSink) {
        for cue in self.cues.drain(..) {
            match cue {
                SoundCue::Play(sound) => sink.play(sound),
                SoundCue::Stop(sound) => sink.stop(sound),
            }
        }
    }
}

/// Destination for sound cues
pub trait AudioSink {
    fn play(&mut self, sound: Sound);
    fn stop(&mut self, sound: Sound);
}

/// Sink that only acknowledges cues for clips that were found on disk.
///
/// There is no playback backend in the stack, so accepted cues are traced
/// and the rest are dropped silently.
#[derive(Debug, Default)]
pub struct LoggingAudio {
    available: HashSet<Sound>,
    played: u64,
}

impl LoggingAudio {
    pub fn new(available: impl IntoIterator<Item = Sound>) -> Self {
        Self {
            available: available.into_iter().collect(),
            played: 0,
        }
    }

    pub fn is_available(&self, sound: Sound) -> bool {
        self.available.contains(&sound)
    }

    /// Number of accepted play cues
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LoggingAudio {
    fn play(&mut self, sound: Sound) {
        if self.is_available(sound) {
            self.played += 1;
            log::trace!("play {:?}", sound);
        }
    }

    fn stop(&mut self, sound: Sound) {
        if self.is_available(sound) {
            log::trace!("stop {:?}", sound);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<SoundCue>);

    impl AudioSink for Recorder {
        fn play(&mut self, sound: Sound) {
            self.0.push(SoundCue::Play(sound));
        }
        fn stop(&mut self, sound: Sound) {
            self.0.push(SoundCue::Stop(sound));
        }
    }

    #[test]
    fn test_flush_preserves_order_and_empties_queue() {
        let mut cues = SoundCues::new();
        cues.play(Sound::Hit);
        cues.stop(Sound::PickupAmbient);
        cues.play(Sound::Eat);

        let mut sink = Recorder::default();
        cues.flush_into(&mut sink);

        assert_eq!(
            sink.0,
            vec![
                SoundCue::Play(Sound::Hit),
                SoundCue::Stop(Sound::PickupAmbient),
                SoundCue::Play(Sound::Eat),
            ]
        );
        assert!(cues.as_slice().is_empty());
    }

    #[test]
    fn test_missing_clips_are_no_ops() {
        let mut audio = LoggingAudio::new([Sound::Jump]);
        audio.play(Sound::Jump);
        audio.play(Sound::HeavyHit);
        audio.stop(Sound::PickupAmbient);
        assert_eq!(audio.played(), 1);
    }

    #[test]
    fn test_every_sound_has_a_file() {
        for sound in Sound::ALL {
            assert!(sound.file_name().ends_with(".mp3"));
        }
    }
}
