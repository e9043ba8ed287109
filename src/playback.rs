//! The hand-off point between rendered containers and an audio device.

use crate::wav::AudioContainer;

/// Something that can play a finished WAV container.
///
/// A sink owns the container once `play` is called. Sinks that cannot play
/// two notes at once should stop the current note and start the new one.
pub trait PlaybackSink {
    /// Error raised when the container cannot be played.
    type Error;

    /// Plays `container`, either blocking until done or in the background.
    fn play(&mut self, container: AudioContainer) -> Result<(), Self::Error>;
}

/// Sinks can be passed by mutable reference.
impl<S: PlaybackSink + ?Sized> PlaybackSink for &mut S {
    type Error = S::Error;

    fn play(&mut self, container: AudioContainer) -> Result<(), Self::Error> {
        (**self).play(container)
    }
}

/// Collects every container it is given, newest last.
///
/// Useful for tests and for rendering notes to disk after the fact.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub played: Vec<AudioContainer>,
}

impl PlaybackSink for RecordingSink {
    type Error = std::convert::Infallible;

    fn play(&mut self, container: AudioContainer) -> Result<(), Self::Error> {
        self.played.push(container);
        Ok(())
    }
}
