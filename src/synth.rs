//! The key-to-container pipeline.
//!
//! A [`Synth`] runs the whole chain for one input event: key lookup,
//! frequency resolution, synthesis into a fresh buffer, and WAV encoding.
//! It owns the noise generator, the only state that outlives a call.
//! Calls take `&mut self`, so overlapping requests are serialized by
//! whoever owns the `Synth`.

use log::{debug, trace, warn};
use rand::Rng;
use rand::rngs::StdRng;

use crate::config::SynthConfig;
use crate::error::{Result, SynthError};
use crate::music::{Frequency, Note, note_for_key, resolve};
use crate::noise::WhiteNoise;
use crate::playback::PlaybackSink;
use crate::synthesis::{SampleBuffer, WaveformKind, synthesize_into};
use crate::wav::{AudioContainer, encode};

/// Monophonic one-second note renderer.
///
/// # Examples
///
/// ```
/// use keysynth::{Synth, SynthConfig, WaveformKind};
///
/// let mut synth = Synth::from_config(&SynthConfig::default().with_seed(1));
/// let container = synth.render_key('a', WaveformKind::Sine, 4).unwrap();
/// assert_eq!(container.len(), 88244);
///
/// // Keys outside the layout produce nothing.
/// assert!(synth.render_key('z', WaveformKind::Sine, 4).is_none());
/// ```
pub struct Synth<R: Rng = StdRng> {
    noise: WhiteNoise<R>,
    config: SynthConfig,
}

impl Synth<StdRng> {
    /// Creates a synthesizer with default settings and an entropy-seeded
    /// noise generator.
    pub fn new() -> Self {
        Self::from_config(&SynthConfig::default())
    }

    /// Creates a synthesizer from `config`, seeding the noise generator from
    /// `config.seed` when present.
    pub fn from_config(config: &SynthConfig) -> Self {
        let noise = match config.seed {
            Some(seed) => WhiteNoise::seeded(seed),
            None => WhiteNoise::from_entropy(),
        };
        Self {
            noise,
            config: *config,
        }
    }
}

impl Default for Synth<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Synth<R> {
    /// Creates a synthesizer whose noise waveform draws from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            noise: WhiteNoise::with_rng(rng),
            config: SynthConfig::default(),
        }
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SynthConfig {
        &mut self.config
    }

    /// Renders one second of `kind` at `frequency`.
    ///
    /// # Errors
    ///
    /// Fails with [`SynthError::InvalidFrequency`] when the frequency is not
    /// positive; no buffer is allocated in that case.
    pub fn synthesize(
        &mut self,
        kind: WaveformKind,
        frequency: Frequency,
    ) -> Result<SampleBuffer> {
        if !frequency.is_playable() {
            return Err(SynthError::InvalidFrequency(frequency.as_f64()));
        }

        let mut buffer = SampleBuffer::silent();
        synthesize_into(kind, frequency, buffer.as_mut_slice(), &mut self.noise)?;
        Ok(buffer)
    }

    /// Renders `note` at `octave` and wraps it in a WAV container.
    pub fn render_note(
        &mut self,
        note: Note,
        kind: WaveformKind,
        octave: i32,
    ) -> Result<AudioContainer> {
        let frequency = resolve(note, octave);
        debug!(
            "rendering {}{} as {} at {:.2} Hz",
            note,
            octave,
            kind,
            frequency.as_f64()
        );

        let buffer = self.synthesize(kind, frequency)?;
        let container = encode(&buffer);
        trace!("encoded {} bytes", container.len());
        Ok(container)
    }

    /// Renders the note played by `key`.
    ///
    /// Returns `None` when the key is not part of the layout, and also when
    /// the octave makes the note unplayable; the latter is logged.
    pub fn render_key(
        &mut self,
        key: char,
        kind: WaveformKind,
        octave: i32,
    ) -> Option<AudioContainer> {
        let Some(note) = note_for_key(key) else {
            trace!("key {:?} does not map to a note", key);
            return None;
        };

        match self.render_note(note, kind, octave) {
            Ok(container) => Some(container),
            Err(e) => {
                warn!("skipping {}{}: {}", note, octave, e);
                None
            }
        }
    }

    /// Renders the note played by `key` with the configured waveform and
    /// octave.
    pub fn render_key_with_config(&mut self, key: char) -> Option<AudioContainer> {
        let SynthConfig {
            waveform, octave, ..
        } = self.config;
        self.render_key(key, waveform, octave)
    }

    /// Renders the note played by `key` and hands it to `sink`.
    ///
    /// Returns `Ok(true)` if something was sent to the sink and `Ok(false)`
    /// if there was nothing to play.
    pub fn play_key<S: PlaybackSink>(
        &mut self,
        key: char,
        kind: WaveformKind,
        octave: i32,
        mut sink: S,
    ) -> std::result::Result<bool, S::Error> {
        match self.render_key(key, kind, octave) {
            Some(container) => {
                sink.play(container)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::RecordingSink;
    use crate::synthesis::SAMPLE_COUNT;
    use rand::SeedableRng;

    #[test]
    fn test_synthesize_fills_one_second() {
        let mut synth = Synth::with_rng(StdRng::seed_from_u64(0));
        for kind in WaveformKind::ALL {
            let buffer = synth.synthesize(kind, Frequency::from_hz(220.0)).unwrap();
            assert_eq!(buffer.len(), SAMPLE_COUNT);
        }
    }

    #[test]
    fn test_zero_octave_is_rejected() {
        let mut synth = Synth::with_rng(StdRng::seed_from_u64(0));
        for note in Note::ALL {
            for kind in WaveformKind::ALL {
                let result = synth.render_note(note, kind, 0);
                assert_eq!(result, Err(SynthError::InvalidFrequency(0.0)));
            }
        }
    }

    #[test]
    fn test_render_key_skips_unmapped_and_degenerate() {
        let mut synth = Synth::with_rng(StdRng::seed_from_u64(0));
        assert!(synth.render_key('q', WaveformKind::Sine, 4).is_none());
        assert!(synth.render_key('a', WaveformKind::Sine, 0).is_none());
        assert!(synth.render_key('a', WaveformKind::Sine, -1).is_none());
        assert!(synth.render_key('a', WaveformKind::Sine, 1).is_some());
    }

    #[test]
    fn test_noise_state_carries_across_calls() {
        let mut synth = Synth::with_rng(StdRng::seed_from_u64(11));
        let freq = Frequency::from_hz(100.0);
        let first = synth.synthesize(WaveformKind::Noise, freq).unwrap();
        let second = synth.synthesize(WaveformKind::Noise, freq).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_same_seed_same_noise() {
        let config = SynthConfig::default().with_seed(77);
        let mut a = Synth::from_config(&config);
        let mut b = Synth::from_config(&config);
        let freq = Frequency::from_hz(100.0);
        assert_eq!(
            a.synthesize(WaveformKind::Noise, freq).unwrap(),
            b.synthesize(WaveformKind::Noise, freq).unwrap()
        );
    }

    #[test]
    fn test_periodic_kinds_are_repeatable() {
        let mut synth = Synth::with_rng(StdRng::seed_from_u64(0));
        let freq = Frequency::from_hz(261.0);
        for kind in [
            WaveformKind::Sine,
            WaveformKind::Square,
            WaveformKind::Saw,
            WaveformKind::Triangle,
        ] {
            assert_eq!(
                synth.synthesize(kind, freq).unwrap(),
                synth.synthesize(kind, freq).unwrap()
            );
        }
    }

    #[test]
    fn test_render_key_with_config() {
        let config = SynthConfig::default()
            .with_waveform(WaveformKind::Saw)
            .with_octave(4)
            .with_seed(0);
        let mut synth = Synth::from_config(&config);
        let container = synth.render_key_with_config('h').unwrap();
        // A at octave 4 is 110 Hz: the saw starts at the bottom of its ramp
        assert_eq!(&container.data()[0..4], &[0x01, 0x80, 0xA4, 0x80]);
    }

    #[test]
    fn test_play_key_reports_whether_anything_played() {
        let mut synth = Synth::with_rng(StdRng::seed_from_u64(0));
        let mut sink = RecordingSink::default();

        assert_eq!(synth.play_key('a', WaveformKind::Square, 3, &mut sink), Ok(true));
        assert_eq!(synth.play_key('x', WaveformKind::Square, 3, &mut sink), Ok(false));
        assert_eq!(synth.play_key('a', WaveformKind::Square, 0, &mut sink), Ok(false));
        assert_eq!(sink.played.len(), 1);
    }
}
