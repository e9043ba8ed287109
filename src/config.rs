//! Synthesizer settings.
//!
//! The core pipeline takes the waveform and octave per call; `SynthConfig`
//! carries the defaults a front end starts from and the noise seed.

use std::ops::RangeInclusive;

use crate::synthesis::WaveformKind;

/// Octaves a front end should offer. The synthesizer itself accepts any
/// octave and rejects only those that give a non-positive frequency.
pub const OCTAVE_RANGE: RangeInclusive<i32> = 1..=8;

/// Octave selected when nothing else is configured.
pub const DEFAULT_OCTAVE: i32 = 4;

/// Clamps `octave` into [`OCTAVE_RANGE`].
///
/// # Examples
///
/// ```
/// use keysynth::config::clamp_octave;
///
/// assert_eq!(clamp_octave(0), 1);
/// assert_eq!(clamp_octave(5), 5);
/// assert_eq!(clamp_octave(12), 8);
/// ```
pub fn clamp_octave(octave: i32) -> i32 {
    octave.clamp(*OCTAVE_RANGE.start(), *OCTAVE_RANGE.end())
}

/// Configuration for a [`Synth`](crate::Synth).
///
/// # Examples
///
/// ```
/// use keysynth::{SynthConfig, WaveformKind};
///
/// let config = SynthConfig::default()
///     .with_waveform(WaveformKind::Triangle)
///     .with_octave(2)
///     .with_seed(42);
/// assert_eq!(config.octave, 2);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthConfig {
    /// Waveform selected at start-up
    pub waveform: WaveformKind,
    /// Octave selected at start-up
    pub octave: i32,
    /// Seed for the noise generator; `None` seeds from system entropy
    pub seed: Option<u64>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            waveform: WaveformKind::Sine,
            octave: DEFAULT_OCTAVE,
            seed: None,
        }
    }
}

impl SynthConfig {
    pub fn with_waveform(mut self, waveform: WaveformKind) -> Self {
        self.waveform = waveform;
        self
    }

    pub fn with_octave(mut self, octave: i32) -> Self {
        self.octave = octave;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
