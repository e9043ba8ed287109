//! Waveform selection and fixed-length buffer synthesis.
//!
//! This module ties the oscillators and the noise generator together:
//! - `WaveformKind` picks the generation algorithm
//! - `SampleBuffer` holds one rendered second of audio
//! - `synthesize_into()` fills a buffer for a kind and frequency

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use rand::Rng;

use crate::error::{Result, SynthError};
use crate::music::{Frequency, ParseError};
use crate::noise::WhiteNoise;
use crate::oscillators::{SawtoothOscillator, SineOscillator, SquareOscillator, TriangleOscillator};
use crate::signal::Signal;

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Length of every rendered note, in seconds.
pub const DURATION_SECS: u32 = 1;

/// Number of samples in every rendered note.
pub const SAMPLE_COUNT: usize = (SAMPLE_RATE * DURATION_SECS) as usize;

/// The waveform shapes the synthesizer can generate.
///
/// # Examples
///
/// ```
/// use keysynth::WaveformKind;
///
/// let kind: WaveformKind = "saw".parse().unwrap();
/// assert_eq!(kind, WaveformKind::Saw);
/// assert_eq!(kind.next(), WaveformKind::Triangle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WaveformKind {
    #[default]
    Sine,
    Square,
    Saw,
    Triangle,
    Noise,
}

impl WaveformKind {
    /// All waveform kinds in selector order.
    pub const ALL: [WaveformKind; 5] = [
        WaveformKind::Sine,
        WaveformKind::Square,
        WaveformKind::Saw,
        WaveformKind::Triangle,
        WaveformKind::Noise,
    ];

    /// Returns the following kind in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            WaveformKind::Sine => WaveformKind::Square,
            WaveformKind::Square => WaveformKind::Saw,
            WaveformKind::Saw => WaveformKind::Triangle,
            WaveformKind::Triangle => WaveformKind::Noise,
            WaveformKind::Noise => WaveformKind::Sine,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WaveformKind::Sine => "Sine",
            WaveformKind::Square => "Square",
            WaveformKind::Saw => "Saw",
            WaveformKind::Triangle => "Triangle",
            WaveformKind::Noise => "Noise",
        }
    }
}

impl fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for WaveformKind {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        match s.to_lowercase().as_str() {
            "sine" => Ok(WaveformKind::Sine),
            "square" => Ok(WaveformKind::Square),
            "saw" | "sawtooth" => Ok(WaveformKind::Saw),
            "triangle" => Ok(WaveformKind::Triangle),
            "noise" => Ok(WaveformKind::Noise),
            _ => Err(ParseError::InvalidWaveform(s.to_string())),
        }
    }
}

/// One rendered note: `SAMPLE_COUNT` signed 16-bit samples.
///
/// Every sample lies in `-32767..=32767`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer(Vec<i16>);

impl SampleBuffer {
    /// Creates a buffer of `SAMPLE_COUNT` zero samples.
    pub fn silent() -> Self {
        SampleBuffer(vec![0; SAMPLE_COUNT])
    }

    pub fn as_slice(&self) -> &[i16] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [i16] {
        &mut self.0
    }

    pub fn into_inner(self) -> Vec<i16> {
        self.0
    }
}

impl Deref for SampleBuffer {
    type Target = [i16];

    fn deref(&self) -> &[i16] {
        &self.0
    }
}

/// Fills `out` with `kind` at `frequency`.
///
/// Periodic kinds restart from their first sample on every call; noise
/// continues drawing from `noise`, which the caller keeps between calls.
///
/// # Errors
///
/// Returns [`SynthError::InvalidFrequency`] without touching `out` when the
/// frequency is zero, negative or not finite.
///
/// # Examples
///
/// ```
/// use keysynth::{synthesize_into, Frequency, WaveformKind, WhiteNoise};
///
/// let mut noise = WhiteNoise::seeded(1);
/// let mut out = vec![0; 64];
/// synthesize_into(WaveformKind::Saw, Frequency::from_hz(110.0), &mut out, &mut noise).unwrap();
/// assert_eq!(out[0], -32767);
///
/// let err = synthesize_into(WaveformKind::Sine, Frequency::from_hz(0.0), &mut out, &mut noise);
/// assert!(err.is_err());
/// ```
pub fn synthesize_into<R: Rng>(
    kind: WaveformKind,
    frequency: Frequency,
    out: &mut [i16],
    noise: &mut WhiteNoise<R>,
) -> Result<()> {
    if !frequency.is_playable() {
        return Err(SynthError::InvalidFrequency(frequency.as_f64()));
    }

    match kind {
        WaveformKind::Sine => SineOscillator::<SAMPLE_RATE>::new(frequency).process(out),
        WaveformKind::Square => SquareOscillator::<SAMPLE_RATE>::new(frequency).process(out),
        WaveformKind::Saw => SawtoothOscillator::<SAMPLE_RATE>::new(frequency).process(out),
        WaveformKind::Triangle => TriangleOscillator::<SAMPLE_RATE>::new(frequency).process(out),
        WaveformKind::Noise => noise.process(out),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count() {
        assert_eq!(SAMPLE_COUNT, 44100);
        assert_eq!(SampleBuffer::silent().len(), 44100);
    }

    #[test]
    fn test_waveform_cycle_visits_all() {
        let mut kind = WaveformKind::default();
        for expected in WaveformKind::ALL {
            assert_eq!(kind, expected);
            kind = kind.next();
        }
        assert_eq!(kind, WaveformKind::Sine);
    }

    #[test]
    fn test_waveform_parse() {
        for kind in WaveformKind::ALL {
            assert_eq!(kind.to_string().parse::<WaveformKind>(), Ok(kind));
        }
        assert_eq!("SAWTOOTH".parse::<WaveformKind>(), Ok(WaveformKind::Saw));
        assert_eq!("".parse::<WaveformKind>(), Err(ParseError::Empty));
        assert_eq!(
            "pulse".parse::<WaveformKind>(),
            Err(ParseError::InvalidWaveform("pulse".to_string()))
        );
    }

    #[test]
    fn test_invalid_frequency_leaves_buffer_untouched() {
        let mut noise = WhiteNoise::seeded(3);
        let mut out = vec![5; 16];
        for hz in [0.0, -10.0, f64::NAN] {
            for kind in WaveformKind::ALL {
                let result = synthesize_into(kind, Frequency::from_hz(hz), &mut out, &mut noise);
                assert!(matches!(result, Err(SynthError::InvalidFrequency(_))));
            }
        }
        assert!(out.iter().all(|&s| s == 5));
    }

    #[test]
    fn test_every_kind_fills_whole_buffer_in_range() {
        let mut noise = WhiteNoise::seeded(4);
        for kind in WaveformKind::ALL {
            for hz in [16.35, 110.0, 987.6, 44100.0, 96000.0] {
                let mut buffer = SampleBuffer::silent();
                synthesize_into(kind, Frequency::from_hz(hz), buffer.as_mut_slice(), &mut noise)
                    .unwrap();
                assert_eq!(buffer.len(), SAMPLE_COUNT);
                assert!(buffer.iter().all(|s| (-32767..=32767).contains(s)));
            }
        }
    }
}
