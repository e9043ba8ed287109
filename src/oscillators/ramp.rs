//! Integer ramp geometry for the sawtooth and triangle oscillators.

use crate::music::Frequency;
use crate::signal::MAX_AMPLITUDE;

/// Derived per-frequency quantities for ramp-based waveforms.
///
/// # Examples
///
/// ```
/// use keysynth::{Frequency, RampShape};
///
/// let shape = RampShape::new(Frequency::from_hz(110.0), 44100);
/// assert_eq!(shape.samples_per_cycle, 400);
/// assert_eq!(shape.amplitude_step, 163);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampShape {
    /// Whole samples in one period, `floor(sample_rate / frequency)`, at least 1
    pub samples_per_cycle: usize,
    /// Per-sample increment, `floor(2 * MAX_AMPLITUDE / samples_per_cycle)`
    pub amplitude_step: i32,
}

impl RampShape {
    /// Computes the ramp geometry for `frequency` at `sample_rate`.
    ///
    /// Frequencies above the sample rate would give a zero-length cycle;
    /// those are treated as one sample per cycle so the step stays defined.
    pub fn new(frequency: Frequency, sample_rate: u32) -> Self {
        // Float-to-int casts saturate, so a vanishing frequency cannot wrap.
        let samples_per_cycle =
            ((f64::from(sample_rate) / frequency.as_f64()).floor() as usize).max(1);
        let span = 2 * MAX_AMPLITUDE as usize;
        let amplitude_step = (span / samples_per_cycle) as i32;

        Self {
            samples_per_cycle,
            amplitude_step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_for_low_note() {
        // C at octave 1
        let shape = RampShape::new(Frequency::from_hz(16.35), 44100);
        assert_eq!(shape.samples_per_cycle, 2697);
        assert_eq!(shape.amplitude_step, 24);
    }

    #[test]
    fn test_frequency_above_sample_rate_falls_back_to_one() {
        let shape = RampShape::new(Frequency::from_hz(50000.0), 44100);
        assert_eq!(shape.samples_per_cycle, 1);
        assert_eq!(shape.amplitude_step, 65534);
    }

    #[test]
    fn test_frequency_equal_to_sample_rate() {
        let shape = RampShape::new(Frequency::from_hz(44100.0), 44100);
        assert_eq!(shape.samples_per_cycle, 1);
    }

    #[test]
    fn test_very_low_frequency_gives_zero_step() {
        let shape = RampShape::new(Frequency::from_hz(0.5), 44100);
        assert_eq!(shape.samples_per_cycle, 88200);
        assert_eq!(shape.amplitude_step, 0);
    }
}
