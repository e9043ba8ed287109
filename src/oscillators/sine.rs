//! Sine wave oscillator implementation.

use super::Oscillator;
use crate::music::Frequency;
use crate::signal::{MAX_AMPLITUDE, Signal, quantize};
use std::f64::consts::PI;

/// A sine wave oscillator.
///
/// Sample `i` is `round(MAX_AMPLITUDE * sin(2π * frequency * i / SAMPLE_RATE))`.
/// The angle is computed from the sample index each time rather than
/// accumulated, so long buffers do not drift.
///
/// # Examples
///
/// ```
/// use keysynth::{Frequency, Signal, SineOscillator};
///
/// let mut osc = SineOscillator::<44100>::new(Frequency::from_hz(440.0));
/// assert_eq!(osc.next_sample(), 0);
/// ```
pub struct SineOscillator<const SAMPLE_RATE: u32> {
    frequency: Frequency,
    /// Radians advanced per sample
    angular_step: f64,
    /// Index of the next sample
    index: u64,
}

impl<const SAMPLE_RATE: u32> SineOscillator<SAMPLE_RATE> {
    /// Creates a new sine oscillator at `frequency`.
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            angular_step: (2.0 * PI * frequency.as_f64()) / f64::from(SAMPLE_RATE),
            index: 0,
        }
    }
}

impl<const SAMPLE_RATE: u32> Signal for SineOscillator<SAMPLE_RATE> {
    fn next_sample(&mut self) -> i16 {
        let angle = self.angular_step * self.index as f64;
        self.index += 1;
        quantize(f64::from(MAX_AMPLITUDE) * angle.sin())
    }
}

impl<const SAMPLE_RATE: u32> Oscillator for SineOscillator<SAMPLE_RATE> {
    fn frequency(&self) -> Frequency {
        self.frequency
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oscillator_creation() {
        let osc = SineOscillator::<44100>::new(Frequency::from_hz(440.0));
        assert_eq!(osc.frequency().as_f64(), 440.0);
    }

    #[test]
    fn test_first_sample_is_zero() {
        let mut osc = SineOscillator::<44100>::new(Frequency::from_hz(65.4));
        assert_eq!(osc.next_sample(), 0);
    }

    #[test]
    fn test_matches_closed_form() {
        let freq = 65.4;
        let mut osc = SineOscillator::<44100>::new(Frequency::from_hz(freq));
        for i in 0..2000 {
            let angle = ((2.0 * PI * freq) / 44100.0) * i as f64;
            let expected = (32767.0 * angle.sin()).round() as i16;
            assert_eq!(osc.next_sample(), expected, "sample {}", i);
        }
    }

    #[test]
    fn test_quarter_period_peak() {
        // 100 samples per period, so sample 25 sits on the crest
        let mut osc = SineOscillator::<100>::new(Frequency::from_hz(1.0));
        let mut buffer = vec![0; 100];
        osc.process(&mut buffer);
        assert_eq!(buffer[25], 32767);
        assert_eq!(buffer[75], -32767);
    }

    #[test]
    fn test_reset() {
        let mut osc = SineOscillator::<44100>::new(Frequency::from_hz(440.0));
        let first: Vec<i16> = (0..10).map(|_| osc.next_sample()).collect();
        osc.reset();
        let again: Vec<i16> = (0..10).map(|_| osc.next_sample()).collect();
        assert_eq!(first, again);
    }
}
