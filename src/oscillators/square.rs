//! Square wave oscillator implementation.

use super::Oscillator;
use crate::music::Frequency;
use crate::signal::{MAX_AMPLITUDE, Signal};
use std::f64::consts::PI;

/// A square wave oscillator.
///
/// Follows the sign of the matching sine: full positive amplitude while the
/// sine is non-negative (including exactly zero), full negative otherwise.
pub struct SquareOscillator<const SAMPLE_RATE: u32> {
    frequency: Frequency,
    angular_step: f64,
    index: u64,
}

impl<const SAMPLE_RATE: u32> SquareOscillator<SAMPLE_RATE> {
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            angular_step: (2.0 * PI * frequency.as_f64()) / f64::from(SAMPLE_RATE),
            index: 0,
        }
    }
}

impl<const SAMPLE_RATE: u32> Signal for SquareOscillator<SAMPLE_RATE> {
    fn next_sample(&mut self) -> i16 {
        let angle = self.angular_step * self.index as f64;
        self.index += 1;
        if angle.sin() < 0.0 {
            -MAX_AMPLITUDE
        } else {
            MAX_AMPLITUDE
        }
    }
}

impl<const SAMPLE_RATE: u32> Oscillator for SquareOscillator<SAMPLE_RATE> {
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
    fn test_zero_crossing_is_positive() {
        let mut osc = SquareOscillator::<44100>::new(Frequency::from_hz(440.0));
        assert_eq!(osc.next_sample(), 32767);
    }

    #[test]
    fn test_only_two_levels() {
        let mut osc = SquareOscillator::<44100>::new(Frequency::from_hz(123.4));
        let mut buffer = vec![0; 44100];
        osc.process(&mut buffer);
        assert!(buffer.iter().all(|&s| s == 32767 || s == -32767));
    }

    #[test]
    fn test_half_cycles() {
        // 10 samples per period: five high then five low
        let mut osc = SquareOscillator::<100>::new(Frequency::from_hz(10.0));
        let mut buffer = vec![0; 10];
        osc.process(&mut buffer);
        assert!(buffer[1..5].iter().all(|&s| s == 32767));
        assert!(buffer[6..10].iter().all(|&s| s == -32767));
    }

    #[test]
    fn test_reset() {
        let mut osc = SquareOscillator::<44100>::new(Frequency::from_hz(440.0));
        for _ in 0..100 {
            osc.next_sample();
        }
        osc.reset();
        assert_eq!(osc.next_sample(), 32767);
    }
}
