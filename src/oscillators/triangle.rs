//! Triangle wave oscillator implementation.

use super::{Oscillator, RampShape};
use crate::music::Frequency;
use crate::signal::{MAX_AMPLITUDE, Signal};

/// A triangle wave oscillator built from a single bouncing ramp.
///
/// The ramp starts at `-MAX_AMPLITUDE` and is never reset. Before every
/// step it checks whether the step would carry it past full scale in either
/// direction; if so, the step is negated first. The period therefore follows
/// from the amplitude step rather than from `samples_per_cycle` directly.
pub struct TriangleOscillator<const SAMPLE_RATE: u32> {
    frequency: Frequency,
    shape: RampShape,
    value: i32,
    step: i32,
}

impl<const SAMPLE_RATE: u32> TriangleOscillator<SAMPLE_RATE> {
    /// Creates a new triangle oscillator at `frequency`.
    ///
    /// # Examples
    ///
    /// ```
    /// use keysynth::{Frequency, Signal, TriangleOscillator};
    ///
    /// let mut osc = TriangleOscillator::<44100>::new(Frequency::from_hz(110.0));
    /// assert_eq!(osc.next_sample(), -32767 + 163);
    /// ```
    pub fn new(frequency: Frequency) -> Self {
        let shape = RampShape::new(frequency, SAMPLE_RATE);
        Self {
            frequency,
            shape,
            value: -i32::from(MAX_AMPLITUDE),
            step: shape.amplitude_step,
        }
    }
}

impl<const SAMPLE_RATE: u32> Signal for TriangleOscillator<SAMPLE_RATE> {
    fn next_sample(&mut self) -> i16 {
        if (self.value + self.step).abs() > i32::from(MAX_AMPLITUDE) {
            self.step = -self.step;
        }
        self.value += self.step;

        // The ramp only visits -MAX_AMPLITUDE + k * step, all within range.
        self.value as i16
    }
}

impl<const SAMPLE_RATE: u32> Oscillator for TriangleOscillator<SAMPLE_RATE> {
    fn frequency(&self) -> Frequency {
        self.frequency
    }

    fn reset(&mut self) {
        self.value = -i32::from(MAX_AMPLITUDE);
        self.step = self.shape.amplitude_step;
    }
}
