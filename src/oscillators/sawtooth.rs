//! Sawtooth wave oscillator implementation.

use super::{Oscillator, RampShape};
use crate::music::Frequency;
use crate::signal::{MAX_AMPLITUDE, Signal};

/// A sawtooth wave oscillator built from an integer ramp.
///
/// Each cycle starts at `-MAX_AMPLITUDE` and climbs by the ramp's
/// `amplitude_step` once per sample. After `samples_per_cycle` samples the
/// ramp restarts, so the top of the cycle stays slightly below full scale
/// whenever the step does not divide the range evenly.
///
/// # Examples
///
/// ```
/// use keysynth::{Frequency, SawtoothOscillator, Signal};
///
/// let mut osc = SawtoothOscillator::<44100>::new(Frequency::from_hz(110.0));
/// assert_eq!(osc.next_sample(), -32767);
/// assert_eq!(osc.next_sample(), -32767 + 163);
/// ```
pub struct SawtoothOscillator<const SAMPLE_RATE: u32> {
    frequency: Frequency,
    shape: RampShape,
    /// Position of the next sample within the current cycle
    position: usize,
}

impl<const SAMPLE_RATE: u32> SawtoothOscillator<SAMPLE_RATE> {
    /// Creates a new sawtooth oscillator at `frequency`.
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            shape: RampShape::new(frequency, SAMPLE_RATE),
            position: 0,
        }
    }

    /// Returns the ramp geometry this oscillator steps through.
    pub fn shape(&self) -> RampShape {
        self.shape
    }
}

impl<const SAMPLE_RATE: u32> Signal for SawtoothOscillator<SAMPLE_RATE> {
    fn next_sample(&mut self) -> i16 {
        // position < samples_per_cycle, so the ramp never passes MAX_AMPLITUDE
        let value = -i64::from(MAX_AMPLITUDE)
            + self.position as i64 * i64::from(self.shape.amplitude_step);

        self.position += 1;
        if self.position >= self.shape.samples_per_cycle {
            self.position = 0;
        }

        value as i16
    }
}

impl<const SAMPLE_RATE: u32> Oscillator for SawtoothOscillator<SAMPLE_RATE> {
    fn frequency(&self) -> Frequency {
        self.frequency
    }

    fn reset(&mut self) {
        self.position = 0;
    }
}
