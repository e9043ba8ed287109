//! Core sample generation trait.
//!
//! This module provides the fundamental `Signal` trait that represents
//! any waveform source that can generate 16-bit PCM samples.

/// Largest magnitude a generated sample may take.
///
/// The range is kept symmetric (`-32767..=32767`) so ramp arithmetic never
/// has to account for the extra negative value of `i16::MIN`.
pub const MAX_AMPLITUDE: i16 = i16::MAX;

/// Common interface for all waveform sources.
///
/// The trait provides two fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value in `-MAX_AMPLITUDE..=MAX_AMPLITUDE`
    fn next_sample(&mut self) -> i16;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [i16]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// Implementation of `Signal` for `i16` representing a constant sample value.
///
/// Handy for silence and for testing code that consumes signals.
///
/// # Examples
///
/// ```
/// use keysynth::Signal;
///
/// let mut silence = 0_i16;
/// let mut buffer = vec![7; 4];
/// silence.process(&mut buffer);
/// assert_eq!(buffer, vec![0, 0, 0, 0]);
/// ```
impl Signal for i16 {
    fn next_sample(&mut self) -> i16 {
        *self
    }

    fn process(&mut self, buffer: &mut [i16]) {
        buffer.fill(*self);
    }
}

/// Rounds a floating-point amplitude to the nearest sample value.
///
/// Values outside the symmetric range are saturated rather than wrapped.
pub(crate) fn quantize(value: f64) -> i16 {
    let limit = f64::from(MAX_AMPLITUDE);
    value.round().clamp(-limit, limit) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_signal() {
        let mut constant = 12_i16;
        assert_eq!(constant.next_sample(), 12);
        assert_eq!(constant.next_sample(), 12);
    }

    #[test]
    fn test_quantize_rounds_to_nearest() {
        assert_eq!(quantize(0.4), 0);
        assert_eq!(quantize(0.6), 1);
        assert_eq!(quantize(-0.6), -1);
        assert_eq!(quantize(305.49), 305);
    }

    #[test]
    fn test_quantize_saturates() {
        assert_eq!(quantize(40000.0), 32767);
        assert_eq!(quantize(-40000.0), -32767);
        assert_eq!(quantize(32767.4), 32767);
    }
}
