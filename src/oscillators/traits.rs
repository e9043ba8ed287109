//! Core trait definitions for oscillators.

use crate::music::Frequency;

/// Common interface for periodic waveform generators.
///
/// Every oscillator is built for one fixed frequency; this trait exposes
/// that frequency and lets the generator restart from its first sample.
pub trait Oscillator {
    /// Gets the frequency the oscillator was built for.
    fn frequency(&self) -> Frequency;

    /// Resets the oscillator so the next sample is its first one again.
    fn reset(&mut self);
}
