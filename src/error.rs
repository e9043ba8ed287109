//! Error type for the synthesis pipeline.

use std::fmt;

/// Errors that stop a note from being synthesized.
///
/// None of these are fatal: the caller simply produces no sound for the
/// request that failed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SynthError {
    /// The resolved frequency was zero, negative or not finite, usually
    /// because the octave was zero or negative.
    InvalidFrequency(f64),
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthError::InvalidFrequency(hz) => {
                write!(f, "cannot synthesize at {} Hz: frequency must be positive", hz)
            }
        }
    }
}

impl std::error::Error for SynthError {}

/// Result type alias using SynthError.
pub type Result<T> = std::result::Result<T, SynthError>;
