//! Frequency type and note-to-frequency resolution.

use super::core::Note;

/// A frequency value in Hz.
///
/// # Examples
///
/// ```
/// use keysynth::music::frequency::Frequency;
///
/// let freq: Frequency = 440.0.into();
/// assert_eq!(freq.as_f64(), 440.0);
/// assert!(freq.is_playable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Frequency(f64);

impl Frequency {
    /// Creates a new frequency from Hz.
    pub fn from_hz(hz: f64) -> Self {
        Frequency(hz)
    }

    /// Resolves a note at the given octave, see [`resolve`].
    pub fn from_note(note: Note, octave: i32) -> Self {
        resolve(note, octave)
    }

    /// Returns the frequency value in Hz.
    pub fn as_f64(&self) -> f64 {
        self.0
    }

    /// Returns `true` if a waveform can be generated at this frequency.
    ///
    /// Zero, negative and non-finite frequencies are not playable; they come
    /// out of degenerate octave values and must never reach the oscillators.
    pub fn is_playable(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl From<f64> for Frequency {
    fn from(hz: f64) -> Self {
        Frequency::from_hz(hz)
    }
}

/// Maps a note and octave to its fundamental frequency.
///
/// The octave scales the octave-1 base frequency linearly
/// (`base × octave`), it does not double it per octave. Octave 4 of C is
/// therefore 65.4 Hz, not the equal-tempered 261.63 Hz. The octave is not
/// validated here: zero or negative octaves yield a frequency that
/// [`Frequency::is_playable`] rejects.
///
/// # Examples
///
/// ```
/// use keysynth::music::{core::Note, frequency::resolve};
///
/// let freq = resolve(Note::C, 4);
/// assert!((freq.as_f64() - 65.4).abs() < 1e-4);
/// ```
pub fn resolve(note: Note, octave: i32) -> Frequency {
    Frequency(note.base_frequency() * f64::from(octave))
}
