use std::fmt;
use std::str::FromStr;

/// Error type for parsing notes and waveform names from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input string was empty
    Empty,
    /// The pitch name was invalid or unrecognized
    InvalidPitch(String),
    /// The waveform name was invalid or unrecognized
    InvalidWaveform(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "input string is empty"),
            ParseError::InvalidPitch(s) => write!(f, "invalid pitch name: '{}'", s),
            ParseError::InvalidWaveform(s) => write!(f, "invalid waveform name: '{}'", s),
        }
    }
}

impl std::error::Error for ParseError {}

/// The twelve pitch classes of the chromatic scale.
///
/// Use sharp notation (e.g., `FSharp` instead of G flat). A key press that
/// does not correspond to any pitch is represented as `Option::<Note>::None`
/// rather than by an extra variant.
///
/// # Examples
///
/// ```
/// use keysynth::music::core::Note;
///
/// let note: Note = "Db".parse().unwrap();
/// assert_eq!(note, Note::CSharp);
/// assert_eq!(note.base_frequency(), 17.32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Note {
    /// All pitch classes in ascending order starting from C.
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::CSharp,
        Note::D,
        Note::DSharp,
        Note::E,
        Note::F,
        Note::FSharp,
        Note::G,
        Note::GSharp,
        Note::A,
        Note::ASharp,
        Note::B,
    ];

    /// Returns the frequency of this pitch class at octave 1, in Hz.
    ///
    /// Higher octaves are linear multiples of this value, see
    /// [`resolve`](crate::music::frequency::resolve).
    pub fn base_frequency(&self) -> f64 {
        match self {
            Note::C => 16.35,
            Note::CSharp => 17.32,
            Note::D => 18.35,
            Note::DSharp => 19.45,
            Note::E => 20.60,
            Note::F => 21.83,
            Note::FSharp => 23.12,
            Note::G => 24.50,
            Note::GSharp => 25.96,
            Note::A => 27.50,
            Note::ASharp => 29.14,
            Note::B => 30.87,
        }
    }

    /// Returns the semitone offset from C (0-11) for this note.
    ///
    /// # Examples
    ///
    /// ```
    /// use keysynth::music::core::Note;
    ///
    /// assert_eq!(Note::C.semitone_offset(), 0);
    /// assert_eq!(Note::A.semitone_offset(), 9);
    /// ```
    pub fn semitone_offset(&self) -> u8 {
        *self as u8
    }

    /// Returns the conventional sharp spelling of this note.
    pub fn name(&self) -> &'static str {
        match self {
            Note::C => "C",
            Note::CSharp => "C#",
            Note::D => "D",
            Note::DSharp => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::FSharp => "F#",
            Note::G => "G",
            Note::GSharp => "G#",
            Note::A => "A",
            Note::ASharp => "A#",
            Note::B => "B",
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Note {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let s = s.to_uppercase();

        match s.as_str() {
            "C" | "B#" => Ok(Note::C),
            "C#" | "DB" => Ok(Note::CSharp),
            "D" => Ok(Note::D),
            "D#" | "EB" => Ok(Note::DSharp),
            "E" | "FB" => Ok(Note::E),
            "F" | "E#" => Ok(Note::F),
            "F#" | "GB" => Ok(Note::FSharp),
            "G" => Ok(Note::G),
            "G#" | "AB" => Ok(Note::GSharp),
            "A" => Ok(Note::A),
            "A#" | "BB" => Ok(Note::ASharp),
            "B" | "CB" => Ok(Note::B),
            _ => Err(ParseError::InvalidPitch(s)),
        }
    }
}
