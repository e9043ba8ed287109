//! Computer-keyboard to note mapping.
//!
//! The layout mirrors a piano octave on a QWERTY keyboard: the home row
//! carries the natural notes and the row above it the sharps.

use super::core::Note;

/// Every key that produces a note, paired with that note.
pub const KEY_LAYOUT: [(char, Note); 12] = [
    ('a', Note::C),
    ('w', Note::CSharp),
    ('s', Note::D),
    ('e', Note::DSharp),
    ('d', Note::E),
    ('f', Note::F),
    ('t', Note::FSharp),
    ('g', Note::G),
    ('y', Note::GSharp),
    ('h', Note::A),
    ('u', Note::ASharp),
    ('j', Note::B),
];

/// Returns the note played by `key`, or `None` if the key is not part of
/// the layout. Matching ignores case.
///
/// # Examples
///
/// ```
/// use keysynth::music::{core::Note, keyboard::note_for_key};
///
/// assert_eq!(note_for_key('a'), Some(Note::C));
/// assert_eq!(note_for_key('W'), Some(Note::CSharp));
/// assert_eq!(note_for_key('z'), None);
/// ```
pub fn note_for_key(key: char) -> Option<Note> {
    match key.to_ascii_lowercase() {
        'a' => Some(Note::C),
        's' => Some(Note::D),
        'd' => Some(Note::E),
        'f' => Some(Note::F),
        'g' => Some(Note::G),
        'h' => Some(Note::A),
        'j' => Some(Note::B),

        'w' => Some(Note::CSharp),
        'e' => Some(Note::DSharp),
        't' => Some(Note::FSharp),
        'y' => Some(Note::GSharp),
        'u' => Some(Note::ASharp),

        _ => None,
    }
}
