//! Notes, keyboard layout and frequency resolution.

pub mod core;
pub mod frequency;
pub mod keyboard;

pub use self::core::{Note, ParseError};
pub use frequency::{Frequency, resolve};
pub use keyboard::{KEY_LAYOUT, note_for_key};
