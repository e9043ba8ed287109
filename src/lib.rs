//! Keysynth - a monophonic keyboard synthesizer core
//!
//! Turns a key press, a waveform choice and an octave into one second of
//! 16-bit mono PCM wrapped in a WAV container, ready for any player that
//! accepts a seekable byte stream.

pub mod config;
pub mod error;
pub mod music;
pub mod noise;
pub mod oscillators;
pub mod playback;
pub mod signal;
pub mod synth;
pub mod synthesis;
pub mod wav;

// Re-export commonly used types at the crate root
pub use config::SynthConfig;
pub use error::{Result, SynthError};
pub use music::{Frequency, Note, ParseError, note_for_key, resolve};
pub use noise::WhiteNoise;
pub use oscillators::{
    Oscillator, RampShape, SawtoothOscillator, SineOscillator, SquareOscillator,
    TriangleOscillator,
};
pub use playback::{PlaybackSink, RecordingSink};
pub use signal::{MAX_AMPLITUDE, Signal};
pub use synth::Synth;
pub use synthesis::{SAMPLE_COUNT, SAMPLE_RATE, SampleBuffer, WaveformKind, synthesize_into};
pub use wav::{AudioContainer, encode};
