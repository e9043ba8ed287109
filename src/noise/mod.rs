//! Noise generators for waveform synthesis.

mod white;

pub use white::WhiteNoise;
