//! Oscillator implementations for waveform synthesis.
//!
//! This module contains the `Oscillator` trait, the four periodic
//! generators and the ramp geometry shared by the sawtooth and triangle.

mod ramp;
mod sawtooth;
mod sine;
mod square;
mod traits;
mod triangle;

pub use ramp::RampShape;
pub use sawtooth::SawtoothOscillator;
pub use sine::SineOscillator;
pub use square::SquareOscillator;
pub use traits::Oscillator;
pub use triangle::TriangleOscillator;
