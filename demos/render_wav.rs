//! Renders a single note to a WAV file.
//!
//! Usage: cargo run --example render_wav -- <note> <octave> <waveform> <output.wav>
//!
//! For example `render_wav C# 4 triangle note.wav`.

use anyhow::{Context, Result, bail};
use keysynth::{Note, Synth, WaveformKind};
use std::fs;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [note, octave, waveform, path] = args.as_slice() else {
        bail!("usage: render_wav <note> <octave> <waveform> <output.wav>");
    };

    let note: Note = note.parse()?;
    let octave: i32 = octave
        .parse()
        .with_context(|| format!("invalid octave '{}'", octave))?;
    let waveform: WaveformKind = waveform.parse()?;

    let mut synth = Synth::new();
    let container = synth.render_note(note, waveform, octave)?;

    fs::write(path, container.as_bytes()).with_context(|| format!("writing {}", path))?;
    println!(
        "Wrote {} {}{} ({} bytes) to {}",
        waveform,
        note,
        octave,
        container.len(),
        path
    );

    Ok(())
}
