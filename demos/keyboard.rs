//! Interactive keyboard synthesizer.
//!
//! Home row (A S D F G H J) plays C D E F G A B, the row above
//! (W E T Y U) plays the sharps. Every key press renders one second of audio.
//!
//! TAB cycles the waveform, UP/DOWN change the octave, ESC quits.
//! Set RUST_LOG=debug to see what is rendered.

mod common;

use anyhow::Result;
use common::{CpalSink, KeyAction, is_quit_key, run_terminal};
use crossterm::event::KeyCode;
use keysynth::config::clamp_octave;
use keysynth::{Synth, SynthConfig};
use std::io::{Write, stdout};

fn draw_help() -> Result<()> {
    let mut out = stdout();
    // Raw mode: every line needs an explicit carriage return
    for line in [
        "Keysynth",
        "========",
        "",
        "  A S D F G H J   natural notes",
        "  W E   T Y U     sharps",
        "  TAB             next waveform",
        "  UP / DOWN       octave",
        "  ESC             quit",
        "",
    ] {
        write!(out, "{}\r\n", line)?;
    }
    Ok(())
}

fn draw_status(config: &SynthConfig) -> Result<()> {
    let mut out = stdout();
    write!(
        out,
        "\r\x1b[2K  waveform: {:<9} octave: {}",
        config.waveform, config.octave
    )?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let mut sink = CpalSink::open()?;
    let mut synth = Synth::from_config(&SynthConfig::default());

    let initial = *synth.config();
    run_terminal(
        || {
            draw_help()?;
            draw_status(&initial)
        },
        |key_event| {
            let config = synth.config_mut();
            match key_event.code {
                code if is_quit_key(code) => return Ok(KeyAction::Exit),
                KeyCode::Tab => config.waveform = config.waveform.next(),
                KeyCode::Up => config.octave = clamp_octave(config.octave + 1),
                KeyCode::Down => config.octave = clamp_octave(config.octave - 1),
                KeyCode::Char(key) => {
                    let SynthConfig {
                        waveform, octave, ..
                    } = *config;
                    synth.play_key(key, waveform, octave, &mut sink)?;
                }
                _ => {}
            }
            draw_status(synth.config())?;
            Ok(KeyAction::Continue)
        },
    )
}
