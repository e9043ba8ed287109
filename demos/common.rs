//! Audio output and terminal helpers shared by the demos.

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, StreamConfig};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use keysynth::{AudioContainer, PlaybackSink, SAMPLE_RATE};
use std::io::stdout;
use std::panic;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// The note currently sounding, as normalized samples.
#[derive(Default)]
struct Voice {
    samples: Vec<f64>,
    /// Fractional read position in `samples`
    position: f64,
}

impl Voice {
    fn next_sample(&mut self, step: f64) -> f64 {
        match self.samples.get(self.position as usize) {
            Some(&sample) => {
                self.position += step;
                sample
            }
            None => 0.0,
        }
    }
}

/// Plays containers on the default output device.
///
/// Only one note sounds at a time: a new container replaces whatever is
/// still playing.
pub struct CpalSink {
    voice: Arc<Mutex<Voice>>,
    _stream: cpal::Stream,
}

impl CpalSink {
    pub fn open() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow::anyhow!("No output device available"))?;

        let config = device.default_output_config()?;
        let voice = Arc::new(Mutex::new(Voice::default()));

        let format = config.sample_format();
        let config: StreamConfig = config.into();
        let stream = match format {
            SampleFormat::F32 => create_audio_stream::<f32>(&device, &config, voice.clone())?,
            SampleFormat::I16 => create_audio_stream::<i16>(&device, &config, voice.clone())?,
            SampleFormat::U16 => create_audio_stream::<u16>(&device, &config, voice.clone())?,
            sample_format => {
                return Err(anyhow::anyhow!(
                    "Unsupported sample format: {}",
                    sample_format
                ));
            }
        };

        Ok(Self {
            voice,
            _stream: stream,
        })
    }
}

impl PlaybackSink for CpalSink {
    type Error = anyhow::Error;

    fn play(&mut self, container: AudioContainer) -> Result<()> {
        let samples = container
            .decode()?
            .into_iter()
            .map(|s| f64::from(s) / f64::from(i16::MAX))
            .collect();

        let mut voice = self
            .voice
            .lock()
            .map_err(|_| anyhow::anyhow!("audio thread panicked"))?;
        *voice = Voice {
            samples,
            position: 0.0,
        };
        Ok(())
    }
}

/// Creates an audio stream that reads from the shared voice, stepping
/// through it at the container rate regardless of the device rate.
fn create_audio_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    voice: Arc<Mutex<Voice>>,
) -> Result<cpal::Stream>
where
    T: Sample + FromSample<f64> + cpal::SizedSample,
{
    let channels = config.channels as usize;
    let step = f64::from(SAMPLE_RATE) / f64::from(config.sample_rate.0);

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let Ok(mut voice) = voice.lock() else {
                return;
            };
            for frame in data.chunks_mut(channels) {
                let value: T = T::from_sample(voice.next_sample(step));
                for s in frame.iter_mut() {
                    *s = value;
                }
            }
        },
        |err| log::error!("Audio stream error: {}", err),
        None,
    )?;

    stream.play()?;
    Ok(stream)
}

/// Key handling result that controls the event loop
pub enum KeyAction {
    /// Continue the event loop
    Continue,
    /// Exit the event loop
    Exit,
}

/// Runs a terminal event loop until `key_handler` asks to exit.
///
/// Sets up raw mode and the alternate screen, installs a panic hook that
/// restores the terminal, and forwards key presses (not releases).
pub fn run_terminal<F, K>(initial_ui: F, mut key_handler: K) -> Result<()>
where
    F: FnOnce() -> Result<()>,
    K: FnMut(&KeyEvent) -> Result<KeyAction>,
{
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(crossterm::cursor::Hide)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));

    let result = (|| -> Result<()> {
        initial_ui()?;
        loop {
            if event::poll(Duration::from_millis(50))?
                && let Event::Key(key_event) = event::read()?
                && key_event.kind != KeyEventKind::Release
            {
                match key_handler(&key_event)? {
                    KeyAction::Continue => {}
                    KeyAction::Exit => break,
                }
            }
        }
        Ok(())
    })();

    cleanup_terminal();
    result
}

/// Cleans up terminal state (cursor, alternate screen, raw mode).
fn cleanup_terminal() {
    let _ = stdout().execute(crossterm::cursor::Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Helper to check if a key code is a quit key (ESC).
///
/// Letters are reserved for notes, so only Escape quits.
pub fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Esc)
}
