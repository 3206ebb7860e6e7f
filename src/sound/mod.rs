//! Sound output
//!
//! Tones are optional: a sink that fails is logged and otherwise ignored by
//! the controller.

use crate::error::{Result, SimonError};
use crate::symbol::Symbol;
use std::io::Write;

/// What to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// The button's own tone
    Symbol(Symbol),
    /// Game over buzz
    Error,
}

/// Audio output
pub trait AudioSink {
    fn play(&mut self, tone: Tone) -> Result<()>;
}

/// Silent audio, used with `--mute`
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _tone: Tone) -> Result<()> {
        Ok(())
    }
}

/// Rings the terminal bell: once per button tone, twice for an error
#[derive(Debug)]
pub struct BellAudio<W: Write> {
    out: W,
}

impl<W: Write> BellAudio<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for BellAudio<W> {
    fn play(&mut self, tone: Tone) -> Result<()> {
        let bell: &[u8] = match tone {
            Tone::Symbol(_) => b"\x07",
            Tone::Error => b"\x07\x07",
        };
        self.out
            .write_all(bell)
            .and_then(|_| self.out.flush())
            .map_err(|e| SimonError::Audio(e.to_string()))
    }
}
