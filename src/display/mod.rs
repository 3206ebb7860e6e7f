//! Display output
//!
//! The controller reports what the player should see through `DisplaySink`.
//! `TerminalDisplay` renders it as text lines on any writer.

use crate::symbol::Symbol;
use std::fmt;
use std::io::Write;

/// Numbers shown next to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub score: u32,
    pub level: u32,
    pub best_score: u32,
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {}  Level: {}  Best: {}",
            self.score, self.level, self.best_score
        )
    }
}

/// Receives everything the player should see
pub trait DisplaySink {
    /// Redraw score, level and best score
    fn render(&mut self, board: &Scoreboard);

    /// Replace the status message
    fn message(&mut self, text: &str);

    /// Light up a button (playback or player press)
    fn highlight(&mut self, symbol: Symbol);

    /// Mark the button that ended the game
    fn flag_wrong(&mut self, symbol: Symbol);
}

/// Discards all output
#[derive(Debug, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn render(&mut self, _board: &Scoreboard) {}
    fn message(&mut self, _text: &str) {}
    fn highlight(&mut self, _symbol: Symbol) {}
    fn flag_wrong(&mut self, _symbol: Symbol) {}
}

/// Line based text display
#[derive(Debug)]
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(args).and_then(|_| self.out.flush()) {
            log::warn!("display write failed: {}", e);
        }
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn render(&mut self, board: &Scoreboard) {
        self.line(format_args!("[{}]\n", board));
    }

    fn message(&mut self, text: &str) {
        self.line(format_args!("{}\n", text));
    }

    fn highlight(&mut self, symbol: Symbol) {
        let name = symbol.name().to_ascii_uppercase();
        self.line(format_args!("  * {}\n", name));
    }

    fn flag_wrong(&mut self, symbol: Symbol) {
        let name = symbol.name().to_ascii_uppercase();
        self.line(format_args!("  X {} (wrong)\n", name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered<F: FnOnce(&mut TerminalDisplay<Vec<u8>>)>(f: F) -> String {
        let mut display = TerminalDisplay::new(Vec::new());
        f(&mut display);
        String::from_utf8(display.into_inner()).unwrap()
    }

    #[test]
    fn test_scoreboard_format() {
        let board = Scoreboard {
            score: 30,
            level: 3,
            best_score: 60,
        };
        assert_eq!(board.to_string(), "Score: 30  Level: 3  Best: 60");
    }

    #[test]
    fn test_terminal_output() {
        let text = rendered(|d| {
            d.render(&Scoreboard {
                score: 0,
                level: 1,
                best_score: 0,
            });
            d.message("Watch the sequence...");
            d.highlight(Symbol::Green);
            d.flag_wrong(Symbol::Red);
        });

        assert_eq!(
            text,
            "[Score: 0  Level: 1  Best: 0]\nWatch the sequence...\n  * GREEN\n  X RED (wrong)\n"
        );
    }
}
