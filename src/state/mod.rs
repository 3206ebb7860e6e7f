//! Game state
//!
//! Plain data owned by the round controller. Transitions live in
//! `controller`; this module only knows how to reset and summarise itself.

use crate::difficulty::Difficulty;
use crate::display::Scoreboard;
use crate::symbol::Symbol;

/// Where the round currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    /// Playback running, or the pause before it. Player input is ignored.
    Showing,
    AwaitingInput,
    Ended,
}

impl Mode {
    /// True while a game is running (start and difficulty changes are locked)
    pub fn in_progress(self) -> bool {
        matches!(self, Mode::Showing | Mode::AwaitingInput)
    }
}

/// Everything the controller tracks about one game
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Symbols to reproduce, oldest first
    pub sequence: Vec<Symbol>,
    /// Count of correctly matched steps in the current round
    pub player_progress: usize,
    pub level: u32,
    pub score: u32,
    /// Survives resets; persisted through the score store
    pub best_score: u32,
    pub mode: Mode,
    pub difficulty: Difficulty,
}

impl GameState {
    /// Fresh idle state
    pub fn new(best_score: u32, difficulty: Difficulty) -> Self {
        Self {
            sequence: Vec::new(),
            player_progress: 0,
            level: 1,
            score: 0,
            best_score,
            mode: Mode::Idle,
            difficulty,
        }
    }

    /// Drop the current game, keeping best score and difficulty
    pub fn reset(&mut self) {
        *self = Self::new(self.best_score, self.difficulty);
    }

    /// The symbol the player has to press next
    pub fn expected(&self) -> Option<Symbol> {
        self.sequence.get(self.player_progress).copied()
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            score: self.score,
            level: self.level,
            best_score: self.best_score,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0, Difficulty::default())
    }
}
