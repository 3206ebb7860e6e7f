//! Simon Says
//!
//! A memory game: the round controller reveals a growing sequence of colored
//! buttons and the player has to repeat it. A wrong press ends the game.
//! Display, audio, storage and timers are collaborators behind traits so the
//! state machine runs the same in a terminal and under test.

pub mod config;
pub mod controller;
pub mod difficulty;
pub mod display;
pub mod sound;
pub mod state;
pub mod storage;
pub mod symbol;
pub mod timer;

// Re-export core types for convenience
pub use crate::error::{Result, SimonError};
pub use controller::{InputOutcome, Peripherals, RoundController};
pub use difficulty::Difficulty;
pub use display::{DisplaySink, Scoreboard};
pub use sound::{AudioSink, Tone};
pub use state::{GameState, Mode};
pub use storage::ScoreStore;
pub use symbol::Symbol;
pub use timer::{Scheduler, Timer, TimerEvent};

/// Core error handling types for the game
pub mod error {
    use std::fmt;

    /// Result type for game operations
    pub type Result<T> = std::result::Result<T, SimonError>;

    /// Error conditions raised by the controller and its collaborators
    #[derive(Debug, Clone, PartialEq)]
    pub enum SimonError {
        // Round control
        GameInProgress,

        // Parsing
        UnknownSymbol(String),
        UnknownDifficulty(String),

        // Optional collaborators
        Storage(String),
        Audio(String),
    }

    impl fmt::Display for SimonError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                SimonError::GameInProgress => write!(f, "A game is already in progress"),
                SimonError::UnknownSymbol(text) => write!(f, "Unknown color: {}", text),
                SimonError::UnknownDifficulty(text) => {
                    write!(f, "Unknown difficulty: {}", text)
                }
                SimonError::Storage(msg) => write!(f, "Storage error: {}", msg),
                SimonError::Audio(msg) => write!(f, "Audio error: {}", msg),
            }
        }
    }

    impl std::error::Error for SimonError {}
}
