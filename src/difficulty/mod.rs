//! Difficulty levels and their playback timing

use crate::error::{Result, SimonError};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Pause after a completed level before the next playback starts
pub const LEVEL_COMPLETE_PAUSE: Duration = Duration::from_millis(1500);

/// Playback speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Interval between two revealed symbols
    pub fn delay(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(1000),
            Difficulty::Medium => Duration::from_millis(700),
            Difficulty::Hard => Duration::from_millis(400),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = SimonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(SimonError::UnknownDifficulty(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays() {
        assert_eq!(Difficulty::Easy.delay(), Duration::from_millis(1000));
        assert_eq!(Difficulty::Medium.delay(), Duration::from_millis(700));
        assert_eq!(Difficulty::Hard.delay(), Duration::from_millis(400));
        assert!(Difficulty::Hard.delay() < Difficulty::Easy.delay());
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(" easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(
            "insane".parse::<Difficulty>(),
            Err(SimonError::UnknownDifficulty("insane".to_string()))
        );
    }
}
