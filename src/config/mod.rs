//! Command line configuration

use crate::controller::Peripherals;
use crate::difficulty::Difficulty;
use crate::display::TerminalDisplay;
use crate::sound::{AudioSink, BellAudio, NullAudio};
use crate::storage::JsonFileStore;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;

/// Default location of the best score file
pub const DEFAULT_SCORE_FILE: &str = "simon_best.json";

#[derive(Debug, Clone, Parser)]
#[command(name = "simon-says")]
#[command(about = "Repeat the growing color sequence")]
pub struct Config {
    /// Playback speed: easy, medium or hard
    #[arg(long, default_value = "medium")]
    pub difficulty: Difficulty,

    /// File the best score is kept in
    #[arg(long, default_value = DEFAULT_SCORE_FILE)]
    pub score_file: PathBuf,

    /// Seed for a reproducible sequence
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not ring the terminal bell
    #[arg(long)]
    pub mute: bool,
}

impl Config {
    /// Sequence generator, seeded if requested
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Terminal display, bell (unless muted) and the JSON score file
    pub fn peripherals(&self) -> Peripherals {
        let audio: Box<dyn AudioSink> = if self.mute {
            Box::new(NullAudio)
        } else {
            Box::new(BellAudio::new(io::stderr()))
        };
        Peripherals::new(
            Box::new(TerminalDisplay::new(io::stdout())),
            audio,
            Box::new(JsonFileStore::new(self.score_file.clone())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["simon-says"]).unwrap();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.score_file, PathBuf::from(DEFAULT_SCORE_FILE));
        assert_eq!(config.seed, None);
        assert!(!config.mute);
    }

    #[test]
    fn test_all_flags() {
        let config = Config::try_parse_from([
            "simon-says",
            "--difficulty",
            "hard",
            "--score-file",
            "/tmp/best.json",
            "--seed",
            "42",
            "--mute",
        ])
        .unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.score_file, PathBuf::from("/tmp/best.json"));
        assert_eq!(config.seed, Some(42));
        assert!(config.mute);
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        assert!(Config::try_parse_from(["simon-says", "--difficulty", "nightmare"]).is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = Config::try_parse_from(["simon-says", "--seed", "9"]).unwrap();
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
