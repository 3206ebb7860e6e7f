//! Round controller
//!
//! Owns the `GameState` and moves it through
//! Idle → Showing → AwaitingInput → Showing → … → Ended → Idle.
//! Player input and timer callbacks are the only inputs; everything the
//! player sees or hears goes out through the `Peripherals`.
//!
//! Every game gets a fresh epoch. Timer events carry the epoch they were
//! scheduled in, so callbacks left over from a reset or finished game are
//! dropped instead of touching the new one.

use crate::difficulty::{Difficulty, LEVEL_COMPLETE_PAUSE};
use crate::display::{DisplaySink, NullDisplay};
use crate::error::{Result, SimonError};
use crate::sound::{AudioSink, NullAudio, Tone};
use crate::state::{GameState, Mode};
use crate::storage::{MemoryStore, ScoreStore};
use crate::symbol::Symbol;
use crate::timer::{Scheduler, Timer, TimerEvent};
use rand::rngs::StdRng;
use std::time::Duration;

const MSG_PRESS_START: &str = "Press Start to begin!";
const MSG_WATCH: &str = "Watch the sequence...";
const MSG_YOUR_TURN: &str = "Your turn! Repeat the sequence.";

/// Points awarded for completing a level
pub const POINTS_PER_LEVEL: u32 = 10;

/// Side-effect collaborators of the controller
pub struct Peripherals {
    pub display: Box<dyn DisplaySink>,
    pub audio: Box<dyn AudioSink>,
    pub store: Box<dyn ScoreStore>,
}

impl Peripherals {
    pub fn new(
        display: Box<dyn DisplaySink>,
        audio: Box<dyn AudioSink>,
        store: Box<dyn ScoreStore>,
    ) -> Self {
        Self {
            display,
            audio,
            store,
        }
    }

    /// No output, best score kept in memory only
    pub fn headless() -> Self {
        Self::new(
            Box::new(NullDisplay),
            Box::new(NullAudio),
            Box::new(MemoryStore::default()),
        )
    }
}

/// What a player press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Not the player's turn; nothing changed
    Ignored,
    /// Correct, more steps to go this round
    Accepted,
    /// Correct and the whole sequence was reproduced
    RoundComplete { completed_level: u32, score: u32 },
    /// Wrong press, the game is over
    GameOver { score: u32, new_best: bool },
}

/// The game state machine
pub struct RoundController<T: Timer = Scheduler> {
    state: GameState,
    epoch: u64,
    // Next sequence index to reveal during playback
    playback_index: usize,
    rng: StdRng,
    timer: T,
    peripherals: Peripherals,
}

impl<T: Timer> RoundController<T> {
    /// Create an idle controller, loading the best score from the store
    pub fn new(difficulty: Difficulty, timer: T, mut peripherals: Peripherals, rng: StdRng) -> Self {
        let best_score = match peripherals.store.load() {
            Ok(score) => score,
            Err(e) => {
                log::warn!("could not load best score, starting from 0: {}", e);
                0
            }
        };

        let mut controller = Self {
            state: GameState::new(best_score, difficulty),
            epoch: 0,
            playback_index: 0,
            rng,
            timer,
            peripherals,
        };
        controller.refresh();
        controller.peripherals.display.message(MSG_PRESS_START);
        controller
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// True if the event belongs to the current game
    pub fn is_current(&self, event: TimerEvent) -> bool {
        event.epoch() == self.epoch
    }

    /// Change playback speed. Locked while a game is running.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<()> {
        if self.state.mode.in_progress() {
            return Err(SimonError::GameInProgress);
        }
        log::info!("difficulty set to {}", difficulty);
        self.state.difficulty = difficulty;
        Ok(())
    }

    /// Begin a new game from Idle or Ended
    pub fn start(&mut self) -> Result<()> {
        if self.state.mode.in_progress() {
            return Err(SimonError::GameInProgress);
        }

        self.state.reset();
        self.epoch += 1;
        log::info!("game {} started on {}", self.epoch, self.state.difficulty);

        self.state.mode = Mode::Showing;
        self.add_step();
        self.refresh();
        self.show_sequence();
        Ok(())
    }

    /// Abandon whatever is going on and return to Idle
    pub fn reset(&mut self) {
        self.state.reset();
        self.epoch += 1;
        self.playback_index = 0;
        log::debug!("reset, now in epoch {}", self.epoch);

        self.refresh();
        self.peripherals.display.message(MSG_PRESS_START);
    }

    /// Feed back a callback scheduled on the timer
    pub fn on_timer(&mut self, event: TimerEvent) {
        if !self.is_current(event) {
            log::debug!("dropping stale {:?} (current epoch {})", event, self.epoch);
            return;
        }
        match event {
            TimerEvent::PlaybackAdvance { .. } => self.on_playback_advance(),
            TimerEvent::NextRound { .. } => self.show_sequence(),
        }
    }

    /// Reveal the next symbol, or hand over to the player once all are shown
    pub fn on_playback_advance(&mut self) {
        if self.state.mode != Mode::Showing {
            return;
        }

        match self.state.sequence.get(self.playback_index).copied() {
            Some(symbol) => {
                self.press(symbol);
                self.playback_index += 1;
                let delay = self.state.difficulty.delay();
                self.schedule(delay, TimerEvent::PlaybackAdvance { epoch: self.epoch });
            }
            None => {
                self.state.mode = Mode::AwaitingInput;
                self.state.player_progress = 0;
                self.peripherals.display.message(MSG_YOUR_TURN);
            }
        }
    }

    /// Handle a button press from the player
    pub fn on_player_input(&mut self, symbol: Symbol) -> InputOutcome {
        if self.state.mode != Mode::AwaitingInput {
            log::debug!("ignoring {} in {:?}", symbol, self.state.mode);
            return InputOutcome::Ignored;
        }

        self.press(symbol);

        if self.state.expected() != Some(symbol) {
            log::debug!(
                "wrong press {} at step {}, expected {:?}",
                symbol,
                self.state.player_progress,
                self.state.expected()
            );
            return self.end(symbol);
        }

        self.state.player_progress += 1;
        if self.state.player_progress < self.state.sequence.len() {
            return InputOutcome::Accepted;
        }

        let completed_level = self.state.level;
        self.state.score = self
            .state
            .score
            .saturating_add(completed_level.saturating_mul(POINTS_PER_LEVEL));
        self.state.level += 1;
        self.state.player_progress = 0;
        // Grow the sequence together with the level so the two never diverge
        self.add_step();
        self.state.mode = Mode::Showing;

        log::info!(
            "level {} complete, score {}",
            completed_level,
            self.state.score
        );
        self.refresh();
        self.peripherals
            .display
            .message(&format!("Level {} complete! Get ready...", completed_level));
        self.schedule(LEVEL_COMPLETE_PAUSE, TimerEvent::NextRound { epoch: self.epoch });

        InputOutcome::RoundComplete {
            completed_level,
            score: self.state.score,
        }
    }

    // Only reachable from a wrong press, so the game always ends from AwaitingInput
    fn end(&mut self, wrong: Symbol) -> InputOutcome {
        debug_assert_eq!(self.state.mode, Mode::AwaitingInput);
        self.state.mode = Mode::Ended;
        self.epoch += 1;

        let score = self.state.score;
        let new_best = score > self.state.best_score;
        if new_best {
            self.state.best_score = score;
            if let Err(e) = self.peripherals.store.save(score) {
                log::warn!("could not save best score: {}", e);
            }
        }
        log::info!("game over, score {} (best {})", score, self.state.best_score);

        self.peripherals.display.flag_wrong(wrong);
        self.play(Tone::Error);
        let text = if new_best {
            format!("Game Over! New best score: {}", score)
        } else {
            format!("Game Over! Final score: {}", score)
        };
        self.peripherals.display.message(&text);
        self.refresh();

        InputOutcome::GameOver { score, new_best }
    }

    fn add_step(&mut self) {
        let symbol = Symbol::random(&mut self.rng);
        self.state.sequence.push(symbol);
        log::debug!("sequence grew to {} with {}", self.state.sequence.len(), symbol);
    }

    fn show_sequence(&mut self) {
        self.state.mode = Mode::Showing;
        self.state.player_progress = 0;
        self.playback_index = 0;
        self.peripherals.display.message(MSG_WATCH);
        let delay = self.state.difficulty.delay();
        self.schedule(delay, TimerEvent::PlaybackAdvance { epoch: self.epoch });
    }

    fn schedule(&mut self, delay: Duration, event: TimerEvent) {
        self.timer.schedule(delay, event);
    }

    fn press(&mut self, symbol: Symbol) {
        self.peripherals.display.highlight(symbol);
        self.play(Tone::Symbol(symbol));
    }

    fn play(&mut self, tone: Tone) {
        if let Err(e) = self.peripherals.audio.play(tone) {
            log::debug!("audio unavailable: {}", e);
        }
    }

    fn refresh(&mut self) {
        let board = self.state.scoreboard();
        self.peripherals.display.render(&board);
    }
}

impl RoundController<Scheduler> {
    /// Pop the next timer event of the current game and the wait before it.
    /// Events of earlier games are discarded without moving the clock.
    pub fn next_timer(&mut self) -> Option<(Duration, TimerEvent)> {
        let epoch = self.epoch;
        self.timer.discard(|event| event.epoch() != epoch);
        self.timer.pop()
    }

    /// Fire timers until the player is up or the queue is empty.
    /// Returns the virtual time that passed.
    pub fn settle(&mut self) -> Duration {
        let mut waited = Duration::ZERO;
        while self.state.mode == Mode::Showing {
            let Some((wait, event)) = self.next_timer() else {
                break;
            };
            waited += wait;
            self.on_timer(event);
        }
        waited
    }
}
