//! Timed callbacks
//!
//! The controller never sleeps. It hands a `TimerEvent` to its `Timer`
//! together with a delay, and whoever drives the game feeds the event back
//! once the delay has passed. `Scheduler` is a virtual clock: it orders
//! pending events by due time and reports how long to wait for each one, so
//! the terminal can sleep for real and tests can skip ahead instantly.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

/// Callback kinds the controller schedules
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimerEvent {
    /// Reveal the next symbol of the playback, or hand over to the player
    PlaybackAdvance { epoch: u64 },
    /// Level-complete pause is over, replay the sequence
    NextRound { epoch: u64 },
}

impl TimerEvent {
    /// Game the event was scheduled in
    pub fn epoch(self) -> u64 {
        match self {
            TimerEvent::PlaybackAdvance { epoch } | TimerEvent::NextRound { epoch } => epoch,
        }
    }
}

/// Schedules a callback after a delay
pub trait Timer {
    fn schedule(&mut self, delay: Duration, event: TimerEvent);
}

/// Virtual-clock timer queue
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now: Duration,
    // Insertion counter keeps events with equal due times in FIFO order
    next_seq: u64,
    queue: BinaryHeap<Reverse<(Duration, u64, TimerEvent)>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed so far
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Remove the earliest event and advance the clock to its due time.
    /// Returns the wait between the previous clock value and the event.
    pub fn pop(&mut self) -> Option<(Duration, TimerEvent)> {
        let Reverse((due, _, event)) = self.queue.pop()?;
        let wait = due.saturating_sub(self.now);
        self.now = self.now.max(due);
        Some((wait, event))
    }

    /// Drop every pending event matching `stale` without moving the clock
    pub fn discard<F: Fn(&TimerEvent) -> bool>(&mut self, stale: F) {
        self.queue.retain(|Reverse((_, _, event))| !stale(event));
    }
}

impl Timer for Scheduler {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) {
        let due = self.now + delay;
        self.queue.push(Reverse((due, self.next_seq, event)));
        self.next_seq += 1;
    }
}
