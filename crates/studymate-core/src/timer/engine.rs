//! Timer engine implementation.
//!
//! Wraps the pure [`TimerState`] machine with tick-source bookkeeping,
//! event emission and completion notifiers. The engine does not own a
//! clock or a thread: whoever hosts it supplies ticks, each carrying the
//! [`TickToken`] handed out by the last `start()`.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new();
//! engine.start();
//! // Once per second, from the active tick source:
//! if let Some(token) = engine.active_tick() {
//!     engine.tick(token); // Some(Event::TimerCompleted) on expiry
//! }
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::mode::{TimerMode, DEFAULT_LONG_BREAK_INTERVAL};
use super::state::{Completion, TimerCommand, TimerPhase, TimerState, Transition};
use crate::events::Event;

/// Identifies one armed tick source.
///
/// A fresh token is issued on every `start()`. Ticks carrying any other
/// token are stale and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickToken(u64);

impl TickToken {
    pub fn generation(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TickToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick#{}", self.0)
    }
}

/// Receives a call for every expired countdown.
///
/// Purely a notification (alert, sound, haptic); nothing is returned to the
/// engine.
pub trait CompletionNotifier {
    fn on_complete(&self, completion: &Completion);
}

impl<F> CompletionNotifier for F
where
    F: Fn(&Completion),
{
    fn on_complete(&self, completion: &Completion) {
        self(completion)
    }
}

/// Core timer engine.
pub struct TimerEngine {
    state: TimerState,
    long_break_interval: u32,
    active_tick: Option<TickToken>,
    next_generation: u64,
    notifiers: Vec<Box<dyn CompletionNotifier>>,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TimerEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerEngine")
            .field("state", &self.state)
            .field("long_break_interval", &self.long_break_interval)
            .field("active_tick", &self.active_tick)
            .field("notifiers", &self.notifiers.len())
            .finish()
    }
}

impl TimerEngine {
    /// Starts in `Idle(Focus)` with 1500 seconds remaining.
    pub fn new() -> Self {
        Self {
            state: TimerState::new(),
            long_break_interval: DEFAULT_LONG_BREAK_INTERVAL,
            active_tick: None,
            next_generation: 1,
            notifiers: Vec::new(),
        }
    }

    pub fn with_long_break_interval(mut self, interval: u32) -> Self {
        self.long_break_interval = interval;
        self
    }

    pub fn add_notifier(&mut self, notifier: Box<dyn CompletionNotifier>) {
        self.notifiers.push(notifier);
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn phase(&self) -> TimerPhase {
        self.state.phase
    }

    pub fn mode(&self) -> TimerMode {
        self.state.mode
    }

    pub fn remaining_secs(&self) -> u64 {
        self.state.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn completed_focus_count(&self) -> u32 {
        self.state.completed_focus_count
    }

    pub fn long_break_interval(&self) -> u32 {
        self.long_break_interval
    }

    /// Token of the tick source that may currently drive the countdown.
    ///
    /// `Some` exactly while the engine is running.
    pub fn active_tick(&self) -> Option<TickToken> {
        self.active_tick
    }

    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    pub fn display(&self) -> String {
        self.state.display()
    }

    pub fn cycle_position(&self) -> u32 {
        self.state.cycle_position(self.long_break_interval)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.state.phase,
            mode: self.state.mode,
            label: self.state.mode.label().to_string(),
            remaining_secs: self.state.remaining_secs,
            total_secs: self.state.total_secs(),
            display: self.state.display(),
            progress: self.state.progress(),
            completed_focus_count: self.state.completed_focus_count,
            cycle_position: self.cycle_position(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        let transition = self.step(TimerCommand::Start);
        if !transition.changed {
            return None;
        }
        let token = self.arm_tick();
        tracing::debug!(mode = ?self.state.mode, remaining = self.state.remaining_secs, %token, "timer started");
        Some(Event::TimerStarted {
            mode: self.state.mode,
            remaining_secs: self.state.remaining_secs,
            tick: token,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.step(TimerCommand::Pause).changed {
            return None;
        }
        self.cancel_tick();
        tracing::debug!(remaining = self.state.remaining_secs, "timer paused");
        Some(Event::TimerPaused {
            mode: self.state.mode,
            remaining_secs: self.state.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Advance one second. Returns `Some(Event::TimerCompleted)` when the
    /// countdown expires.
    ///
    /// Ticks from a cancelled or superseded source are dropped.
    pub fn tick(&mut self, token: TickToken) -> Option<Event> {
        if self.active_tick != Some(token) {
            tracing::debug!(%token, active = ?self.active_tick, "ignoring stale tick");
            return None;
        }
        let transition = self.step(TimerCommand::Tick);
        let completion = transition.completion?;
        self.cancel_tick();
        tracing::info!(
            completed = ?completion.completed_mode,
            next = ?completion.recommended_next,
            count = completion.completed_focus_count,
            "timer completed"
        );
        for notifier in &self.notifiers {
            notifier.on_complete(&completion);
        }
        Some(Event::TimerCompleted {
            completed_mode: completion.completed_mode,
            recommended_next: completion.recommended_next,
            completed_focus_count: completion.completed_focus_count,
            at: Utc::now(),
        })
    }

    /// Switch presets. Always stops the countdown and restores the full
    /// duration of `mode`.
    pub fn select_mode(&mut self, mode: TimerMode) -> Event {
        self.step(TimerCommand::SelectMode(mode));
        self.cancel_tick();
        tracing::debug!(?mode, "mode selected");
        Event::ModeSelected {
            mode,
            duration_secs: mode.duration_secs(),
            at: Utc::now(),
        }
    }

    /// Always succeeds; the countdown stops and the current mode's full
    /// duration is restored.
    pub fn reset(&mut self) -> Event {
        self.step(TimerCommand::Reset);
        self.cancel_tick();
        tracing::debug!(mode = ?self.state.mode, "timer reset");
        Event::TimerReset {
            mode: self.state.mode,
            remaining_secs: self.state.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Start when stopped, pause when running (the single start/pause button).
    pub fn toggle(&mut self) -> Option<Event> {
        if self.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn step(&mut self, command: TimerCommand) -> Transition {
        let transition = self
            .state
            .apply_with_interval(command, self.long_break_interval);
        self.state = transition.state;
        transition
    }

    fn arm_tick(&mut self) -> TickToken {
        self.cancel_tick();
        let token = TickToken(self.next_generation);
        self.next_generation += 1;
        self.active_tick = Some(token);
        token
    }

    /// Idempotent.
    fn cancel_tick(&mut self) {
        self.active_tick = None;
    }
}
