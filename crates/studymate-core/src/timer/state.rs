//! Pure countdown state machine.
//!
//! `TimerState::apply` is a total function `(state, command) -> transition`.
//! It owns no clock and no tick source; see [`TimerEngine`](super::TimerEngine)
//! for the stateful wrapper that does.
//!
//! ```text
//! Idle --start--> Running --pause--> Paused --start--> Running
//! Running(1) --tick--> Expired
//! any --select_mode(m)--> Idle(m)      any --reset--> Idle(same mode)
//! ```

use serde::{Deserialize, Serialize};

use super::mode::{format_clock, TimerMode, DEFAULT_LONG_BREAK_INTERVAL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    /// Countdown reached zero; waiting for the user to pick the next mode.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerCommand {
    Start,
    Pause,
    Tick,
    SelectMode(TimerMode),
    Reset,
}

/// Emitted exactly once per `Running(m, 1) -> Expired(m)` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub completed_mode: TimerMode,
    pub recommended_next: TimerMode,
    pub completed_focus_count: u32,
}

/// Result of applying one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: TimerState,
    pub completion: Option<Completion>,
    /// False when the command was a no-op for the prior state.
    pub changed: bool,
}

/// Snapshot of a countdown.
///
/// Invariants: `remaining_secs <= mode.duration_secs()`, and the phase is
/// never `Running` while `remaining_secs == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub mode: TimerMode,
    pub remaining_secs: u64,
    pub phase: TimerPhase,
    pub completed_focus_count: u32,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerState {
    /// `Idle(Focus)` with the full focus duration and no completed sessions.
    pub fn new() -> Self {
        Self::idle(TimerMode::Focus, 0)
    }

    fn idle(mode: TimerMode, completed_focus_count: u32) -> Self {
        Self {
            mode,
            remaining_secs: mode.duration_secs(),
            phase: TimerPhase::Idle,
            completed_focus_count,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    pub fn total_secs(&self) -> u64 {
        self.mode.duration_secs()
    }

    /// 0.0 .. 1.0 elapsed fraction of the current mode.
    pub fn progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        (total.saturating_sub(self.remaining_secs)) as f64 / total as f64
    }

    /// Remaining time as `MM:SS`.
    pub fn display(&self) -> String {
        format_clock(self.remaining_secs)
    }

    /// Filled dots in the long-break cycle indicator.
    pub fn cycle_position(&self, long_break_interval: u32) -> u32 {
        if long_break_interval == 0 {
            return 0;
        }
        self.completed_focus_count % long_break_interval
    }

    pub fn apply(self, command: TimerCommand) -> Transition {
        self.apply_with_interval(command, DEFAULT_LONG_BREAK_INTERVAL)
    }

    /// Apply `command`, using `long_break_interval` to pick the recommended
    /// mode after a focus session expires.
    pub fn apply_with_interval(self, command: TimerCommand, long_break_interval: u32) -> Transition {
        match command {
            TimerCommand::Start => match self.phase {
                TimerPhase::Idle | TimerPhase::Paused if self.remaining_secs > 0 => {
                    self.changed_to(Self {
                        phase: TimerPhase::Running,
                        ..self
                    })
                }
                _ => self.unchanged(),
            },
            TimerCommand::Pause => match self.phase {
                TimerPhase::Running => self.changed_to(Self {
                    phase: TimerPhase::Paused,
                    ..self
                }),
                _ => self.unchanged(),
            },
            TimerCommand::Tick => match self.phase {
                TimerPhase::Running if self.remaining_secs > 1 => self.changed_to(Self {
                    remaining_secs: self.remaining_secs - 1,
                    ..self
                }),
                TimerPhase::Running => self.expire(long_break_interval),
                _ => self.unchanged(),
            },
            TimerCommand::SelectMode(mode) => {
                self.changed_to(Self::idle(mode, self.completed_focus_count))
            }
            TimerCommand::Reset => self.changed_to(Self::idle(self.mode, self.completed_focus_count)),
        }
    }

    fn expire(self, long_break_interval: u32) -> Transition {
        let completed_focus_count = if self.mode == TimerMode::Focus {
            self.completed_focus_count.saturating_add(1)
        } else {
            self.completed_focus_count
        };
        let state = Self {
            remaining_secs: 0,
            phase: TimerPhase::Expired,
            completed_focus_count,
            ..self
        };
        Transition {
            state,
            completion: Some(Completion {
                completed_mode: self.mode,
                recommended_next: self
                    .mode
                    .recommended_next(completed_focus_count, long_break_interval),
                completed_focus_count,
            }),
            changed: true,
        }
    }

    fn changed_to(self, state: TimerState) -> Transition {
        Transition {
            state,
            completion: None,
            changed: state != self,
        }
    }

    fn unchanged(self) -> Transition {
        Transition {
            state: self,
            completion: None,
            changed: false,
        }
    }
}
