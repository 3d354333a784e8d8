use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{TickToken, TimerMode, TimerPhase};

/// Every timer state change produces an Event.
/// The presentation layer renders them; notifiers observe completions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: TimerMode,
        remaining_secs: u64,
        /// Token the tick source must present for this run.
        tick: TickToken,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: TimerMode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerCompleted {
        completed_mode: TimerMode,
        recommended_next: TimerMode,
        completed_focus_count: u32,
        at: DateTime<Utc>,
    },
    ModeSelected {
        mode: TimerMode,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: TimerMode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: TimerPhase,
        mode: TimerMode,
        label: String,
        remaining_secs: u64,
        total_secs: u64,
        /// `MM:SS`
        display: String,
        progress: f64,
        completed_focus_count: u32,
        cycle_position: u32,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Wire name of the variant, as written in the `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::TimerStarted { .. } => "TimerStarted",
            Event::TimerPaused { .. } => "TimerPaused",
            Event::TimerCompleted { .. } => "TimerCompleted",
            Event::ModeSelected { .. } => "ModeSelected",
            Event::TimerReset { .. } => "TimerReset",
            Event::StateSnapshot { .. } => "StateSnapshot",
        }
    }
}
