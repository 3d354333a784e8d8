use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Number of focus completions per long-break cycle.
pub const DEFAULT_LONG_BREAK_INTERVAL: u32 = 4;

/// One of the three fixed countdown presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimerMode {
    #[default]
    Focus,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    pub const ALL: [TimerMode; 3] = [TimerMode::Focus, TimerMode::ShortBreak, TimerMode::LongBreak];

    pub fn label(self) -> &'static str {
        match self {
            TimerMode::Focus => "Focus",
            TimerMode::ShortBreak => "Short Break",
            TimerMode::LongBreak => "Long Break",
        }
    }

    pub fn duration_secs(self) -> u64 {
        match self {
            TimerMode::Focus => 25 * 60,
            TimerMode::ShortBreak => 5 * 60,
            TimerMode::LongBreak => 15 * 60,
        }
    }

    pub fn is_break(self) -> bool {
        !matches!(self, TimerMode::Focus)
    }

    /// Mode to suggest once a session of `self` has expired.
    ///
    /// `completed_focus_count` must already include the session that just
    /// finished. Breaks always lead back to focus.
    pub fn recommended_next(self, completed_focus_count: u32, long_break_interval: u32) -> TimerMode {
        match self {
            TimerMode::Focus => {
                if long_break_interval > 0 && completed_focus_count % long_break_interval == 0 {
                    TimerMode::LongBreak
                } else {
                    TimerMode::ShortBreak
                }
            }
            TimerMode::ShortBreak | TimerMode::LongBreak => TimerMode::Focus,
        }
    }
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimerMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "focus" | "pomodoro" => Ok(TimerMode::Focus),
            "short-break" | "short" => Ok(TimerMode::ShortBreak),
            "long-break" | "long" => Ok(TimerMode::LongBreak),
            other => Err(ValidationError::invalid(
                "mode",
                format!("unknown timer mode '{other}' (expected focus, short-break or long-break)"),
            )),
        }
    }
}

/// Format seconds as zero-padded `MM:SS`.
///
/// Minutes are not capped at 59, so 6000 seconds renders as `100:00`.
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
