mod engine;
mod mode;
mod state;
mod ticker;

pub use engine::{CompletionNotifier, TickToken, TimerEngine};
pub use mode::{format_clock, TimerMode, DEFAULT_LONG_BREAK_INTERVAL};
pub use state::{Completion, TimerCommand, TimerPhase, TimerState, Transition};
pub use ticker::{Ticker, DEFAULT_TICK_PERIOD};
