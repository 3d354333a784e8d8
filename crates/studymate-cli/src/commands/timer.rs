use clap::Subcommand;
use std::time::Duration;
use studymate_core::records::demo;
use studymate_core::search::SearchSession;
use studymate_core::timer::{Completion, Ticker, TimerEngine, TimerMode};
use studymate_core::{Config, Event};

use super::{print_json, run_search};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run a countdown in real time, printing the clock on every tick
    Run {
        /// focus, short-break or long-break
        #[arg(long, default_value = "focus")]
        mode: TimerMode,
        /// Tick period in milliseconds (defaults to timer.tick_interval_ms)
        #[arg(long)]
        tick_ms: Option<u64>,
    },
    /// Drive the timer with a fixed number of ticks and print the final state
    Simulate {
        /// focus, short-break or long-break
        #[arg(long, default_value = "focus")]
        mode: TimerMode,
        /// Number of one-second ticks to deliver
        #[arg(long)]
        ticks: u64,
        /// Pause after this many ticks and stop delivering
        #[arg(long)]
        pause_at: Option<u64>,
    },
    /// Search the "What are you working on?" task list
    Tasks {
        /// Text to look for (case-insensitive)
        query: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn build_engine(config: &Config, mode: TimerMode) -> TimerEngine {
    let mut engine = config.timer_engine();
    let alerts = config.notifications.clone();
    if alerts.enabled {
        engine.add_notifier(Box::new(move |c: &Completion| {
            if alerts.sound {
                eprint!("\x07");
            }
            eprintln!(
                "{} complete. Next up: {}",
                c.completed_mode, c.recommended_next
            );
        }));
    }
    engine.select_mode(mode);
    engine
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        TimerAction::Run { mode, tick_ms } => {
            let period = match tick_ms {
                Some(0) => return Err("--tick-ms must be greater than zero".into()),
                Some(ms) => Duration::from_millis(ms),
                None => config.tick_period(),
            };
            tracing::debug!(%mode, ?period, "starting countdown");
            let mut engine = build_engine(&config, mode);
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?;
            let completed = runtime.block_on(countdown(&mut engine, period));
            if let Some(event) = completed {
                print_json(&event)?;
            }
        }
        TimerAction::Simulate {
            mode,
            ticks,
            pause_at,
        } => {
            let mut engine = build_engine(&config, mode);
            let completed = simulate(&mut engine, ticks, pause_at);
            print_json(&engine.snapshot())?;
            if let Some(event) = completed {
                print_json(&event)?;
            }
        }
        TimerAction::Tasks { query, json } => {
            let tasks = demo::focus_tasks();
            let mut session =
                SearchSession::new().with_max_suggestions(config.search.max_suggestions as usize);
            let output = run_search(&mut session, query, &tasks);

            if json {
                print_json(&output)?;
                return Ok(());
            }

            for suggestion in output.suggestions {
                println!("suggestion: {suggestion}");
            }
            for task in &output.results {
                println!("- {task}");
            }
        }
    }
    Ok(())
}

/// Feed ticks from a live [`Ticker`] until the countdown expires.
async fn countdown(engine: &mut TimerEngine, period: Duration) -> Option<Event> {
    let (mut ticker, mut ticks) = Ticker::new(period);
    engine.start();
    ticker.sync(engine.active_tick());
    println!("{} {}", engine.mode(), engine.display());

    while let Some(token) = ticks.recv().await {
        let event = engine.tick(token);
        ticker.sync(engine.active_tick());
        println!("{}", engine.display());
        if event.is_some() {
            return event;
        }
    }
    None
}

/// Deliver up to `ticks` ticks. Stops early once the countdown is paused or
/// has expired.
fn simulate(engine: &mut TimerEngine, ticks: u64, pause_at: Option<u64>) -> Option<Event> {
    engine.start();
    for delivered in 0..ticks {
        if pause_at == Some(delivered) {
            engine.pause();
        }
        let token = engine.active_tick()?;
        if let Some(event) = engine.tick(token) {
            return Some(event);
        }
    }
    None
}
