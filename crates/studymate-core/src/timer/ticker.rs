//! Periodic tick source backed by a tokio interval task.
//!
//! At most one interval task is alive per `Ticker`. Re-arming aborts the
//! previous task first, and tokens from an aborted task that were already
//! queued are rejected by [`TimerEngine::tick`](super::TimerEngine::tick).
//!
//! Must be used from within a tokio runtime.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::engine::TickToken;

pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct Ticker {
    period: Duration,
    tx: mpsc::UnboundedSender<TickToken>,
    armed: Option<(TickToken, JoinHandle<()>)>,
}

impl Ticker {
    /// Create a ticker and the receiving end its ticks arrive on.
    pub fn new(period: Duration) -> (Self, mpsc::UnboundedReceiver<TickToken>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let ticker = Self {
            period,
            tx,
            armed: None,
        };
        (ticker, rx)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn armed(&self) -> Option<TickToken> {
        self.armed.as_ref().map(|(token, _)| *token)
    }

    /// Begin emitting `token` once per period. The first tick fires one full
    /// period after arming.
    pub fn arm(&mut self, token: TickToken) {
        self.cancel();
        let tx = self.tx.clone();
        let period = self.period;
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(token).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(%token, ?period, "tick source armed");
        self.armed = Some((token, handle));
    }

    /// Stop the active interval task. Cancelling twice is a no-op.
    pub fn cancel(&mut self) {
        if let Some((token, handle)) = self.armed.take() {
            handle.abort();
            tracing::debug!(%token, "tick source cancelled");
        }
    }

    /// Bring the ticker in line with the engine's active token: arm for a new
    /// token, cancel when the engine has none, leave a matching source alone.
    pub fn sync(&mut self, active: Option<TickToken>) {
        match active {
            Some(token) if self.armed() == Some(token) => {}
            Some(token) => self.arm(token),
            None => self.cancel(),
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Event;
    use crate::timer::{TimerEngine, TimerMode, TimerPhase};
    use tokio::time::timeout;

    const FAST: Duration = Duration::from_millis(5);

    #[tokio::test]
    async fn delivers_armed_token() {
        let mut engine = TimerEngine::new();
        let (mut ticker, mut rx) = Ticker::new(FAST);
        engine.start();
        ticker.sync(engine.active_tick());

        let token = timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("tick within timeout")
            .expect("channel open");
        assert_eq!(Some(token), engine.active_tick());
        engine.tick(token);
        assert_eq!(engine.remaining_secs(), 1499);
    }

    #[tokio::test]
    async fn cancel_is_idempotent() {
        let mut engine = TimerEngine::new();
        let (mut ticker, _rx) = Ticker::new(FAST);
        engine.start();
        ticker.sync(engine.active_tick());
        assert!(ticker.armed().is_some());

        ticker.cancel();
        ticker.cancel();
        assert!(ticker.armed().is_none());
    }

    #[tokio::test]
    async fn rearm_replaces_previous_source() {
        let mut engine = TimerEngine::new();
        let (mut ticker, mut rx) = Ticker::new(FAST);

        engine.start();
        ticker.sync(engine.active_tick());
        engine.pause();
        ticker.sync(engine.active_tick());
        engine.start();
        ticker.sync(engine.active_tick());
        assert_eq!(ticker.armed(), engine.active_tick());

        // Drive a short break to completion; stale tokens must not speed it up.
        engine.select_mode(TimerMode::ShortBreak);
        ticker.sync(engine.active_tick());
        engine.start();
        ticker.sync(engine.active_tick());

        let mut applied = 0;
        while engine.phase() != TimerPhase::Expired {
            let token = timeout(Duration::from_secs(10), rx.recv())
                .await
                .expect("tick within timeout")
                .expect("channel open");
            let before = engine.remaining_secs();
            let event = engine.tick(token);
            if engine.remaining_secs() != before {
                applied += 1;
            }
            if let Some(Event::TimerCompleted { .. }) = event {
                ticker.sync(engine.active_tick());
            }
        }
        assert_eq!(applied, 300);
        assert!(ticker.armed().is_none());
    }
}
