//! Repeating tick schedules.
//!
//! A [`Ticker`] hands out a [`TickHandle`] for every schedule it starts.
//! The owner stores the handle and cancels it on every exit transition.
//! Cancelling twice, or dropping an already cancelled handle, does nothing.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

/// Period between two ticks of a running countdown.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Schedules repeating tick delivery.
pub trait Ticker {
    /// Begin delivering a tick every `period`, first one after one full period.
    fn schedule_repeating(&mut self, period: Duration) -> TickHandle;
}

/// Cancellable handle for a repeating schedule.
#[must_use = "dropping a TickHandle cancels the schedule"]
pub struct TickHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl TickHandle {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_none()
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for TickHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Ticker backed by a tokio task that posts `message` into an event channel.
///
/// Must be used from within a tokio runtime with the time driver enabled.
pub struct TokioTicker<M> {
    tx: UnboundedSender<M>,
    message: M,
}

impl<M: Clone + Send + 'static> TokioTicker<M> {
    pub fn new(tx: UnboundedSender<M>, message: M) -> Self {
        Self { tx, message }
    }
}

impl<M: Clone + Send + 'static> Ticker for TokioTicker<M> {
    fn schedule_repeating(&mut self, period: Duration) -> TickHandle {
        let tx = self.tx.clone();
        let message = self.message.clone();
        let task: JoinHandle<()> = tokio::spawn(async move {
            let mut ticks = interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            ticks.tick().await;
            loop {
                ticks.tick().await;
                if tx.send(message.clone()).is_err() {
                    tracing::debug!("tick receiver closed, stopping schedule");
                    break;
                }
            }
        });
        tracing::debug!(period_ms = period.as_millis() as u64, "tick schedule started");
        TickHandle::new(move || {
            task.abort();
            tracing::debug!("tick schedule cancelled");
        })
    }
}
