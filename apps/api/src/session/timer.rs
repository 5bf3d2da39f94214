use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Which repeating timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Countdown,
    Indicators,
}

/// Timer event tagged with the generation of the recording window that
/// started it. Events from an older generation are stale and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    pub generation: u64,
    pub kind: TimerKind,
}

/// A repeating timer task that stops when the handle is dropped.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Sends `event` every `period`, first after one full period.
    pub fn every<E>(period: Duration, event: E, tx: UnboundedSender<E>) -> Self
    where
        E: Clone + Send + 'static,
    {
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(event.clone()).is_err() {
                    break;
                }
            }
        });
        Self { task }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// The two timers that run while an answer is being recorded.
#[derive(Debug)]
pub struct RecordingTimers {
    generation: u64,
    _countdown: TimerHandle,
    _indicators: TimerHandle,
}

impl RecordingTimers {
    pub fn start(
        generation: u64,
        tick: Duration,
        indicator_period: Duration,
        tx: &UnboundedSender<TimerEvent>,
    ) -> Self {
        Self {
            generation,
            _countdown: TimerHandle::every(
                tick,
                TimerEvent {
                    generation,
                    kind: TimerKind::Countdown,
                },
                tx.clone(),
            ),
            _indicators: TimerHandle::every(
                indicator_period,
                TimerEvent {
                    generation,
                    kind: TimerKind::Indicators,
                },
                tx.clone(),
            ),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
