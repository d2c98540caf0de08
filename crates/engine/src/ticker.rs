//! Cancelable one-second clock.
//!
//! Bridges the sync game loop with a tokio interval task. The task only sends
//! [`Tick`]s over a channel; the owner drains them on its own thread, so the
//! session is never touched from the runtime.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::trace;

/// One elapsed period, tagged with the run that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
}

pub struct Ticker {
    handle: Handle,
    period: Duration,
    tx: mpsc::UnboundedSender<Tick>,
    rx: mpsc::UnboundedReceiver<Tick>,
    task: Option<JoinHandle<()>>,
    /// Bumped on every start; ticks from older runs are dropped.
    generation: u64,
}

impl Ticker {
    pub fn new(handle: Handle, period: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            period,
            tx,
            rx,
            task: None,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Start a fresh run. The first tick arrives one full period from now.
    pub fn start(&mut self) {
        self.stop();
        self.generation = self.generation.wrapping_add(1);

        let generation = self.generation;
        let period = self.period;
        let tx = self.tx.clone();
        self.task = Some(self.handle.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(Tick { generation }).is_err() {
                    break;
                }
            }
        }));
        trace!(generation, "ticker started");
    }

    /// Cancel the current run, if any. Ticks already queued are discarded by
    /// the next [`Self::drain`].
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            trace!(generation = self.generation, "ticker stopped");
        }
    }

    /// Count the ticks of the current run received since the last drain.
    pub fn drain(&mut self) -> u32 {
        let mut count = 0;
        while let Ok(tick) = self.rx.try_recv() {
            if self.task.is_some() && tick.generation == self.generation {
                count += 1;
            }
        }
        count
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
