//! Cancellable repeating task.
//!
//! A background thread forwards `crossbeam_channel::tick` events to the owner
//! until it is told to stop. The tick body itself runs on the owner's thread,
//! so animation state never crosses threads.

use crossbeam_channel::{bounded, select, tick, unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// Count of live repeating tasks, shared between a driver and its tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskCounter(Arc<AtomicUsize>);

impl TaskCounter {
    /// Create a counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks whose worker thread is still running.
    #[must_use]
    pub fn live(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn enter(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    fn leave(&self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Handle to one running repeating task.
///
/// Dropping the handle cancels the task and joins its thread.
#[derive(Debug)]
pub struct RepeatingTask {
    stop: Option<Sender<()>>,
    ticks: Receiver<()>,
    worker: Option<JoinHandle<()>>,
    period: Duration,
}

impl RepeatingTask {
    /// Spawn a task that fires every `period`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the worker thread cannot be spawned.
    pub fn spawn(period: Duration, counter: &TaskCounter) -> std::io::Result<Self> {
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let (tick_tx, tick_rx) = unbounded::<()>();
        let counter = counter.clone();

        // Count before spawning so `live()` is accurate as soon as we return.
        counter.enter();
        let spawned = std::thread::Builder::new()
            .name("orbit-ticker".to_string())
            .spawn({
                let counter = counter.clone();
                move || {
                    forward_ticks(period, &stop_rx, &tick_tx);
                    counter.leave();
                }
            });

        let worker = match spawned {
            Ok(handle) => handle,
            Err(err) => {
                counter.leave();
                return Err(err);
            }
        };

        tracing::debug!(period_ms = period.as_millis(), "repeating task started");

        Ok(Self {
            stop: Some(stop_tx),
            ticks: tick_rx,
            worker: Some(worker),
            period,
        })
    }

    /// Tick period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Number of ticks that fired since the last drain, without blocking.
    #[must_use]
    pub fn drain(&self) -> usize {
        self.ticks.try_iter().count()
    }

    /// Block until the next tick or until `timeout` elapses.
    ///
    /// Returns `true` if a tick arrived.
    #[must_use]
    pub fn wait(&self, timeout: Duration) -> bool {
        self.ticks.recv_timeout(timeout).is_ok()
    }

    /// Cancel the task and join its worker thread.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(stop) = self.stop.take() {
            // Disconnecting also wakes the worker if the send races a full buffer.
            let _ = stop.try_send(());
        }
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::warn!("repeating task worker panicked");
            }
            tracing::debug!("repeating task stopped");
        }
    }
}

impl Drop for RepeatingTask {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn forward_ticks(period: Duration, stop: &Receiver<()>, out: &Sender<()>) {
    let ticker = tick(period);
    loop {
        select! {
            recv(stop) -> _ => break,
            recv(ticker) -> _ => {
                if out.send(()).is_err() {
                    break;
                }
            }
        }
    }
}
