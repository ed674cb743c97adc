//! Periodic trigger for offer synchronisation.
//!
//! The scheduler owns one tokio task. Ticks run sequentially, so two syncs
//! never overlap. [`OfferSyncSchedulerHandle::stop`] lets a running sync
//! finish before the task exits. Each run gets its own [`TraceId`] so its log
//! lines and errors can be told apart from concurrent HTTP traffic.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{Instrument, debug, error, info, info_span, warn};

use crate::domain::TraceId;
use crate::domain::ports::OffersCommand;

const DEFAULT_SYNC_INTERVAL: Duration = Duration::from_secs(3 * 60 * 60);
const MIN_SYNC_INTERVAL: Duration = Duration::from_millis(1);

/// Timing configuration for the sync scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferSyncSchedulerConfig {
    /// Delay between the starts of consecutive syncs.
    pub interval: Duration,
    /// Run a sync as soon as the scheduler starts.
    pub run_on_start: bool,
}

impl OfferSyncSchedulerConfig {
    /// Longest interval the scheduler honours; longer values are clamped.
    pub const MAX_INTERVAL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

    fn effective_interval(&self) -> Duration {
        self.interval.clamp(MIN_SYNC_INTERVAL, Self::MAX_INTERVAL)
    }
}

impl Default for OfferSyncSchedulerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_SYNC_INTERVAL,
            run_on_start: true,
        }
    }
}

/// Scheduler invoking [`OffersCommand::run_sync`] on a fixed interval.
pub struct OfferSyncScheduler {
    command: Arc<dyn OffersCommand>,
    config: OfferSyncSchedulerConfig,
}

impl OfferSyncScheduler {
    /// Build a scheduler for `command`.
    pub fn new(command: Arc<dyn OffersCommand>, config: OfferSyncSchedulerConfig) -> Self {
        Self { command, config }
    }

    /// Spawn the timer task on the current tokio runtime.
    #[must_use = "dropping the handle stops the scheduler"]
    pub fn start(self) -> OfferSyncSchedulerHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(run_loop(self.command, self.config, shutdown_rx));
        OfferSyncSchedulerHandle { shutdown_tx, task }
    }
}

/// Lifecycle handle for a started scheduler.
///
/// Dropping the handle without calling [`Self::stop`] also ends the task after
/// its current tick.
pub struct OfferSyncSchedulerHandle {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl OfferSyncSchedulerHandle {
    /// Signal shutdown and wait for the timer task to exit.
    pub async fn stop(self) {
        if self.shutdown_tx.send(true).is_err() {
            debug!("offer sync scheduler already exited");
        }
        if let Err(join_error) = self.task.await {
            error!(%join_error, "offer sync scheduler task failed");
        }
    }
}

async fn run_loop(
    command: Arc<dyn OffersCommand>,
    config: OfferSyncSchedulerConfig,
    mut shutdown: watch::Receiver<bool>,
) {
    let period = config.effective_interval();
    if period != config.interval {
        warn!(
            requested_secs = config.interval.as_secs(),
            interval_secs = period.as_secs(),
            "sync interval out of range; clamped"
        );
    }
    let now = Instant::now();
    let start = if config.run_on_start { now } else { now + period };
    let mut ticker = interval_at(start, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!(interval_secs = period.as_secs(), "offer sync scheduler started");

    loop {
        tokio::select! {
            biased;
            _ = shutdown.changed() => break,
            _ = ticker.tick() => {
                let trace_id = TraceId::generate();
                let span = info_span!("scheduled_sync", trace_id = %trace_id);
                trace_id.scope(run_once(command.as_ref()).instrument(span)).await;
            }
        }
    }

    info!("offer sync scheduler stopped");
}

async fn run_once(command: &dyn OffersCommand) {
    match command.run_sync().await {
        Ok(inserted) => info!(inserted = inserted.len(), "scheduled offer sync completed"),
        Err(error) => error!(%error, "scheduled offer sync failed"),
    }
}
