use chrono::Datelike;
use tokio::time::Duration;
use tracing::info;

use crate::core::dispatcher::{DispatchSummary, Dispatcher, SendWindow};
use crate::core::ranker::rank;
use crate::domain::ports::{Clock, ContactSource, Notifier};
use crate::utils::error::Result;

/// Wires the pipeline together: load the current month's contacts, rank them
/// by day, then hand the queue to the dispatcher and drive it to completion.
pub struct DispatchEngine<S: ContactSource, N: Notifier, C: Clock> {
    source: S,
    notifier: N,
    clock: C,
    window: SendWindow,
    poll_interval: Duration,
}

impl<S: ContactSource, N: Notifier, C: Clock> DispatchEngine<S, N, C> {
    pub fn new(
        source: S,
        notifier: N,
        clock: C,
        window: SendWindow,
        poll_interval: Duration,
    ) -> Self {
        Self {
            source,
            notifier,
            clock,
            window,
            poll_interval,
        }
    }

    pub async fn run(self) -> Result<DispatchSummary> {
        let month = self.clock.now().month();
        info!("Loading contacts with a birthday in month {}", month);
        let contacts = self.source.load_for_month(month)?;
        info!("Loaded {} contacts", contacts.len());

        let ranked = rank(contacts);

        let mut dispatcher = Dispatcher::new(ranked, self.notifier, self.clock, self.window);
        info!(
            "Dispatching at {:02}:{:02}, polling every {:?}",
            self.window.hour, self.window.minute, self.poll_interval
        );
        let summary = dispatcher.run(self.poll_interval).await?;

        info!(
            "Dispatch run complete: {} sent, {} skipped",
            summary.sent, summary.skipped
        );
        Ok(summary)
    }
}
