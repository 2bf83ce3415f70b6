use std::collections::VecDeque;

use chrono::{Datelike, Timelike};
use tokio::time::{interval, Duration};
use tracing::{debug, info};

use crate::domain::model::{Contact, SendOutcome};
use crate::domain::ports::{Clock, Notifier};
use crate::utils::error::Result;

/// The daily send window. A contact becomes due on its birthday once the
/// clock reads the configured hour and at least the configured minute; the
/// window closes again at the end of that hour because the hour comparison is
/// exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendWindow {
    pub hour: u32,
    pub minute: u32,
}

/// Totals for one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub sent: usize,
    pub skipped: usize,
}

/// Pending-queue state machine. The queue arrives sorted ascending by birth
/// day and only ever shrinks; the run is over when it is empty.
pub struct Dispatcher<N: Notifier, C: Clock> {
    pending: VecDeque<Contact>,
    notifier: N,
    clock: C,
    window: SendWindow,
}

impl<N: Notifier, C: Clock> Dispatcher<N, C> {
    pub fn new(ranked: Vec<Contact>, notifier: N, clock: C, window: SendWindow) -> Self {
        Self {
            pending: ranked.into(),
            notifier,
            clock,
            window,
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// One evaluation step: check the current head of the queue against the
    /// clock and dispatch it when due. Only the head is ever examined, in
    /// queue order; a head whose day has already passed blocks everything
    /// behind it for the rest of the run. Returns `None` when nothing was
    /// dispatched.
    pub async fn poll_head(&mut self) -> Result<Option<SendOutcome>> {
        let Some(head) = self.pending.front() else {
            return Ok(None);
        };

        let now = self.clock.now();
        let due = now.day() == head.birthday.day
            && now.hour() == self.window.hour
            && now.minute() >= self.window.minute;
        if !due {
            return Ok(None);
        }

        // A provider failure propagates here and leaves the head in place;
        // the run aborts rather than dropping or retrying the contact.
        let outcome = self.notifier.send(head).await?;
        let dispatched = self.pending.pop_front();

        if let (Some(contact), SendOutcome::Sent { sid }) = (&dispatched, &outcome) {
            info!("Dispatched birthday message to {} (sid {})", contact.name, sid);
        }
        debug!("{} contacts still pending", self.pending.len());

        Ok(Some(outcome))
    }

    /// Drives the queue to empty, re-evaluating the head once per poll
    /// interval. Each contact is dispatched at most once and never
    /// re-enqueued; an empty queue is the only exit.
    pub async fn run(&mut self, poll_interval: Duration) -> Result<DispatchSummary> {
        let mut ticker = interval(poll_interval);
        let mut summary = DispatchSummary::default();

        while !self.pending.is_empty() {
            ticker.tick().await;
            match self.poll_head().await? {
                Some(SendOutcome::Sent { .. }) => summary.sent += 1,
                Some(SendOutcome::SkippedInvalidRecipient) => summary.skipped += 1,
                None => {}
            }
        }

        Ok(summary)
    }
}
