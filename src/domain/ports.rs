use crate::domain::model::{Contact, SendOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Contact store. Returns the contacts whose birth month matches `month`, in
/// source order; the ranker reorders them afterwards.
pub trait ContactSource: Send + Sync {
    fn load_for_month(&self, month: u32) -> Result<Vec<Contact>>;
}

/// Outbound notification channel. Implementations must skip (not fail) a
/// contact whose phone number is unusable.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, contact: &Contact) -> Result<SendOutcome>;
}

/// Wall-clock seam so the dispatcher can be driven by scripted timestamps in
/// tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
