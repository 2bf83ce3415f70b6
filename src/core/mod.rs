pub mod dispatcher;
pub mod engine;
pub mod ranker;

pub use crate::domain::model::{Contact, SendOutcome};
pub use crate::domain::ports::{Clock, ContactSource, Notifier};
pub use crate::utils::error::Result;
