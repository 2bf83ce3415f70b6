pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{clock::WallClock, csv_source::CsvContactSource, twilio::TwilioNotifier};
pub use crate::config::CliConfig;
pub use crate::core::dispatcher::{DispatchSummary, Dispatcher, SendWindow};
pub use crate::core::engine::DispatchEngine;
pub use crate::utils::error::{DispatchError, Result};
