use serde::{Deserialize, Serialize};

/// Birth date as stored in the contact file: a slash-delimited `MM/DD/...`
/// field. Only the month and day tokens matter; the year (and anything else
/// after the second slash) is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub month: u32,
    pub day: u32,
}

impl BirthDate {
    /// Strict parse of the first two slash-separated tokens. A missing or
    /// non-numeric token is a data error for the whole run, never a silent
    /// skip.
    pub fn parse(field: &str) -> std::result::Result<Self, String> {
        let mut tokens = field.split('/');
        let month_token = tokens.next().unwrap_or("");
        let day_token = tokens
            .next()
            .ok_or_else(|| format!("birth date '{}' has no day token", field))?;

        let month = month_token
            .parse::<u32>()
            .map_err(|_| format!("non-numeric month '{}' in birth date '{}'", month_token, field))?;
        let day = day_token
            .parse::<u32>()
            .map_err(|_| format!("non-numeric day '{}' in birth date '{}'", day_token, field))?;

        Ok(Self { month, day })
    }
}

/// One row of the contact store. Immutable once loaded; the dispatcher only
/// ever removes contacts from its working queue, never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    /// Expected to be 10 digits, but may be absent or malformed; the notifier
    /// decides whether it is usable.
    pub phone: String,
    pub birthday: BirthDate,
    /// The full source row, carried as opaque passthrough.
    pub raw: Vec<String>,
}

/// Explicit result of one notification attempt. Delivery failures are the
/// error path, not an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Sent { sid: String },
    SkippedInvalidRecipient,
}
