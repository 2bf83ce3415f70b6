use std::path::PathBuf;

use crate::domain::model::{BirthDate, Contact};
use crate::domain::ports::ContactSource;
use crate::utils::error::{DispatchError, Result};

// Fixed column layout of the contact export.
const NAME_COLUMN: usize = 0;
const PHONE_COLUMN: usize = 3;
const BIRTH_DATE_COLUMN: usize = 8;

/// Contact store backed by a comma-delimited file whose first row is a
/// header.
#[derive(Debug, Clone)]
pub struct CsvContactSource {
    path: PathBuf,
}

impl CsvContactSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn field<'r>(
    row: &'r csv::StringRecord,
    line: usize,
    column: usize,
    what: &str,
) -> Result<&'r str> {
    row.get(column).ok_or_else(|| DispatchError::DataParse {
        row: line,
        reason: format!("missing {} column {}", what, column),
    })
}

impl ContactSource for CsvContactSource {
    fn load_for_month(&self, month: u32) -> Result<Vec<Contact>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let mut contacts = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row?;
            // 1-based file line, accounting for the header row.
            let line = index + 2;

            let date_field = field(&row, line, BIRTH_DATE_COLUMN, "birth date")?;
            let birthday = BirthDate::parse(date_field)
                .map_err(|reason| DispatchError::DataParse { row: line, reason })?;
            if birthday.month != month {
                continue;
            }

            let name = field(&row, line, NAME_COLUMN, "name")?.to_string();
            let phone = field(&row, line, PHONE_COLUMN, "phone")?.to_string();
            contacts.push(Contact {
                name,
                phone,
                birthday,
                raw: row.iter().map(str::to_string).collect(),
            });
        }

        Ok(contacts)
    }
}
