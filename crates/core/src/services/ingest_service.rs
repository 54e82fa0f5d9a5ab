use crate::errors::CoreError;
use crate::models::entry::{Entry, RawRow};
use crate::parse::{parse_amount, parse_date};

/// Converts raw tabular input into typed entries.
///
/// Pure business logic — no I/O. The CSV reader works on text the
/// caller already holds; file handling belongs to the frontend.
pub struct IngestService;

impl IngestService {
    pub fn new() -> Self {
        Self
    }

    /// Read CSV text into raw rows.
    ///
    /// A header row is required; rows are matched to fields by the
    /// `Date` / `Income` / `Expense` column names and any extra
    /// columns are ignored. Structural failures (no header, ragged
    /// quoting) surface as [`CoreError::MalformedInput`].
    pub fn read_csv(&self, text: &str) -> Result<Vec<RawRow>, CoreError> {
        let trimmed = text.trim_start_matches('\u{feff}');
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(trimmed.as_bytes());

        let headers = reader.headers()?;
        if !headers.iter().any(|h| h.eq_ignore_ascii_case("Date")) {
            return Err(CoreError::MalformedInput(
                "missing required 'Date' column in header row".into(),
            ));
        }

        let mut rows = Vec::new();
        for result in reader.deserialize::<RawRow>() {
            let row = result?;
            // Skip fully empty lines rather than producing ghost rows
            let blank = |f: &Option<String>| f.as_deref().unwrap_or("").is_empty();
            if blank(&row.date) && blank(&row.income) && blank(&row.expense) {
                continue;
            }
            rows.push(row);
        }
        Ok(rows)
    }

    /// Map each raw row to zero or one entry.
    ///
    /// Rows with an unparseable date are silently dropped — that is a
    /// filtered-out input, not an error. Bad numeric fields become
    /// `0.0` and never reject the row. The `running_balance` written
    /// here is a provisional input-order accumulation; the sequencer
    /// overwrites it once chronological order is established.
    ///
    /// Returns [`CoreError::EmptyDataset`] if zero rows survive.
    pub fn normalize_rows(&self, rows: Vec<RawRow>) -> Result<Vec<Entry>, CoreError> {
        let mut entries = Vec::with_capacity(rows.len());
        let mut provisional = 0.0;

        for row in rows {
            let date = match row.date.as_deref().and_then(parse_date) {
                Some(d) => d,
                None => continue,
            };
            let income = parse_amount(row.income.as_deref().unwrap_or(""));
            let expense = parse_amount(row.expense.as_deref().unwrap_or(""));

            let mut entry = Entry::new(date, income, expense);
            provisional += entry.daily_net;
            entry.running_balance = provisional;
            entries.push(entry);
        }

        if entries.is_empty() {
            return Err(CoreError::EmptyDataset);
        }
        Ok(entries)
    }
}

impl Default for IngestService {
    fn default() -> Self {
        Self::new()
    }
}
