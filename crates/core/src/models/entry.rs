use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One untyped input row as it arrives from the uploaded table.
///
/// Deserialized by header name; any extra columns in the input are
/// ignored. Transient — discarded once normalization produces entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Date", default)]
    pub date: Option<String>,

    #[serde(rename = "Income", default)]
    pub income: Option<String>,

    #[serde(rename = "Expense", default)]
    pub expense: Option<String>,
}

impl RawRow {
    pub fn new(
        date: impl Into<String>,
        income: impl Into<String>,
        expense: impl Into<String>,
    ) -> Self {
        Self {
            date: Some(date.into()),
            income: Some(income.into()),
            expense: Some(expense.into()),
        }
    }
}

/// A single normalized income/expense record.
///
/// **Important**: `running_balance` is provisional (input-order
/// accumulation) until the sequencer sorts the dataset and recomputes
/// it as a prefix sum in date order. Immutable after that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Date of the record (no time component — daily granularity)
    pub date: NaiveDate,

    /// Money in on this date (best-effort parse, never negative in practice)
    pub income: f64,

    /// Money out on this date
    pub expense: f64,

    /// income - expense
    pub daily_net: f64,

    /// Cumulative sum of daily_net up to and including this entry,
    /// in date order once sequenced
    pub running_balance: f64,
}

impl Entry {
    pub fn new(date: NaiveDate, income: f64, expense: f64) -> Self {
        Self {
            date,
            income,
            expense,
            daily_net: income - expense,
            running_balance: 0.0,
        }
    }
}
