use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single bar-chart data point: income vs expense for one day.
///
/// The core generates these — the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeExpensePoint {
    /// The date for this data point
    pub date: NaiveDate,

    /// Income recorded on this date
    pub income: f64,

    /// Expense recorded on this date
    pub expense: f64,
}

/// A single line-chart data point for the balance trend.
///
/// The balance here is a prefix sum of daily nets *within the working
/// set*, so a filtered chart starts from zero rather than from the
/// all-time balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub date: NaiveDate,

    /// Cumulative daily net within the charted window
    pub balance: f64,
}

/// A single data point for the daily-net chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyNetPoint {
    pub date: NaiveDate,
    pub daily_net: f64,
}
