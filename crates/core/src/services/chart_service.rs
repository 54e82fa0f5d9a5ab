use crate::models::chart::{BalancePoint, DailyNetPoint, IncomeExpensePoint};
use crate::models::entry::Entry;

/// How many entries the income/expense bar chart shows.
const BAR_CHART_WINDOW: usize = 10;

/// How many entries the daily-net chart and the table show.
const RECENT_WINDOW: usize = 15;

/// Generates chart-ready data sets from a working set.
///
/// The core computes all the numbers — the frontend only renders.
/// Every function here is pure and recomputes from scratch; nothing
/// is cached or incrementally patched.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Income vs expense bars over the most recent entries
    /// (at most [`BAR_CHART_WINDOW`]).
    #[must_use]
    pub fn income_expense_points(&self, working_set: &[Entry]) -> Vec<IncomeExpensePoint> {
        self.tail(working_set, BAR_CHART_WINDOW)
            .iter()
            .map(|e| IncomeExpensePoint {
                date: e.date,
                income: e.income,
                expense: e.expense,
            })
            .collect()
    }

    /// Balance trend across the whole working set.
    ///
    /// The prefix sum restarts at zero within the working set, so a
    /// filtered chart shows the trend of the visible window rather
    /// than the all-time running balance.
    #[must_use]
    pub fn balance_points(&self, working_set: &[Entry]) -> Vec<BalancePoint> {
        let mut balance = 0.0;
        working_set
            .iter()
            .map(|e| {
                balance += e.daily_net;
                BalancePoint {
                    date: e.date,
                    balance,
                }
            })
            .collect()
    }

    /// Daily net over the most recent entries (at most [`RECENT_WINDOW`]).
    #[must_use]
    pub fn daily_net_points(&self, working_set: &[Entry]) -> Vec<DailyNetPoint> {
        self.tail(working_set, RECENT_WINDOW)
            .iter()
            .map(|e| DailyNetPoint {
                date: e.date,
                daily_net: e.daily_net,
            })
            .collect()
    }

    /// The most recent entries, newest first, for the detail table
    /// (at most [`RECENT_WINDOW`]).
    #[must_use]
    pub fn table_rows(&self, working_set: &[Entry]) -> Vec<Entry> {
        let mut rows: Vec<Entry> = self.tail(working_set, RECENT_WINDOW).to_vec();
        rows.reverse();
        rows
    }

    fn tail<'a>(&self, entries: &'a [Entry], n: usize) -> &'a [Entry] {
        let start = entries.len().saturating_sub(n);
        &entries[start..]
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
