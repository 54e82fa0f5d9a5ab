use crate::models::entry::Entry;
use crate::models::summary::Summary;

/// Computes aggregate statistics over a working set.
///
/// A pure function of its input: deterministic, no side effects, safe
/// to call on every render.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Compute totals, net balance, and savings rate.
    ///
    /// `savings_rate = net_balance / total_income * 100` when there is
    /// income; an empty working set (or one with zero income) yields a
    /// savings rate of 0 rather than a division error.
    #[must_use]
    pub fn summarize(&self, working_set: &[Entry]) -> Summary {
        if working_set.is_empty() {
            return Summary::empty();
        }

        let total_income: f64 = working_set.iter().map(|e| e.income).sum();
        let total_expense: f64 = working_set.iter().map(|e| e.expense).sum();
        let net_balance = total_income - total_expense;
        let savings_rate = if total_income > 0.0 {
            (net_balance / total_income) * 100.0
        } else {
            0.0
        };

        // Working sets are always date-ascending, so first/last are min/max.
        let period = match (working_set.first(), working_set.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        };

        Summary {
            total_income,
            total_expense,
            net_balance,
            savings_rate,
            entry_count: working_set.len(),
            period,
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
