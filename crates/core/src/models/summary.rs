use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over the current working set.
///
/// Derived entirely from the working set and recomputed on demand —
/// it has no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of income across the working set
    pub total_income: f64,

    /// Sum of expenses across the working set
    pub total_expense: f64,

    /// total_income - total_expense
    pub net_balance: f64,

    /// net_balance as a percentage of total_income; 0 when there is no income
    pub savings_rate: f64,

    /// Number of entries the summary covers
    pub entry_count: usize,

    /// First and last date in the working set, if non-empty
    pub period: Option<(NaiveDate, NaiveDate)>,
}

impl Summary {
    /// The all-zero summary for an empty working set.
    pub fn empty() -> Self {
        Self {
            total_income: 0.0,
            total_expense: 0.0,
            net_balance: 0.0,
            savings_rate: 0.0,
            entry_count: 0,
            period: None,
        }
    }

    /// Classify overall spending health from the summary figures.
    #[must_use]
    pub fn health(&self) -> BalanceHealth {
        if self.net_balance >= 0.0 && self.savings_rate > 20.0 {
            BalanceHealth::Thriving
        } else if self.net_balance >= 0.0 {
            BalanceHealth::Stable
        } else {
            BalanceHealth::Overspending
        }
    }
}

/// Coarse spending-health verdict derived from a [`Summary`].
///
/// The core only classifies — the frontend owns the wording, emoji,
/// and toast styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceHealth {
    /// Positive net balance and savings rate above 20%
    Thriving,
    /// Positive net balance but modest savings rate
    Stable,
    /// Spending exceeds income
    Overspending,
}

impl std::fmt::Display for BalanceHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BalanceHealth::Thriving => write!(f, "Thriving"),
            BalanceHealth::Stable => write!(f, "Stable"),
            BalanceHealth::Overspending => write!(f, "Overspending"),
        }
    }
}
