use crate::models::entry::Entry;

/// Sorts entries chronologically and recomputes the running balance.
///
/// Pure business logic — no I/O, no API calls. Easy to test.
pub struct BalanceService;

impl BalanceService {
    pub fn new() -> Self {
        Self
    }

    /// Establish the dataset invariant on a freshly normalized batch.
    ///
    /// Sorts by date ascending — stably, so same-day entries keep
    /// their input order — then overwrites every provisional
    /// `running_balance` with the prefix sum of `daily_net` in the
    /// sorted order. No entries are created or dropped.
    pub fn sequence(&self, entries: &mut Vec<Entry>) {
        // Vec::sort_by is stable; the tie-break for equal dates is input order.
        entries.sort_by(|a, b| a.date.cmp(&b.date));

        let mut balance = 0.0;
        for entry in entries.iter_mut() {
            balance += entry.daily_net;
            entry.running_balance = balance;
        }
    }
}

impl Default for BalanceService {
    fn default() -> Self {
        Self::new()
    }
}
