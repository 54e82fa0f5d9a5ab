pub mod errors;
pub mod markdown;
pub mod models;
pub mod parse;
pub mod providers;
pub mod services;

use chrono::NaiveDate;
use models::{
    chart::{BalancePoint, DailyNetPoint, IncomeExpensePoint},
    entry::{Entry, RawRow},
    summary::{BalanceHealth, Summary},
};
use providers::traits::AdviceProvider;
use services::{
    analytics_service::AnalyticsService, balance_service::BalanceService,
    chart_service::ChartService, filter_service::FilterService, ingest_service::IngestService,
};

use errors::CoreError;

/// Main entry point for the Cashflow Dashboard core library.
///
/// Owns the application state — the full dataset, the date-filtered
/// working set, and the current filter bounds — plus the services that
/// operate on it. Each operation replaces the working set wholesale
/// and leaves the prior state untouched on failure, so whatever the
/// frontend last rendered stays valid.
#[must_use]
pub struct CashflowDashboard {
    /// Authoritative full dataset, date-ascending after sequencing.
    dataset: Vec<Entry>,
    /// Derived subsequence currently driving all displayed aggregates.
    working_set: Vec<Entry>,
    /// Inclusive bounds the working set was computed from.
    filter_range: Option<(NaiveDate, NaiveDate)>,
    ingest_service: IngestService,
    balance_service: BalanceService,
    filter_service: FilterService,
    analytics_service: AnalyticsService,
    chart_service: ChartService,
}

impl std::fmt::Debug for CashflowDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CashflowDashboard")
            .field("entries", &self.dataset.len())
            .field("working_set", &self.working_set.len())
            .field("filter_range", &self.filter_range)
            .finish()
    }
}

impl Default for CashflowDashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl CashflowDashboard {
    /// Create an empty dashboard with no data loaded.
    pub fn new() -> Self {
        Self {
            dataset: Vec::new(),
            working_set: Vec::new(),
            filter_range: None,
            ingest_service: IngestService::new(),
            balance_service: BalanceService::new(),
            filter_service: FilterService::new(),
            analytics_service: AnalyticsService::new(),
            chart_service: ChartService::new(),
        }
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Load a dataset from CSV text (header row required).
    ///
    /// Parses, normalizes, sequences, and resets the filter to the
    /// full date range. Returns the summary of the fresh working set.
    /// On any error the previously loaded dataset is retained.
    pub fn load_csv(&mut self, text: &str) -> Result<Summary, CoreError> {
        let rows = self.ingest_service.read_csv(text)?;
        self.load_rows(rows)
    }

    /// Load a dataset from pre-split raw rows.
    ///
    /// Rows with unparseable dates are silently dropped; if none
    /// survive, [`CoreError::EmptyDataset`] is returned and the prior
    /// dataset is retained.
    pub fn load_rows(&mut self, rows: Vec<RawRow>) -> Result<Summary, CoreError> {
        let mut entries = self.ingest_service.normalize_rows(rows)?;
        self.balance_service.sequence(&mut entries);

        self.working_set = entries.clone();
        self.dataset = entries;
        self.filter_range = self.filter_service.default_bounds(&self.dataset);
        Ok(self.summary())
    }

    // ── Filtering ───────────────────────────────────────────────────

    /// Restrict the working set to `[start, end]`, inclusive.
    ///
    /// Both failure modes are non-destructive: an invalid interval or
    /// an empty result leaves the prior working set (and its filter
    /// bounds) in place.
    pub fn filter(&mut self, start: NaiveDate, end: NaiveDate) -> Result<Summary, CoreError> {
        let working_set = self.filter_service.apply(&self.dataset, start, end)?;
        self.working_set = working_set;
        self.filter_range = Some((start, end));
        Ok(self.summary())
    }

    /// Like [`filter`](Self::filter), but from raw date text (as typed
    /// into the frontend's date inputs). Unparseable bounds are an
    /// [`CoreError::InvalidRange`].
    pub fn filter_text(&mut self, start: &str, end: &str) -> Result<Summary, CoreError> {
        let start = parse::parse_date(start)
            .ok_or_else(|| CoreError::InvalidRange(format!("unparseable start date '{start}'")))?;
        let end = parse::parse_date(end)
            .ok_or_else(|| CoreError::InvalidRange(format!("unparseable end date '{end}'")))?;
        self.filter(start, end)
    }

    /// Restore the default full-range interval.
    ///
    /// Idempotent: after any sequence of `filter` calls this yields a
    /// working set equal to the full dataset.
    pub fn reset_filter(&mut self) -> Result<Summary, CoreError> {
        if self.dataset.is_empty() {
            return Err(CoreError::EmptyDataset);
        }
        self.working_set = self.dataset.clone();
        self.filter_range = self.filter_service.default_bounds(&self.dataset);
        Ok(self.summary())
    }

    // ── State Accessors ─────────────────────────────────────────────

    /// The authoritative full dataset, date-ascending.
    #[must_use]
    pub fn dataset(&self) -> &[Entry] {
        &self.dataset
    }

    /// The date-filtered working set currently driving all aggregates.
    #[must_use]
    pub fn working_set(&self) -> &[Entry] {
        &self.working_set
    }

    /// Aggregate statistics over the current working set.
    /// Recomputed on demand — cheap and side-effect free.
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.analytics_service.summarize(&self.working_set)
    }

    /// The inclusive bounds the working set was computed from.
    #[must_use]
    pub fn filter_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.filter_range
    }

    /// Minimum and maximum date present in the full dataset.
    #[must_use]
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.filter_service.default_bounds(&self.dataset)
    }

    /// Number of entries in the full dataset.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.dataset.len()
    }

    /// `true` once a dataset has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        !self.dataset.is_empty()
    }

    // ── Chart Data ──────────────────────────────────────────────────

    /// Income vs expense bars over the most recent working-set entries.
    #[must_use]
    pub fn income_expense_chart(&self) -> Vec<IncomeExpensePoint> {
        self.chart_service.income_expense_points(&self.working_set)
    }

    /// Balance trend across the working set (prefix sum restarts at
    /// zero within the filtered window).
    #[must_use]
    pub fn balance_chart(&self) -> Vec<BalancePoint> {
        self.chart_service.balance_points(&self.working_set)
    }

    /// Daily net over the most recent working-set entries.
    #[must_use]
    pub fn daily_net_chart(&self) -> Vec<DailyNetPoint> {
        self.chart_service.daily_net_points(&self.working_set)
    }

    /// Most recent working-set entries, newest first, for the table.
    #[must_use]
    pub fn table_rows(&self) -> Vec<Entry> {
        self.chart_service.table_rows(&self.working_set)
    }

    /// Spending-health verdict for the current working set.
    #[must_use]
    pub fn health(&self) -> BalanceHealth {
        self.summary().health()
    }

    // ── Advice ──────────────────────────────────────────────────────

    /// Request free-text advice for the current working set.
    ///
    /// Fire-and-forget relative to the dashboard: the caller issues
    /// this future independently of rendering, and a failure touches
    /// only the advice panel. Re-filtering does **not** re-issue an
    /// in-flight request — whether to do so is a frontend policy
    /// choice, and the minimal contract deliberately leaves advice
    /// tied to the working set it was requested against.
    pub async fn request_advice(
        &self,
        provider: &dyn AdviceProvider,
    ) -> Result<String, CoreError> {
        if self.working_set.is_empty() {
            return Err(CoreError::EmptyDataset);
        }
        let summary = self.summary();
        provider.advise(&summary).await
    }
}
