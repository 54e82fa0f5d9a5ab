// ═══════════════════════════════════════════════════════════════════
// Provider Tests — AdviceProvider trait, mock advice flow,
// markdown-subset rendering of advice text
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;

use cashflow_dashboard_core::errors::CoreError;
use cashflow_dashboard_core::markdown::advice_to_html;
use cashflow_dashboard_core::models::entry::RawRow;
use cashflow_dashboard_core::models::summary::Summary;
use cashflow_dashboard_core::providers::groq::GroqProvider;
use cashflow_dashboard_core::providers::traits::AdviceProvider;
use cashflow_dashboard_core::CashflowDashboard;

// ═══════════════════════════════════════════════════════════════════
// Mock Provider
// ═══════════════════════════════════════════════════════════════════

/// Echoes the summary it was asked about, so tests can verify the
/// facade hands over the working-set figures.
struct MockAdviceProvider {
    reply: Option<String>,
}

impl MockAdviceProvider {
    fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
        }
    }

    fn unavailable() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl AdviceProvider for MockAdviceProvider {
    fn name(&self) -> &str {
        "MockAdvice"
    }

    async fn advise(&self, summary: &Summary) -> Result<String, CoreError> {
        match &self.reply {
            Some(reply) => Ok(format!(
                "{reply} [income={} expense={} net={} rate={}]",
                summary.total_income,
                summary.total_expense,
                summary.net_balance,
                summary.savings_rate
            )),
            None => Err(CoreError::AdviceUnavailable),
        }
    }
}

fn loaded_dashboard() -> CashflowDashboard {
    let mut dash = CashflowDashboard::new();
    dash.load_rows(vec![
        RawRow::new("01/01/2024", "100", "40"),
        RawRow::new("02/01/2024", "50", "0"),
    ])
    .expect("load");
    dash
}

// ── Advice flow through the facade ──────────────────────────────────

mod advice_flow {
    use super::*;

    #[tokio::test]
    async fn advice_carries_working_set_figures() {
        let dash = loaded_dashboard();
        let provider = MockAdviceProvider::replying("Save more.");
        let advice = dash.request_advice(&provider).await.expect("advice");
        assert!(advice.contains("income=150"));
        assert!(advice.contains("expense=40"));
        assert!(advice.contains("net=110"));
    }

    #[tokio::test]
    async fn advice_failure_does_not_disturb_the_dashboard() {
        let dash = loaded_dashboard();
        let provider = MockAdviceProvider::unavailable();
        let err = dash.request_advice(&provider).await.unwrap_err();
        assert!(matches!(err, CoreError::AdviceUnavailable));
        // The dashboard's locally computed state is untouched
        assert_eq!(dash.working_set().len(), 2);
        assert_eq!(dash.summary().net_balance, 110.0);
    }

    #[tokio::test]
    async fn unloaded_dashboard_refuses_advice() {
        let dash = CashflowDashboard::new();
        let provider = MockAdviceProvider::replying("anything");
        let err = dash.request_advice(&provider).await.unwrap_err();
        assert!(matches!(err, CoreError::EmptyDataset));
    }

    #[tokio::test]
    async fn refiltering_does_not_change_earlier_advice() {
        // Advice stays tied to the summary it was requested against;
        // the facade never re-issues on filter changes.
        let mut dash = loaded_dashboard();
        let provider = MockAdviceProvider::replying("Hold.");
        let before = dash.request_advice(&provider).await.expect("advice");
        dash.filter_text("02/01/2024", "02/01/2024").expect("filter");
        assert!(before.contains("income=150"));
        let after = dash.request_advice(&provider).await.expect("advice");
        assert!(after.contains("income=50"));
    }

    #[test]
    fn provider_names() {
        assert_eq!(MockAdviceProvider::unavailable().name(), "MockAdvice");
        assert_eq!(GroqProvider::new("key".into()).name(), "Groq");
    }
}

// ── Markdown subset rendering ───────────────────────────────────────

mod markdown_subset {
    use super::*;

    #[test]
    fn bold_spans() {
        assert_eq!(
            advice_to_html("a **bold** word"),
            "a <strong>bold</strong> word"
        );
    }

    #[test]
    fn multiple_bold_spans_are_non_greedy() {
        assert_eq!(
            advice_to_html("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn bullet_lines_become_list_items() {
        assert_eq!(
            advice_to_html("* first\n* second"),
            "<ul><li>first</li>\n<li>second</li></ul>"
        );
    }

    #[test]
    fn indented_bullets_are_recognized() {
        assert_eq!(advice_to_html("  * only"), "<ul><li>only</li></ul>");
    }

    #[test]
    fn plain_newlines_become_breaks() {
        assert_eq!(advice_to_html("one\ntwo"), "one<br>two");
    }

    #[test]
    fn newline_after_list_item_is_not_a_break() {
        let html = advice_to_html("* item\nafter");
        assert!(!html.contains("</li><br>"));
    }

    #[test]
    fn bold_inside_bullets() {
        assert_eq!(
            advice_to_html("* a **big** win"),
            "<ul><li>a <strong>big</strong> win</li></ul>"
        );
    }

    #[test]
    fn no_list_means_no_wrapper() {
        assert!(!advice_to_html("just prose").contains("<ul>"));
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(advice_to_html("keep saving"), "keep saving");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(advice_to_html(""), "");
    }
}
