use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::traits::AdviceProvider;
use crate::errors::CoreError;
use crate::models::summary::Summary;

const BASE_URL: &str = "https://api.groq.com/openai/v1";

const MODEL: &str = "llama-3.3-70b-versatile";

const SYSTEM_PROMPT: &str = "You are a very helpful financial advisor. \
Keep your reply elaborative and real. Keep it under 500 Tokens, No need to \
thank the user. Tell them where they should invest and what they should do \
better. First tell user income, expense and balance then explain the details.";

/// Groq API provider for financial advice.
///
/// - **Endpoint**: OpenAI-compatible `/chat/completions`.
/// - **Requires**: API key (bearer token).
/// - **Model**: `llama-3.3-70b-versatile`, capped at 500 tokens.
///
/// Replies arrive as loose markdown; callers render them with the
/// closed subset in [`crate::markdown`].
pub struct GroqProvider {
    client: Client,
    api_key: String,
}

impl GroqProvider {
    pub fn new(api_key: String) -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key,
        }
    }

    /// Build the user prompt from summary figures.
    ///
    /// Plain numbers only — currency symbols and locale formatting are
    /// a frontend concern the prompt deliberately avoids.
    fn build_prompt(summary: &Summary) -> String {
        format!(
            "Here is my complete financial data:\n\
             Income: {:.2}\n\
             Expenses: {:.2}\n\
             Net Balance: {:.2}\n\
             Savings Rate: {:.1}%\n\
             Please give elaborative, useful, and actionable advice in simple \
             language. Also, focus only on useful insights based on their data.",
            summary.total_income,
            summary.total_expense,
            summary.net_balance,
            summary.savings_rate,
        )
    }
}

// ── Groq API request/response types ─────────────────────────────────

#[derive(Serialize)]
struct ChatRequest {
    model: &'static str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[async_trait]
impl AdviceProvider for GroqProvider {
    fn name(&self) -> &str {
        "Groq"
    }

    async fn advise(&self, summary: &Summary) -> Result<String, CoreError> {
        let body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: Self::build_prompt(summary),
                },
            ],
            max_tokens: 500,
            temperature: 0.7,
        };

        let url = format!("{BASE_URL}/chat/completions");
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                provider: "Groq".into(),
                message: format!("HTTP {status}"),
            });
        }

        let parsed: ChatResponse = resp.json().await.map_err(|e| CoreError::Api {
            provider: "Groq".into(),
            message: format!("Failed to parse chat completion: {e}"),
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .map(|content| content.trim().to_string())
            .ok_or(CoreError::AdviceUnavailable)
    }
}
