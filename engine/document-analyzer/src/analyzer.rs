use crate::analysis_type::AnalysisType;
use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, Result};
use crate::models::{AnalysisReport, InputMessage, Reasoning, ResponsesReply, ResponsesRequest};
use crate::prompts;
use notion_input::Document;
use reqwest::Client;
use std::collections::HashSet;
use std::time::Duration;
use tracing::info;

const OPENAI_RESPONSES_URL: &str = "https://api.openai.com/v1/responses";

/// Minimum body length for a document to be worth analyzing
const MIN_TEXT_CHARS: usize = 10;

/// Keywords marking throwaway content; journals may mix languages, so the
/// Japanese markers stay alongside the English one
const EXCLUDE_KEYWORDS: [&str; 3] = ["test", "テスト", "削除予定"];

/// Turns fetched documents into an insight report
pub struct DocumentAnalyzer {
    config: AnalyzerConfig,
    client: Client,
}

impl DocumentAnalyzer {
    /// Create a new analyzer
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        Ok(Self { config, client })
    }

    /// Filter, summarize, and analyze a window of documents
    pub async fn analyze(
        &self,
        raw: &[Document],
        analysis_type: AnalysisType,
        apply_filters: bool,
    ) -> Result<AnalysisReport> {
        let filtered = if apply_filters {
            filter_documents(raw)
        } else {
            raw.to_vec()
        };

        let statistics = build_statistics(raw.len(), &filtered);

        let insights = if filtered.is_empty() {
            "No documents to analyze.".to_string()
        } else {
            self.generate_insights(&filtered, analysis_type).await?
        };

        Ok(AnalysisReport {
            statistics,
            insights,
            data_count: filtered.len(),
        })
    }

    /// Ask the model for insights over the formatted documents
    async fn generate_insights(
        &self,
        documents: &[Document],
        analysis_type: AnalysisType,
    ) -> Result<String> {
        if self.config.api_key.is_empty() {
            return Err(AnalysisError::MissingConfig(
                "OPENAI_API_KEY is not set".to_string(),
            ));
        }

        let formatted = format_documents(documents);
        let prompt = match analysis_type {
            AnalysisType::Domi => prompts::domi::create_prompt(&formatted),
            AnalysisType::Aga => prompts::aga::create_prompt(&formatted),
        };

        let request = ResponsesRequest {
            model: &self.config.model,
            input: vec![InputMessage {
                role: "user",
                content: &prompt,
            }],
            reasoning: Reasoning {
                effort: &self.config.reasoning_effort,
            },
            max_output_tokens: self.config.max_output_tokens,
        };

        info!(
            "Requesting {} analysis of {} documents from {}",
            analysis_type,
            documents.len(),
            self.config.model
        );

        let response = self
            .client
            .post(OPENAI_RESPONSES_URL)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let reply: ResponsesReply = response.json().await?;
        reply
            .message_text()
            .map(str::to_string)
            .ok_or(AnalysisError::MissingMessage)
    }
}

/// Drop short bodies, excluded keywords, and duplicate titles
pub fn filter_documents(documents: &[Document]) -> Vec<Document> {
    let mut filtered = Vec::new();
    let mut seen_titles: HashSet<String> = HashSet::new();

    for document in documents {
        if document.text.chars().count() < MIN_TEXT_CHARS {
            continue;
        }

        let text = document.text.to_lowercase();
        let title = document
            .title
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();
        if EXCLUDE_KEYWORDS
            .iter()
            .any(|keyword| text.contains(keyword) || title.contains(keyword))
        {
            continue;
        }

        if let Some(title) = &document.title {
            if !title.is_empty() && !seen_titles.insert(title.clone()) {
                continue;
            }
        }

        filtered.push(document.clone());
    }

    filtered
}

/// Summarize fetch and filter counts
pub fn build_statistics(raw_count: usize, filtered: &[Document]) -> String {
    if filtered.is_empty() {
        return format!(
            "Fetched: {} documents, after filtering: 0 (nothing to analyze)",
            raw_count
        );
    }

    let total_chars: usize = filtered.iter().map(|d| d.text.chars().count()).sum();
    let average_chars = total_chars / filtered.len();

    format!(
        "Fetched: {} documents, after filtering: {}\nAverage length: {} chars",
        raw_count,
        filtered.len(),
        average_chars
    )
}

/// Render documents for the prompt
///
/// Titled documents render as date/title/body blocks; plain journal entries
/// as one `date: text` line each.
pub fn format_documents(documents: &[Document]) -> String {
    let has_titles = documents
        .iter()
        .any(|d| d.title.as_deref().is_some_and(|t| !t.is_empty()));

    documents
        .iter()
        .map(|document| {
            if has_titles {
                format!(
                    "Date: {}\nTitle: {}\nBody: {}",
                    document.date,
                    document.title.as_deref().unwrap_or("Untitled"),
                    document.text
                )
            } else {
                format!("{}: {}", document.date, document.text)
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
