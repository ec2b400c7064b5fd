use serde::{Deserialize, Serialize};

/// The result of analyzing a window of documents
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Human-readable fetch/filter statistics
    pub statistics: String,

    /// Model-generated insight text
    pub insights: String,

    /// Number of documents that survived filtering
    pub data_count: usize,
}

/// Request body for the OpenAI Responses API
#[derive(Debug, Serialize)]
pub struct ResponsesRequest<'a> {
    pub model: &'a str,
    pub input: Vec<InputMessage<'a>>,
    pub reasoning: Reasoning<'a>,
    pub max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
pub struct InputMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Reasoning<'a> {
    pub effort: &'a str,
}

/// Response body for the OpenAI Responses API, reduced to what we read
#[derive(Debug, Deserialize)]
pub struct ResponsesReply {
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
pub struct OutputItem {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    #[serde(default)]
    pub text: String,
}

impl ResponsesReply {
    /// Text of the first message-typed output item
    pub fn message_text(&self) -> Option<&str> {
        self.output
            .iter()
            .find(|item| item.kind == "message")
            .and_then(|item| item.content.first())
            .map(|part| part.text.as_str())
    }
}
