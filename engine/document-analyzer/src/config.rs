use serde::{Deserialize, Serialize};

/// Configuration for the document analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// OpenAI API key
    pub api_key: String,

    /// Model used for insight generation
    pub model: String,

    /// Upper bound on generated tokens
    pub max_output_tokens: u32,

    /// Reasoning effort requested from the model
    pub reasoning_effort: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "o4-mini".to_string(),
            max_output_tokens: 3000,
            reasoning_effort: "high".to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            config.api_key = api_key;
        }

        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            config.model = model;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_settings() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.model, "o4-mini");
        assert_eq!(config.max_output_tokens, 3000);
        assert_eq!(config.reasoning_effort, "high");
    }
}
