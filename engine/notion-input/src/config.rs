use serde::{Deserialize, Serialize};

/// Notion API version header sent with every request
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// Configuration for the Notion input service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotionConfig {
    /// Integration token used as the bearer credential
    pub api_key: String,

    /// Journal database queried for dated entries
    pub database_id: String,

    /// Notion-Version header value
    pub api_version: String,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            database_id: String::new(),
            api_version: NOTION_API_VERSION.to_string(),
        }
    }
}

impl NotionConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(api_key) = std::env::var("NOTION_API_KEY") {
            config.api_key = api_key;
        }

        if let Ok(database_id) = std::env::var("NOTION_PAGE_ID") {
            config.database_id = database_id;
        }

        config
    }
}
