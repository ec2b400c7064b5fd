use crate::config::NotionConfig;
use crate::error::{InputError, Result};
use crate::models::{
    cutoff_date, entry_from_page, is_recent_page, text_from_block, title_from_page,
    BlockChildrenResponse, Document, QueryResponse,
};
use crate::source::DataSource;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

const NOTION_API_BASE: &str = "https://api.notion.com/v1";

/// Client for pulling journal data out of Notion
#[derive(Debug)]
pub struct NotionInput {
    config: NotionConfig,
    client: Client,
}

impl NotionInput {
    /// Create a new input client
    pub fn new(config: NotionConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(InputError::MissingConfig(
                "NOTION_API_KEY is not set".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { config, client })
    }

    /// Fetch documents from the requested source
    pub async fn fetch(&self, source: DataSource, days: u32) -> Result<Vec<Document>> {
        match source {
            DataSource::DatabaseEntries => self.fetch_database_entries(days).await,
            DataSource::RecentDocuments => self.fetch_recent_documents(days).await,
        }
    }

    /// Fetch dated journal entries from the configured database
    ///
    /// Expects a database with a `Date` property and an `Entry` rich-text
    /// property; pages missing either are skipped.
    pub async fn fetch_database_entries(&self, days: u32) -> Result<Vec<Document>> {
        if self.config.database_id.is_empty() {
            return Err(InputError::MissingConfig(
                "NOTION_PAGE_ID is not set".to_string(),
            ));
        }

        let cutoff = cutoff_date(days);
        let url = format!(
            "{}/databases/{}/query",
            NOTION_API_BASE, self.config.database_id
        );
        let body = json!({
            "filter": {
                "property": "Date",
                "date": {"on_or_after": cutoff}
            },
            "sorts": [{"property": "Date", "direction": "ascending"}]
        });

        info!("Querying journal database for entries since {}", cutoff);

        let response = self.send(self.client.post(&url).json(&body)).await?;
        let query: QueryResponse = response.json().await?;

        let entries: Vec<Document> = query.results.iter().filter_map(entry_from_page).collect();

        info!("Fetched {} journal entries", entries.len());
        Ok(entries)
    }

    /// Fetch documents created within the window via workspace search
    ///
    /// Search results are sorted by last edit time; only pages created on or
    /// after the cutoff are kept. Page bodies come from the block-children
    /// endpoint; a body that fails to load yields an empty text, not an error.
    pub async fn fetch_recent_documents(&self, days: u32) -> Result<Vec<Document>> {
        let cutoff = cutoff_date(days);
        let url = format!("{}/search", NOTION_API_BASE);
        let body = json!({
            "filter": {"value": "page", "property": "object"},
            "sort": {"direction": "descending", "timestamp": "last_edited_time"}
        });

        info!("Searching workspace for documents created since {}", cutoff);

        let response = self.send(self.client.post(&url).json(&body)).await?;
        let search: QueryResponse = response.json().await?;

        let mut documents = Vec::new();
        for page in search
            .results
            .iter()
            .filter(|page| is_recent_page(page, &cutoff))
        {
            if page.id.is_empty() {
                continue;
            }

            let title = title_from_page(page);
            let text = match self.page_content(&page.id).await {
                Ok(text) => text,
                Err(e) => {
                    warn!("Failed to load content for page {}: {}", page.id, e);
                    String::new()
                }
            };

            documents.push(Document {
                date: page.created_time.chars().take(10).collect(),
                title: Some(title),
                text,
            });
        }

        info!("Fetched {} recent documents", documents.len());
        Ok(documents)
    }

    /// Concatenate the text blocks of a page
    async fn page_content(&self, page_id: &str) -> Result<String> {
        let url = format!("{}/blocks/{}/children", NOTION_API_BASE, page_id);

        let response = self.send(self.client.get(&url)).await?;
        let children: BlockChildrenResponse = response.json().await?;

        Ok(children
            .results
            .iter()
            .filter_map(text_from_block)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Attach auth headers, send, and surface non-success statuses
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request
            .bearer_auth(&self.config.api_key)
            .header("Notion-Version", self.config.api_version.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InputError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        let err = NotionInput::new(NotionConfig::default()).unwrap_err();
        assert!(matches!(err, InputError::MissingConfig(_)));
        assert!(err.to_string().contains("NOTION_API_KEY"));
    }
}
