use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dated piece of writing pulled from Notion
///
/// Journal entries carry no title; documents found via search do.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// ISO date (YYYY-MM-DD)
    pub date: String,

    /// Page title, when the source provides one
    pub title: Option<String>,

    /// Plain-text body
    pub text: String,
}

/// Response envelope shared by the database query and search endpoints
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Page>,
}

/// A Notion page as returned by query/search
///
/// Properties are schema-dependent, so they stay as raw JSON and are
/// picked apart by the extraction helpers below.
#[derive(Debug, Deserialize)]
pub struct Page {
    pub id: String,

    #[serde(default)]
    pub created_time: String,

    #[serde(default)]
    pub properties: serde_json::Map<String, Value>,
}

/// Response envelope for the block-children endpoint
#[derive(Debug, Deserialize)]
pub struct BlockChildrenResponse {
    #[serde(default)]
    pub results: Vec<Value>,
}

/// Block types whose rich text counts as page content
const TEXT_BLOCK_TYPES: [&str; 7] = [
    "paragraph",
    "heading_1",
    "heading_2",
    "heading_3",
    "bulleted_list_item",
    "numbered_list_item",
    "quote",
];

/// ISO cutoff date `days` days before today
pub fn cutoff_date(days: u32) -> String {
    (Utc::now().date_naive() - chrono::Duration::days(days as i64)).to_string()
}

/// Join the `plain_text` fragments of a rich-text array
pub fn rich_text_plain(rich_text: &Value) -> String {
    rich_text
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("plain_text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .concat()
        })
        .unwrap_or_default()
}

/// Extract a journal entry from a database page
///
/// Requires a `Date` property; the body comes from the `Entry` rich-text
/// property, falling back to any other rich-text property. Pages without a
/// date or without text are skipped.
pub fn entry_from_page(page: &Page) -> Option<Document> {
    let date = page
        .properties
        .get("Date")?
        .get("date")?
        .get("start")?
        .as_str()?
        .to_string();

    let text = match page.properties.get("Entry").and_then(|p| p.get("rich_text")) {
        Some(rich_text) => rich_text_plain(rich_text),
        None => page
            .properties
            .iter()
            .filter(|(name, _)| name.as_str() != "Date")
            .find_map(|(_, prop)| prop.get("rich_text"))
            .map(rich_text_plain)
            .unwrap_or_default(),
    };

    if text.is_empty() {
        return None;
    }

    Some(Document {
        date,
        title: None,
        text,
    })
}

/// Extract a page title from whichever property has the `title` type
pub fn title_from_page(page: &Page) -> String {
    page.properties
        .values()
        .find(|prop| prop.get("type").and_then(Value::as_str) == Some("title"))
        .and_then(|prop| prop.get("title"))
        .map(rich_text_plain)
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| "Untitled".to_string())
}

/// Extract the text of a single content block, if it is a text block
pub fn text_from_block(block: &Value) -> Option<String> {
    let block_type = block.get("type").and_then(Value::as_str)?;
    if !TEXT_BLOCK_TYPES.contains(&block_type) {
        return None;
    }

    let text = block
        .get(block_type)
        .and_then(|body| body.get("rich_text"))
        .map(rich_text_plain)
        .unwrap_or_default();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Whether a page was created on or after the cutoff date
pub fn is_recent_page(page: &Page, cutoff: &str) -> bool {
    if page.created_time.len() < 10 {
        return false;
    }
    &page.created_time[..10] >= cutoff
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page_from(value: Value) -> Page {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_entry_from_page_reads_date_and_entry_text() {
        let page = page_from(json!({
            "id": "abc",
            "created_time": "2025-06-02T09:00:00.000Z",
            "properties": {
                "Date": {"date": {"start": "2025-06-02"}},
                "Entry": {"rich_text": [
                    {"plain_text": "Slept well. "},
                    {"plain_text": "Started the garden."}
                ]}
            }
        }));

        let entry = entry_from_page(&page).unwrap();
        assert_eq!(entry.date, "2025-06-02");
        assert_eq!(entry.text, "Slept well. Started the garden.");
        assert!(entry.title.is_none());
    }

    #[test]
    fn test_entry_from_page_falls_back_to_other_rich_text() {
        let page = page_from(json!({
            "id": "abc",
            "properties": {
                "Date": {"date": {"start": "2025-06-03"}},
                "Notes": {"rich_text": [{"plain_text": "fallback body"}]}
            }
        }));

        let entry = entry_from_page(&page).unwrap();
        assert_eq!(entry.text, "fallback body");
    }

    #[test]
    fn test_entry_from_page_skips_dateless_and_empty_pages() {
        let no_date = page_from(json!({
            "id": "a",
            "properties": {"Entry": {"rich_text": [{"plain_text": "body"}]}}
        }));
        assert!(entry_from_page(&no_date).is_none());

        let no_text = page_from(json!({
            "id": "b",
            "properties": {"Date": {"date": {"start": "2025-06-04"}}}
        }));
        assert!(entry_from_page(&no_text).is_none());
    }

    #[test]
    fn test_title_from_page_uses_title_property() {
        let page = page_from(json!({
            "id": "abc",
            "properties": {
                "Name": {"type": "title", "title": [{"plain_text": "Trip notes"}]}
            }
        }));
        assert_eq!(title_from_page(&page), "Trip notes");

        let untitled = page_from(json!({"id": "x", "properties": {}}));
        assert_eq!(title_from_page(&untitled), "Untitled");
    }

    #[test]
    fn test_text_from_block_accepts_only_text_blocks() {
        let paragraph = json!({
            "type": "paragraph",
            "paragraph": {"rich_text": [{"plain_text": "hello"}]}
        });
        assert_eq!(text_from_block(&paragraph).unwrap(), "hello");

        let image = json!({"type": "image", "image": {}});
        assert!(text_from_block(&image).is_none());

        let empty = json!({"type": "paragraph", "paragraph": {"rich_text": []}});
        assert!(text_from_block(&empty).is_none());
    }

    #[test]
    fn test_is_recent_page_compares_date_prefix() {
        let page = page_from(json!({
            "id": "a",
            "created_time": "2025-06-10T12:00:00.000Z",
            "properties": {}
        }));
        assert!(is_recent_page(&page, "2025-06-01"));
        assert!(is_recent_page(&page, "2025-06-10"));
        assert!(!is_recent_page(&page, "2025-06-11"));

        let missing = page_from(json!({"id": "b", "properties": {}}));
        assert!(!is_recent_page(&missing, "2025-06-01"));
    }

    #[test]
    fn test_cutoff_date_is_iso_and_in_the_past() {
        let cutoff = cutoff_date(7);
        assert_eq!(cutoff.len(), 10);
        assert!(cutoff < Utc::now().date_naive().to_string());
    }
}
