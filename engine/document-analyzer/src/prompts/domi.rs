//! Prompt for the domi analysis: thought patterns and activity trends

use super::BASE_TEMPLATE;

pub const ANALYSIS_PROMPT: &str = "Analyze the author's thought patterns, interests, and activity \
trends over this period, surfacing shifts and tendencies the author may not have noticed, and \
write a detailed report.\n\nFocus in particular on:\n\
- Changes in the depth and complexity of thinking\n\
- Newly emerging areas of interest\n\
- Changes in behavioral patterns\n\
- Latent problems and opportunities";

/// Build the full domi prompt around the formatted documents
pub fn create_prompt(formatted_data: &str) -> String {
    format!("{}{}\n\n{}", BASE_TEMPLATE, formatted_data, ANALYSIS_PROMPT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_wraps_data() {
        let prompt = create_prompt("2025-06-02: dug the garden");
        assert!(prompt.starts_with(BASE_TEMPLATE));
        assert!(prompt.contains("dug the garden"));
        assert!(prompt.ends_with(ANALYSIS_PROMPT));
    }
}
