//! Prompt for the aga analysis: emotional shifts and wellbeing

use super::BASE_TEMPLATE;

pub const ANALYSIS_PROMPT: &str = "Analyze the author's emotional shifts and state of mind over \
this period and write an emotional report covering stressors and changes in wellbeing.\n\n\
Focus in particular on:\n\
- Emotional highs and lows and their triggers\n\
- Fluctuations in energy levels\n\
- The influence of relationships\n\
- Signs of psychological growth or change";

/// Build the full aga prompt around the formatted documents
pub fn create_prompt(formatted_data: &str) -> String {
    format!("{}{}\n\n{}", BASE_TEMPLATE, formatted_data, ANALYSIS_PROMPT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_wraps_data() {
        let prompt = create_prompt("2025-06-02: rough day at work");
        assert!(prompt.starts_with(BASE_TEMPLATE));
        assert!(prompt.contains("rough day at work"));
        assert!(prompt.ends_with(ANALYSIS_PROMPT));
    }
}
