//! Option registry for the Pickles CLI
//!
//! The flag constants live here; the value enums live with the crates that
//! implement them and are re-exported so this module is the single surface
//! for every CLI choice.

pub use document_analyzer::AnalysisType;
pub use notion_input::DataSource;
pub use report_delivery::DeliveryMethod;

/// `--source`: which data source to fetch from
pub const SOURCE: &str = "--source";

/// `--analysis`: which analysis to run
pub const ANALYSIS: &str = "--analysis";

/// `--delivery`: comma-separated delivery methods
pub const DELIVERY: &str = "--delivery";

/// `--days`: how many days of data to fetch
pub const DAYS: &str = "--days";

/// `--schedule`: run weekly instead of once
pub const SCHEDULE: &str = "--schedule";

/// `--help`: print the usage banner
pub const HELP: &str = "--help";

/// All flags, in documentation order
pub const FLAGS: [&str; 6] = [SOURCE, ANALYSIS, DELIVERY, DAYS, SCHEDULE, HELP];

/// Default fetch window in days
pub const DEFAULT_DAYS: u32 = 7;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_nonempty(values: &[&str]) {
        let set: HashSet<&str> = values.iter().copied().collect();
        assert_eq!(set.len(), values.len(), "duplicate token in {:?}", values);
        assert!(values.iter().all(|v| !v.is_empty()));
    }

    #[test]
    fn test_flags_are_unique_and_nonempty() {
        assert_unique_nonempty(&FLAGS);
        assert!(FLAGS.iter().all(|flag| flag.starts_with("--")));
    }

    #[test]
    fn test_data_source_tokens_are_unique_and_nonempty() {
        let tokens: Vec<&str> = DataSource::ALL.iter().map(|v| v.as_str()).collect();
        assert_unique_nonempty(&tokens);
    }

    #[test]
    fn test_analysis_type_tokens_are_unique_and_nonempty() {
        let tokens: Vec<&str> = AnalysisType::ALL.iter().map(|v| v.as_str()).collect();
        assert_unique_nonempty(&tokens);
    }

    #[test]
    fn test_delivery_method_tokens_are_unique_and_nonempty() {
        let tokens: Vec<&str> = DeliveryMethod::ALL.iter().map(|v| v.as_str()).collect();
        assert_unique_nonempty(&tokens);
    }

    #[test]
    fn test_tokens_are_stable_across_reads() {
        assert_eq!(SOURCE, "--source");
        assert_eq!(
            DataSource::DatabaseEntries.as_str(),
            DataSource::DatabaseEntries.as_str()
        );
        assert_eq!(AnalysisType::Domi.as_str(), "domi");
        assert_eq!(DeliveryMethod::FileHtml.as_str(), "file_html");
    }
}
