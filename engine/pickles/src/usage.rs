//! Usage banner for the Pickles CLI
//!
//! The banner is assembled from the option registry so the help text can
//! never drift from the tokens the parser accepts.

use crate::options::{
    AnalysisType, DataSource, DeliveryMethod, ANALYSIS, DAYS, DEFAULT_DAYS, DELIVERY, HELP,
    SCHEDULE, SOURCE,
};

/// Render the usage banner
pub fn usage_text() -> String {
    let methods = DeliveryMethod::ALL
        .iter()
        .map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "\u{1f952} Pickles - Personal Insight Analytics System\n\
         \n\
         Usage:\n\
         \x20 pickles [options]\n\
         \n\
         Options:\n\
         \x20 {source:<12} Data source ({database_entries} | {recent_documents})\n\
         \x20 {analysis:<12} Analysis type ({domi} | {aga})\n\
         \x20 {delivery:<12} Delivery methods ({methods})\n\
         \x20 {days:<12} Days of data to fetch (default: {default_days})\n\
         \x20 {schedule:<12} Run on a weekly schedule\n\
         \x20 {help:<12} Show this help\n\
         \n\
         Examples:\n\
         \x20 pickles                                            # default source: {database_entries}\n\
         \x20 pickles {source} {recent_documents} {analysis} {domi}\n\
         \x20 pickles {delivery} {console},{file_html} {days} 14\n\
         \x20 pickles {schedule}\n",
        source = SOURCE,
        analysis = ANALYSIS,
        delivery = DELIVERY,
        days = DAYS,
        schedule = SCHEDULE,
        help = HELP,
        database_entries = DataSource::DatabaseEntries.as_str(),
        recent_documents = DataSource::RecentDocuments.as_str(),
        domi = AnalysisType::Domi.as_str(),
        aga = AnalysisType::Aga.as_str(),
        methods = methods,
        console = DeliveryMethod::Console.as_str(),
        file_html = DeliveryMethod::FileHtml.as_str(),
        default_days = DEFAULT_DAYS,
    )
}

/// Print the usage banner to standard output
pub fn print_usage() {
    println!("{}", usage_text());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FLAGS;

    fn options_section(text: &str) -> &str {
        let start = text.find("Options:").unwrap();
        let end = text.find("Examples:").unwrap();
        &text[start..end]
    }

    #[test]
    fn test_banner_title_and_synopsis() {
        let text = usage_text();
        assert!(text.contains("\u{1f952} Pickles - Personal Insight Analytics System"));
        assert!(text.contains("pickles [options]"));
    }

    #[test]
    fn test_every_flag_listed_exactly_once_in_options() {
        let text = usage_text();
        let options = options_section(&text);
        for flag in FLAGS {
            assert_eq!(
                options.matches(flag).count(),
                1,
                "{} should appear once in the options section",
                flag
            );
            assert!(text.contains(flag));
        }
    }

    #[test]
    fn test_every_source_and_analysis_value_appears() {
        let text = usage_text();
        for source in DataSource::ALL {
            assert!(text.contains(source.as_str()));
        }
        for analysis in AnalysisType::ALL {
            assert!(text.contains(analysis.as_str()));
        }
    }

    #[test]
    fn test_delivery_values_appear_comma_joined() {
        let text = usage_text();
        for method in DeliveryMethod::ALL {
            assert!(text.contains(method.as_str()));
        }
        assert!(text.contains("console,email_text,email_html,file_text,file_html"));
        assert!(text.contains("console,file_html"));
    }

    #[test]
    fn test_days_default_and_schedule_documented() {
        let text = usage_text();
        let days_at = text.find(DAYS).unwrap();
        assert!(text[days_at..].contains('7'));
        assert!(text.contains("default: 7"));
        assert!(text.contains(SCHEDULE));
    }

    #[test]
    fn test_bare_invocation_example_shows_default_source() {
        let text = usage_text();
        let bare = text
            .lines()
            .find(|line| {
                line.trim_start().starts_with("pickles")
                    && !line.contains("--")
                    && !line.contains("[options]")
            })
            .expect("bare example line");
        assert!(bare.contains("database_entries"));
    }

    #[test]
    fn test_output_is_deterministic() {
        assert_eq!(usage_text(), usage_text());
    }
}
