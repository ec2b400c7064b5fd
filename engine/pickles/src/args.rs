//! Command-line argument parsing
//!
//! Hand-rolled token loop over the option registry; the usage banner is a
//! fixed contract, so no parser-generated help is involved.

use crate::options::{self, AnalysisType, DataSource, DeliveryMethod, DEFAULT_DAYS};
use anyhow::{anyhow, bail, Result};

/// Parsed command-line arguments
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub source: DataSource,
    pub analysis: AnalysisType,
    pub delivery: Vec<DeliveryMethod>,
    pub days: u32,
    pub schedule: bool,
    pub help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            source: DataSource::DatabaseEntries,
            analysis: AnalysisType::Domi,
            delivery: vec![DeliveryMethod::Console],
            days: DEFAULT_DAYS,
            schedule: false,
            help: false,
        }
    }
}

/// Parse the argument list (without the program name)
pub fn parse(argv: &[String]) -> Result<CliArgs> {
    let mut args = CliArgs::default();
    let mut iter = argv.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            options::SOURCE => {
                let value = value_for(&mut iter, options::SOURCE)?;
                args.source = value.parse().map_err(|e: String| anyhow!(e))?;
            }
            options::ANALYSIS => {
                let value = value_for(&mut iter, options::ANALYSIS)?;
                args.analysis = value.parse().map_err(|e: String| anyhow!(e))?;
            }
            options::DELIVERY => {
                let value = value_for(&mut iter, options::DELIVERY)?;
                args.delivery = value
                    .split(',')
                    .map(|token| {
                        token
                            .trim()
                            .parse::<DeliveryMethod>()
                            .map_err(|e| anyhow!(e))
                    })
                    .collect::<Result<Vec<_>>>()?;
            }
            options::DAYS => {
                let value = value_for(&mut iter, options::DAYS)?;
                args.days = value.parse().map_err(|_| {
                    anyhow!("{} expects a number of days, got '{}'", options::DAYS, value)
                })?;
            }
            options::SCHEDULE => args.schedule = true,
            options::HELP => args.help = true,
            other => bail!(
                "Unknown option: '{}'. Run with {} for usage.",
                other,
                options::HELP
            ),
        }
    }

    Ok(args)
}

fn value_for<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> Result<&'a String> {
    iter.next()
        .ok_or_else(|| anyhow!("Missing value for {}", flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_arguments() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.source, DataSource::DatabaseEntries);
        assert_eq!(args.analysis, AnalysisType::Domi);
        assert_eq!(args.delivery, vec![DeliveryMethod::Console]);
        assert_eq!(args.days, 7);
        assert!(!args.schedule);
        assert!(!args.help);
    }

    #[test]
    fn test_source_and_analysis_flags() {
        let args = parse(&argv(&[
            "--source",
            "recent_documents",
            "--analysis",
            "aga",
        ]))
        .unwrap();
        assert_eq!(args.source, DataSource::RecentDocuments);
        assert_eq!(args.analysis, AnalysisType::Aga);
    }

    #[test]
    fn test_delivery_comma_list_and_days_override() {
        let args = parse(&argv(&["--delivery", "console,file_html", "--days", "14"])).unwrap();
        assert_eq!(
            args.delivery,
            vec![DeliveryMethod::Console, DeliveryMethod::FileHtml]
        );
        assert_eq!(args.days, 14);
    }

    #[test]
    fn test_schedule_and_help_flags() {
        assert!(parse(&argv(&["--schedule"])).unwrap().schedule);
        assert!(parse(&argv(&["--help"])).unwrap().help);
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let err = parse(&argv(&["--frobnicate"])).unwrap_err();
        assert!(err.to_string().contains("Unknown option"));
    }

    #[test]
    fn test_bad_source_lists_valid_choices() {
        let err = parse(&argv(&["--source", "carrier_pigeon"])).unwrap_err();
        assert!(err.to_string().contains("database_entries"));
        assert!(err.to_string().contains("recent_documents"));
    }

    #[test]
    fn test_bad_delivery_token_is_rejected() {
        let err = parse(&argv(&["--delivery", "console,smoke_signal"])).unwrap_err();
        assert!(err.to_string().contains("smoke_signal"));
    }

    #[test]
    fn test_missing_value_is_rejected() {
        let err = parse(&argv(&["--days"])).unwrap_err();
        assert!(err.to_string().contains("Missing value"));

        let err = parse(&argv(&["--days", "soon"])).unwrap_err();
        assert!(err.to_string().contains("number of days"));
    }
}
