use document_analyzer::AnalyzerConfig;
use notion_input::NotionConfig;
use report_delivery::DeliveryConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration for the Pickles pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PicklesConfig {
    /// Notion input configuration
    pub notion: NotionConfig,

    /// Analyzer configuration
    pub analyzer: AnalyzerConfig,

    /// Delivery configuration
    pub delivery: DeliveryConfig,

    /// Schedule configuration
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Day of week (three-letter token, e.g. "MON")
    pub day: String,

    /// Hour of day, UTC
    pub hour: u32,

    /// Minute of hour
    pub minute: u32,

    /// Retry configuration for scheduled runs
    pub retry: RetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts
    pub max_retries: u32,

    /// Initial retry delay in seconds
    pub initial_delay_secs: u64,

    /// Maximum retry delay in seconds
    pub max_delay_secs: u64,

    /// Backoff multiplier
    pub backoff_multiplier: f64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            day: "MON".to_string(),
            hour: 7,
            minute: 0,
            retry: RetryConfig::default(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_secs: 5,
            max_delay_secs: 300,
            backoff_multiplier: 2.0,
        }
    }
}

impl Default for PicklesConfig {
    fn default() -> Self {
        Self {
            notion: NotionConfig::default(),
            analyzer: AnalyzerConfig::default(),
            delivery: DeliveryConfig::default(),
            schedule: ScheduleConfig::default(),
        }
    }
}

impl PicklesConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            notion: NotionConfig::from_env(),
            analyzer: AnalyzerConfig::from_env(),
            delivery: DeliveryConfig::from_env(),
            schedule: ScheduleConfig::from_env(),
        }
    }
}

impl ScheduleConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(day) = std::env::var("PICKLES_SCHEDULE_DAY") {
            config.day = day;
        }

        if let Ok(hour) = std::env::var("PICKLES_SCHEDULE_HOUR") {
            config.hour = hour.parse().unwrap_or(config.hour);
        }

        if let Ok(minute) = std::env::var("PICKLES_SCHEDULE_MINUTE") {
            config.minute = minute.parse().unwrap_or(config.minute);
        }

        config
    }
}
