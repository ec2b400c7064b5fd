//! Weekly scheduler for the pipeline

use crate::args::CliArgs;
use crate::config::{PicklesConfig, RetryConfig};
use crate::pipeline::Pipeline;
use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveTime, Utc, Weekday};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

/// Runs the pipeline on a weekly schedule with retry
pub struct PipelineScheduler {
    config: PicklesConfig,
    args: CliArgs,
}

impl PipelineScheduler {
    /// Create a new scheduler
    pub fn new(config: PicklesConfig, args: CliArgs) -> Self {
        Self { config, args }
    }

    /// Start the scheduler (runs indefinitely)
    pub async fn start(&self) -> Result<()> {
        let schedule = &self.config.schedule;
        println!(
            "\u{23f0} Scheduler started: weekly on {} at {:02}:{:02} UTC",
            schedule.day, schedule.hour, schedule.minute
        );

        loop {
            let next_run = next_run_time(Utc::now(), &schedule.day, schedule.hour, schedule.minute);
            info!("Next run scheduled for {}", next_run);

            let wait = (next_run - Utc::now())
                .to_std()
                .unwrap_or(Duration::from_secs(60));
            sleep(wait).await;

            let config = self.config.clone();
            let args = self.args.clone();
            let result = run_with_retry(
                || {
                    let config = config.clone();
                    let args = args.clone();
                    async move { Pipeline::new(config).run(&args).await }
                },
                &schedule.retry,
            )
            .await;

            if let Err(e) = result {
                error!("Scheduled run failed after retries: {:#}", e);
                println!("\u{274c} Scheduled run failed: {:#}", e);
            }
        }
    }
}

/// Next occurrence of the configured weekday and time, strictly in the future
fn next_run_time(now: DateTime<Utc>, day: &str, hour: u32, minute: u32) -> DateTime<Utc> {
    let target = weekday_from_token(day).unwrap_or(Weekday::Mon);
    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .unwrap_or_else(|| NaiveTime::from_hms_opt(7, 0, 0).unwrap());

    let mut date = now.date_naive();
    for _ in 0..=7 {
        if date.weekday() == target {
            let candidate = date.and_time(time).and_utc();
            if candidate > now {
                return candidate;
            }
        }
        date += chrono::Duration::days(1);
    }

    // Not reachable: an eight-day window always holds a future occurrence
    (now.date_naive() + chrono::Duration::days(7))
        .and_time(time)
        .and_utc()
}

/// Parse a three-letter weekday token
fn weekday_from_token(token: &str) -> Option<Weekday> {
    match token.to_uppercase().as_str() {
        "MON" => Some(Weekday::Mon),
        "TUE" => Some(Weekday::Tue),
        "WED" => Some(Weekday::Wed),
        "THU" => Some(Weekday::Thu),
        "FRI" => Some(Weekday::Fri),
        "SAT" => Some(Weekday::Sat),
        "SUN" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Run a function with retry and exponential backoff
async fn run_with_retry<F, Fut, T>(mut f: F, retry: &RetryConfig) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut delay = Duration::from_secs(retry.initial_delay_secs);
    let max_retries = retry.max_retries.max(1);

    for attempt in 1..=max_retries {
        match f().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                if attempt == max_retries {
                    return Err(e);
                }

                warn!("Attempt {} failed: {:#}, retrying in {:?}", attempt, e, delay);
                sleep(delay).await;

                delay = Duration::from_secs(
                    (delay.as_secs() as f64 * retry.backoff_multiplier)
                        .min(retry.max_delay_secs as f64) as u64,
                );
            }
        }
    }

    unreachable!()
}
