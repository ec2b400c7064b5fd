use crate::config::DeliveryConfig;
use crate::error::{DeliveryError, Result};
use crate::html;
use crate::method::DeliveryMethod;
use chrono::Utc;
use document_analyzer::AnalysisReport;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::path::PathBuf;
use tracing::{error, info};

const EMAIL_SUBJECT: &str = "Pickles Weekly Report";

/// Sends finished reports to their configured destinations
pub struct ReportDelivery {
    config: DeliveryConfig,
}

impl ReportDelivery {
    /// Create a new delivery service
    pub fn new(config: DeliveryConfig) -> Self {
        Self { config }
    }

    /// Deliver a report via each requested method
    ///
    /// One failing method records its error and does not stop the others.
    /// Returns a per-method outcome in request order.
    pub async fn deliver(
        &self,
        report: &AnalysisReport,
        methods: &[DeliveryMethod],
    ) -> Vec<(DeliveryMethod, String)> {
        let mut results = Vec::with_capacity(methods.len());

        for &method in methods {
            let outcome = match self.deliver_one(report, method).await {
                Ok(detail) => detail,
                Err(e) => {
                    error!("Delivery via {} failed: {}", method, e);
                    format!("failed: {}", e)
                }
            };
            results.push((method, outcome));
        }

        results
    }

    async fn deliver_one(&self, report: &AnalysisReport, method: DeliveryMethod) -> Result<String> {
        match method {
            DeliveryMethod::Console => {
                print_console(report);
                Ok("printed to console".to_string())
            }
            DeliveryMethod::EmailText => self.send_email(report, false).await,
            DeliveryMethod::EmailHtml => self.send_email(report, true).await,
            DeliveryMethod::FileText => self.write_file(report, false).await,
            DeliveryMethod::FileHtml => self.write_file(report, true).await,
        }
    }

    /// Email the report over SMTP with STARTTLS
    async fn send_email(&self, report: &AnalysisReport, as_html: bool) -> Result<String> {
        let email = &self.config.email;
        for (value, name) in [
            (&email.host, "EMAIL_HOST"),
            (&email.username, "EMAIL_USER"),
            (&email.password, "EMAIL_PASS"),
            (&email.to, "EMAIL_TO"),
        ] {
            if value.is_empty() {
                return Err(DeliveryError::MissingConfig(format!("{} is not set", name)));
            }
        }

        let (content_type, body) = if as_html {
            (ContentType::TEXT_HTML, html::render(report))
        } else {
            (ContentType::TEXT_PLAIN, render_text(report))
        };

        let message = Message::builder()
            .from(email.from.parse()?)
            .to(email.to.parse()?)
            .subject(EMAIL_SUBJECT)
            .header(content_type)
            .body(body)?;

        let mailer: AsyncSmtpTransport<Tokio1Executor> =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&email.host)?
                .port(email.port)
                .credentials(Credentials::new(
                    email.username.clone(),
                    email.password.clone(),
                ))
                .build();

        mailer.send(message).await?;

        info!("Report emailed to {}", email.to);
        Ok(format!("sent to {}", email.to))
    }

    /// Write the report to a timestamped file in the output directory
    async fn write_file(&self, report: &AnalysisReport, as_html: bool) -> Result<String> {
        let (extension, content) = if as_html {
            ("html", html::render(report))
        } else {
            ("txt", render_text(report))
        };

        let path = report_path(&self.config.file.output_dir, extension);
        tokio::fs::create_dir_all(&self.config.file.output_dir).await?;
        tokio::fs::write(&path, content).await?;

        info!("Report written to {}", path.display());
        Ok(format!("wrote {}", path.display()))
    }
}

/// Plain-text rendering shared by console, email_text, and file_text
pub fn render_text(report: &AnalysisReport) -> String {
    format!(
        "\u{1f952} Pickles Weekly Report\n\n{}\n\n{}\n",
        report.statistics, report.insights
    )
}

fn print_console(report: &AnalysisReport) {
    println!("\n{}", "=".repeat(50));
    println!("{}", render_text(report));
}

fn report_path(output_dir: &std::path::Path, extension: &str) -> PathBuf {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    output_dir.join(format!("pickles_report_{}.{}", timestamp, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> AnalysisReport {
        AnalysisReport {
            statistics: "Fetched: 4 documents, after filtering: 3".to_string(),
            insights: "A steady, outward-looking week.".to_string(),
            data_count: 3,
        }
    }

    #[test]
    fn test_render_text_includes_title_statistics_insights() {
        let text = render_text(&report());
        assert!(text.contains("Pickles Weekly Report"));
        assert!(text.contains("Fetched: 4 documents"));
        assert!(text.contains("outward-looking week"));
    }

    #[test]
    fn test_report_path_extension_and_prefix() {
        let path = report_path(std::path::Path::new("/tmp/out"), "html");
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("pickles_report_"));
        assert!(name.ends_with(".html"));
    }

    #[tokio::test]
    async fn test_file_delivery_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = DeliveryConfig::default();
        config.file.output_dir = dir.path().to_path_buf();

        let delivery = ReportDelivery::new(config);
        let results = delivery.deliver(&report(), &[DeliveryMethod::FileText]).await;

        assert_eq!(results.len(), 1);
        assert!(results[0].1.starts_with("wrote "));

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        let written = std::fs::read_to_string(entries[0].as_ref().unwrap().path()).unwrap();
        assert!(written.contains("A steady, outward-looking week."));
    }

    #[tokio::test]
    async fn test_email_without_config_reports_failure_without_aborting() {
        let delivery = ReportDelivery::new(DeliveryConfig::default());
        let results = delivery
            .deliver(
                &report(),
                &[DeliveryMethod::EmailText, DeliveryMethod::Console],
            )
            .await;

        assert_eq!(results.len(), 2);
        assert!(results[0].1.starts_with("failed: "));
        assert!(results[0].1.contains("EMAIL_HOST"));
        assert_eq!(results[1].1, "printed to console");
    }
}
