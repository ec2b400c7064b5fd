use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for report delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// SMTP settings for the email methods
    pub email: EmailConfig,

    /// File-output settings
    pub file: FileConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// SMTP relay host
    pub host: String,

    /// SMTP port (STARTTLS)
    pub port: u16,

    /// SMTP login
    pub username: String,

    /// SMTP password
    pub password: String,

    /// Recipient address
    pub to: String,

    /// Sender address; defaults to the login
    pub from: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    /// Directory report files are written to
    pub output_dir: PathBuf,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            email: EmailConfig {
                host: String::new(),
                port: 587,
                username: String::new(),
                password: String::new(),
                to: String::new(),
                from: String::new(),
            },
            file: FileConfig {
                output_dir: PathBuf::from("./reports"),
            },
        }
    }
}

impl DeliveryConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("EMAIL_HOST") {
            config.email.host = host;
        }

        if let Ok(port) = std::env::var("EMAIL_PORT") {
            config.email.port = port.parse().unwrap_or(587);
        }

        if let Ok(username) = std::env::var("EMAIL_USER") {
            config.email.from = username.clone();
            config.email.username = username;
        }

        if let Ok(password) = std::env::var("EMAIL_PASS") {
            config.email.password = password;
        }

        if let Ok(to) = std::env::var("EMAIL_TO") {
            config.email.to = to;
        }

        if let Ok(from) = std::env::var("EMAIL_FROM") {
            config.email.from = from;
        }

        if let Ok(output_dir) = std::env::var("PICKLES_OUTPUT_DIR") {
            config.file.output_dir = PathBuf::from(output_dir);
        }

        config
    }
}
