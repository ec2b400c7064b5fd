use std::fmt;
use std::str::FromStr;

/// Destinations and formats a report can be delivered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMethod {
    /// Print to standard output
    Console,
    /// Plain-text email over SMTP
    EmailText,
    /// HTML email over SMTP
    EmailHtml,
    /// Plain-text file in the output directory
    FileText,
    /// HTML file in the output directory
    FileHtml,
}

impl DeliveryMethod {
    /// All delivery methods, in documentation order
    pub const ALL: [DeliveryMethod; 5] = [
        DeliveryMethod::Console,
        DeliveryMethod::EmailText,
        DeliveryMethod::EmailHtml,
        DeliveryMethod::FileText,
        DeliveryMethod::FileHtml,
    ];

    /// The CLI token for this method
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMethod::Console => "console",
            DeliveryMethod::EmailText => "email_text",
            DeliveryMethod::EmailHtml => "email_html",
            DeliveryMethod::FileText => "file_text",
            DeliveryMethod::FileHtml => "file_html",
        }
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "console" => Ok(DeliveryMethod::Console),
            "email_text" => Ok(DeliveryMethod::EmailText),
            "email_html" => Ok(DeliveryMethod::EmailHtml),
            "file_text" => Ok(DeliveryMethod::FileText),
            "file_html" => Ok(DeliveryMethod::FileHtml),
            _ => Err(format!(
                "Unknown delivery method: '{}'. Valid methods: {}",
                s,
                Self::ALL
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}
