//! HTML rendering for the email_html and file_html methods

use document_analyzer::AnalysisReport;

/// Escape text for inclusion in HTML
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render a report as a self-contained HTML document
pub fn render(report: &AnalysisReport) -> String {
    let insights = report
        .insights
        .split("\n\n")
        .map(|paragraph| format!("    <p>{}</p>", escape(paragraph).replace('\n', "<br>\n")))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Pickles Weekly Report</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; max-width: 40em; margin: 2em auto; }}\n\
         .statistics {{ color: #555; background: #f4f4f4; padding: 1em; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <h1>\u{1f952} Pickles Weekly Report</h1>\n\
         <pre class=\"statistics\">{}</pre>\n\
         <div class=\"insights\">\n{}\n</div>\n\
         </body>\n\
         </html>\n",
        escape(&report.statistics),
        insights
    )
}
