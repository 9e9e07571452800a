//! Summary module for momgen
//!
//! Pure post-processing of model output: meeting details for the email
//! subject and the HTML rendering of the body.

mod extract;
mod html;

pub use extract::DetailExtractor;
pub use html::format_as_html;

/// Title used when the generated text names none.
pub const DEFAULT_TITLE: &str = "Meeting Summary";

/// Date used when the generated text names none.
pub const DEFAULT_DATE: &str = "No Date Provided";

/// Heading placed above the model output for display.
pub const DISPLAY_HEADING: &str = "### Extracted MOM and Action Items:";

/// Title and date found in generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingMetadata {
    pub title: String,
    pub date: String,
}

impl Default for MeetingMetadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            date: DEFAULT_DATE.to_string(),
        }
    }
}

impl MeetingMetadata {
    /// Email subject line for these details
    pub fn subject(&self) -> String {
        format!("MOM and Action Items: {} ({})", self.title, self.date)
    }
}

/// A successful generation: the model text and its display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSummary {
    /// Model output, trimmed
    pub raw: String,
    /// Markdown shown to the user
    pub display: String,
}

impl GeneratedSummary {
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim().to_string();
        let display = format!("{DISPLAY_HEADING}\n\n{raw}");
        Self { raw, display }
    }
}

/// Everything needed to mail one summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailPayload {
    pub subject: String,
    pub html_body: String,
    pub recipient: String,
}

impl EmailPayload {
    /// Subject from the raw text's details, body from the display text.
    pub fn compose(extractor: &DetailExtractor, summary: &GeneratedSummary, recipient: &str) -> Self {
        let metadata = extractor.extract(&summary.raw);

        Self {
            subject: metadata.subject(),
            html_body: format_as_html(&summary.display),
            recipient: recipient.to_string(),
        }
    }
}
