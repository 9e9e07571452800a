//! Meeting title and date extraction from generated text

use anyhow::Result;
use regex::Regex;

use crate::summary::MeetingMetadata;

/// Pulls the meeting title and date out of a model reply.
///
/// Each trimmed line is matched from its start, case-insensitively. Every
/// matching line overwrites the previous value, so the last one wins, even
/// when its capture is empty.
pub struct DetailExtractor {
    line_break_regex: Regex,
    title_regex: Regex,
    date_regex: Regex,
}

impl DetailExtractor {
    pub fn new() -> Result<Self> {
        // CRLF is one break; bare CR, vertical tab, form feed, file/group/record
        // separators, NEL and the Unicode line/paragraph separators also end a line.
        let line_break_regex =
            Regex::new(r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x{85}\x{2028}\x{2029}]")?;
        let title_regex = Regex::new(r"(?i)^meeting title\s*:\s*(.*)")?;
        // "Date:" or "Date and Time:"
        let date_regex = Regex::new(r"(?i)^date\s*(?:and time)?\s*:\s*(.*)")?;

        Ok(Self {
            line_break_regex,
            title_regex,
            date_regex,
        })
    }

    pub fn extract(&self, text: &str) -> MeetingMetadata {
        let mut metadata = MeetingMetadata::default();

        for line in self.line_break_regex.split(text) {
            let line = line.trim();

            if let Some(title) = capture(&self.title_regex, line) {
                metadata.title = title;
            }

            if let Some(date) = capture(&self.date_regex, line) {
                metadata.date = date;
            }
        }

        tracing::debug!(title = %metadata.title, date = %metadata.date, "Extracted meeting details");
        metadata
    }
}

fn capture(regex: &Regex, line: &str) -> Option<String> {
    regex
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
