//! Pipeline module for momgen
//!
//! Wires prompt building, the completion call, post-processing and mail
//! delivery into the two user actions: generate, and generate + email.

use anyhow::Result;

use crate::config::Settings;
use crate::llm::{build_mom_prompt, build_provider, CompletionRequest, LlmProvider, SYSTEM_PROMPT};
use crate::mail::{MailSender, SmtpMailer};
use crate::summary::{DetailExtractor, EmailPayload, GeneratedSummary};
use crate::MomError;

/// Confirmation shown after a successful send.
pub const EMAIL_SENT: &str = "Email sent successfully!";

/// Outcome of the generate action.
pub type GenerationResult = std::result::Result<GeneratedSummary, MomError>;

pub struct Orchestrator {
    provider: Box<dyn LlmProvider>,
    mailer: Box<dyn MailSender>,
    extractor: DetailExtractor,
}

impl Orchestrator {
    pub fn new(provider: Box<dyn LlmProvider>, mailer: Box<dyn MailSender>) -> Result<Self> {
        Ok(Self {
            provider,
            mailer,
            extractor: DetailExtractor::new()?,
        })
    }

    /// Build the production pipeline. Fails when no API key is configured.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let provider = build_provider(settings)?;
        let mailer = SmtpMailer::new(settings.email.clone());
        Self::new(provider, Box::new(mailer))
    }

    /// Ask the model for MOM and Action Items.
    ///
    /// Empty notes are not rejected here.
    pub async fn generate(&self, notes: &str) -> GenerationResult {
        let prompt = build_mom_prompt(notes);
        tracing::debug!(notes_chars = notes.len(), "Built MOM prompt");

        let text = self
            .provider
            .complete(CompletionRequest {
                system: SYSTEM_PROMPT,
                user: &prompt,
            })
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Completion failed");
                MomError::Completion(format!("{:#}", e))
            })?;

        Ok(GeneratedSummary::new(&text))
    }

    /// Generate, then mail the result to `recipient`.
    ///
    /// A completion failure is returned as-is and nothing is sent.
    pub async fn generate_and_email(&self, notes: &str, recipient: &str) -> Result<EmailPayload, MomError> {
        let summary = self.generate(notes).await?;
        let payload = EmailPayload::compose(&self.extractor, &summary, recipient);

        self.mailer.send(&payload).await.map_err(|e| {
            tracing::warn!(error = %e, "Email delivery failed");
            MomError::Mail(format!("{:#}", e))
        })?;

        tracing::info!(subject = %payload.subject, "Summary emailed");
        Ok(payload)
    }

    /// Text for the output pane after "generate".
    pub async fn generate_display(&self, notes: &str) -> String {
        match self.generate(notes).await {
            Ok(summary) => summary.display,
            Err(err) => err.to_string(),
        }
    }

    /// Text for the output pane after "send".
    pub async fn email_display(&self, notes: &str, recipient: &str) -> String {
        match self.generate_and_email(notes, recipient).await {
            Ok(_) => EMAIL_SENT.to_string(),
            Err(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Replies with a canned result and records the prompts it saw.
    struct FakeProvider {
        reply: std::result::Result<String, String>,
        prompts: Arc<Mutex<Vec<(String, String)>>>,
    }

    #[async_trait]
    impl LlmProvider for FakeProvider {
        async fn complete(&self, request: CompletionRequest<'_>) -> Result<String> {
            self.prompts
                .lock()
                .unwrap()
                .push((request.system.to_string(), request.user.to_string()));
            match &self.reply {
                Ok(text) => Ok(text.trim().to_string()),
                Err(message) => Err(anyhow::anyhow!(message.clone())),
            }
        }

        fn model(&self) -> &str {
            "fake-model"
        }
    }

    #[derive(Clone, Default)]
    struct RecordingMailer {
        sent: Arc<Mutex<Vec<EmailPayload>>>,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl MailSender for RecordingMailer {
        async fn send(&self, payload: &EmailPayload) -> Result<()> {
            if let Some(message) = &self.fail_with {
                anyhow::bail!("{}", message);
            }
            self.sent.lock().unwrap().push(payload.clone());
            Ok(())
        }
    }

    struct Harness {
        orchestrator: Orchestrator,
        prompts: Arc<Mutex<Vec<(String, String)>>>,
        sent: Arc<Mutex<Vec<EmailPayload>>>,
    }

    fn harness(reply: std::result::Result<&str, &str>, mailer: RecordingMailer) -> Harness {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let sent = mailer.sent.clone();
        let provider = FakeProvider {
            reply: reply.map(str::to_string).map_err(str::to_string),
            prompts: prompts.clone(),
        };

        Harness {
            orchestrator: Orchestrator::new(Box::new(provider), Box::new(mailer)).unwrap(),
            prompts,
            sent,
        }
    }

    const Q3_NOTES: &str = "Meeting Title: Q3 Planning\nDate: 2024-01-05\n...";

    #[tokio::test]
    async fn generate_wraps_reply_under_heading() {
        let h = harness(Ok("MOM:\n1. Ship v2\nAction Items:\n1. Alice tags release"), RecordingMailer::default());

        let display = h.orchestrator.generate_display("notes").await;

        assert_eq!(
            display,
            "### Extracted MOM and Action Items:\n\nMOM:\n1. Ship v2\nAction Items:\n1. Alice tags release"
        );
    }

    #[tokio::test]
    async fn generate_sends_fixed_system_role_and_prompt() {
        let h = harness(Ok("MOM:"), RecordingMailer::default());

        h.orchestrator.generate("Standup notes").await.unwrap();

        let prompts = h.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].0, SYSTEM_PROMPT);
        assert_eq!(prompts[0].1, build_mom_prompt("Standup notes"));
    }

    #[tokio::test]
    async fn empty_notes_still_call_the_model() {
        let h = harness(Ok("MOM:"), RecordingMailer::default());

        let result = h.orchestrator.generate("").await;

        assert!(result.is_ok());
        assert_eq!(h.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn completion_failure_is_prefixed() {
        let h = harness(Err("invalid api key"), RecordingMailer::default());

        let display = h.orchestrator.generate_display("notes").await;

        assert_eq!(display, "Error: invalid api key");
    }

    #[tokio::test]
    async fn completion_failure_skips_mail() {
        let h = harness(Err("quota exceeded"), RecordingMailer::default());

        let generated = h.orchestrator.generate_display("notes").await;
        let emailed = h.orchestrator.email_display("notes", "team@example.com").await;

        assert_eq!(emailed, generated);
        assert_eq!(emailed, "Error: quota exceeded");
        assert!(h.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn email_subject_comes_from_generated_details() {
        let h = harness(Ok(Q3_NOTES), RecordingMailer::default());

        let display = h.orchestrator.email_display(Q3_NOTES, "team@example.com").await;
        assert_eq!(display, EMAIL_SENT);

        let sent = h.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "MOM and Action Items: Q3 Planning (2024-01-05)");
        assert_eq!(sent[0].recipient, "team@example.com");
        assert!(sent[0]
            .html_body
            .starts_with("<html><body> Extracted MOM and Action Items:<br><br>Meeting Title"));
    }

    #[tokio::test]
    async fn email_without_details_uses_default_subject() {
        let h = harness(Ok("MOM:\n1. **Agreed** on scope"), RecordingMailer::default());

        let payload = h
            .orchestrator
            .generate_and_email("notes", "team@example.com")
            .await
            .unwrap();

        assert_eq!(
            payload.subject,
            "MOM and Action Items: Meeting Summary (No Date Provided)"
        );
        assert!(payload.html_body.contains("1. Agreed on scope"));
    }

    #[tokio::test]
    async fn mail_failure_is_prefixed() {
        let mailer = RecordingMailer {
            fail_with: Some("535 authentication failed".to_string()),
            ..RecordingMailer::default()
        };
        let h = harness(Ok("MOM:"), mailer);

        let display = h.orchestrator.email_display("notes", "team@example.com").await;

        assert_eq!(display, "Error sending email: 535 authentication failed");
    }

    #[test]
    fn from_settings_requires_api_key() {
        let settings = Settings::default();
        let err = match Orchestrator::from_settings(&settings) {
            Ok(_) => panic!("expected missing API key to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("API key not found"));
    }
}
