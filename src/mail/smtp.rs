use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::{EmailSettings, EMAIL_ADDRESS_ENV, EMAIL_PASSWORD_ENV};
use crate::mail::sender::MailSender;
use crate::summary::EmailPayload;

/// Authenticated STARTTLS submission to the configured relay.
pub struct SmtpMailer {
    settings: EmailSettings,
}

impl SmtpMailer {
    /// Credentials are only checked when a message is sent.
    pub fn new(settings: EmailSettings) -> Self {
        Self { settings }
    }

    fn build_message(&self, payload: &EmailPayload) -> Result<Message> {
        let from: Mailbox = self
            .settings
            .address
            .trim()
            .parse()
            .with_context(|| format!("Invalid sender address '{}'", self.settings.address))?;
        let to: Mailbox = payload
            .recipient
            .trim()
            .parse()
            .with_context(|| format!("Invalid recipient address '{}'", payload.recipient))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(payload.subject.as_str())
            .header(ContentType::TEXT_HTML)
            .body(payload.html_body.clone())
            .context("Failed to build email message")
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
        let credentials = Credentials::new(
            self.settings.address.trim().to_string(),
            self.settings.password.clone(),
        );

        Ok(
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.settings.smtp_host)
                .with_context(|| format!("Invalid SMTP relay '{}'", self.settings.smtp_host))?
                .port(self.settings.smtp_port)
                .credentials(credentials)
                .build(),
        )
    }
}

#[async_trait]
impl MailSender for SmtpMailer {
    async fn send(&self, payload: &EmailPayload) -> Result<()> {
        if !self.settings.has_credentials() {
            anyhow::bail!(
                "Email credentials are missing. Set email.address and email.password in config or {} and {}.",
                EMAIL_ADDRESS_ENV,
                EMAIL_PASSWORD_ENV
            );
        }

        let message = self.build_message(payload)?;
        let transport = self.transport()?;

        tracing::info!(
            relay = %self.settings.smtp_host,
            port = self.settings.smtp_port,
            "Sending summary email"
        );

        let response = transport
            .send(message)
            .await
            .context("SMTP delivery failed")?;

        tracing::debug!(code = %response.code(), "SMTP relay accepted message");
        Ok(())
    }
}
