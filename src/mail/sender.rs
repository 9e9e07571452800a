use anyhow::Result;
use async_trait::async_trait;

use crate::summary::EmailPayload;

/// Delivers one composed summary email.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, payload: &EmailPayload) -> Result<()>;
}
