//! Main TUI application state and logic

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::prelude::*;

use crate::config::Settings;
use crate::pipeline::Orchestrator;
use crate::tui::screens::{FormAction, FormScreen};
use crate::tui::widgets::HelpPopup;

/// Main application state
pub struct App {
    orchestrator: Orchestrator,
    form: FormScreen,
    show_help: bool,
    pending: Option<FormAction>,
}

impl App {
    /// Create a new app instance
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self::with_orchestrator(Orchestrator::from_settings(settings)?))
    }

    pub fn with_orchestrator(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator,
            form: FormScreen::new(),
            show_help: false,
            pending: None,
        }
    }

    /// Draw the form, plus the help popup when active
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();

        let busy = self.pending.as_ref().map(|action| match action {
            FormAction::Generate { .. } => "Generating MOM and Action Items...",
            FormAction::Send { .. } => "Generating and sending email...",
        });
        self.form.draw(frame, area, busy);

        if self.show_help {
            HelpPopup::draw(frame, area, self.form.focus());
        }
    }

    /// Handle key input
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        if key == KeyCode::F(1) {
            self.show_help = true;
            return;
        }

        if let Some(action) = self.form.handle_key(key) {
            self.pending = Some(action);
        }
    }

    /// Close help, or report that the app should exit
    pub fn handle_escape(&mut self) -> bool {
        if self.show_help {
            self.show_help = false;
            return false;
        }
        true
    }

    pub fn has_pending_action(&self) -> bool {
        self.pending.is_some()
    }

    /// Run the queued button action to completion.
    pub async fn run_pending_action(&mut self) {
        let Some(action) = self.pending.take() else {
            return;
        };

        let output = match action {
            FormAction::Generate { notes } => self.orchestrator.generate_display(&notes).await,
            FormAction::Send { notes, recipient } => {
                self.orchestrator.email_display(&notes, &recipient).await
            }
        };

        self.form.set_output(output);
    }

    pub fn output(&self) -> &str {
        self.form.output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{CompletionRequest, LlmProvider};
    use crate::mail::MailSender;
    use crate::pipeline::EMAIL_SENT;
    use crate::summary::EmailPayload;
    use async_trait::async_trait;

    struct EchoProvider;

    #[async_trait]
    impl LlmProvider for EchoProvider {
        async fn complete(&self, _request: CompletionRequest<'_>) -> Result<String> {
            Ok("Meeting Title: Retro\nMOM:\n1. Keep standups short".to_string())
        }

        fn model(&self) -> &str {
            "echo"
        }
    }

    struct NullMailer;

    #[async_trait]
    impl MailSender for NullMailer {
        async fn send(&self, _payload: &EmailPayload) -> Result<()> {
            Ok(())
        }
    }

    fn app() -> App {
        let orchestrator =
            Orchestrator::new(Box::new(EchoProvider), Box::new(NullMailer)).unwrap();
        App::with_orchestrator(orchestrator)
    }

    #[tokio::test]
    async fn generate_button_fills_output() {
        let mut app = app();
        for c in "notes".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Enter);
        assert!(app.has_pending_action());

        app.run_pending_action().await;

        assert!(!app.has_pending_action());
        assert!(app.output().starts_with("### Extracted MOM and Action Items:"));
    }

    #[tokio::test]
    async fn send_button_reports_confirmation() {
        let mut app = app();
        app.handle_key(KeyCode::BackTab);
        app.handle_key(KeyCode::Enter);

        app.run_pending_action().await;

        assert_eq!(app.output(), EMAIL_SENT);
    }

    #[test]
    fn help_swallows_next_key() {
        let mut app = app();
        app.handle_key(KeyCode::F(1));
        app.handle_key(KeyCode::Char('x'));
        assert!(!app.has_pending_action());

        app.handle_key(KeyCode::F(1));
        assert!(!app.handle_escape());
        assert!(app.handle_escape());
    }
}
