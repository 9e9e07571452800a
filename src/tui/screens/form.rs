//! Form screen - notes in, MOM and Action Items out

use crossterm::event::KeyCode;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
};

/// Shown while the notes are blank.
pub const NOTES_REQUIRED: &str =
    "Please enter a meeting description to generate MOM and Action Items.";

/// Focusable form elements, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Notes,
    Generate,
    Output,
    Recipient,
    Send,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Notes,
        Focus::Generate,
        Focus::Output,
        Focus::Recipient,
        Focus::Send,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// What a button press asks the app to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Generate { notes: String },
    Send { notes: String, recipient: String },
}

/// Form screen state
pub struct FormScreen {
    notes: String,
    recipient: String,
    output: String,
    focus: Focus,
    scroll_offset: usize,
    content_height: usize,
}

impl Default for FormScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl FormScreen {
    pub fn new() -> Self {
        Self {
            notes: String::new(),
            recipient: String::new(),
            output: String::new(),
            focus: Focus::Notes,
            scroll_offset: 0,
            content_height: 0,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// The generate button only accepts presses for non-blank notes.
    pub fn can_generate(&self) -> bool {
        !self.notes.trim().is_empty()
    }

    pub fn set_output(&mut self, output: String) {
        self.output = output;
        self.scroll_offset = 0;
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<FormAction> {
        match key {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Notes => {
                edit_text(&mut self.notes, key, true);
                None
            }
            Focus::Recipient => {
                if key == KeyCode::Enter {
                    self.focus = Focus::Send;
                } else {
                    edit_text(&mut self.recipient, key, false);
                }
                None
            }
            Focus::Generate => match key {
                KeyCode::Enter | KeyCode::Char(' ') if self.can_generate() => {
                    Some(FormAction::Generate {
                        notes: self.notes.clone(),
                    })
                }
                _ => None,
            },
            Focus::Send => match key {
                KeyCode::Enter | KeyCode::Char(' ') => Some(FormAction::Send {
                    notes: self.notes.clone(),
                    recipient: self.recipient.clone(),
                }),
                _ => None,
            },
            Focus::Output => {
                self.scroll(key);
                None
            }
        }
    }

    fn scroll(&mut self, key: KeyCode) {
        let last = self.content_height.saturating_sub(1);
        self.scroll_offset = match key {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_offset.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => (self.scroll_offset + 1).min(last),
            KeyCode::PageUp => self.scroll_offset.saturating_sub(10),
            KeyCode::PageDown => (self.scroll_offset + 10).min(last),
            KeyCode::Home | KeyCode::Char('g') => 0,
            KeyCode::End | KeyCode::Char('G') => last,
            _ => self.scroll_offset,
        };
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, busy: Option<&str>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // Title
                Constraint::Percentage(30), // Notes
                Constraint::Length(1),      // Warning
                Constraint::Length(3),      // Generate
                Constraint::Min(6),         // Output
                Constraint::Length(3),      // Recipient
                Constraint::Length(3),      // Send
                Constraint::Length(1),      // Help
            ])
            .split(area);

        let title = Paragraph::new("Automated MOM & Action Items Generator")
            .style(Style::default().fg(Color::Cyan).bold())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        self.draw_notes(frame, chunks[1]);

        let warning = if self.can_generate() { "" } else { NOTES_REQUIRED };
        frame.render_widget(
            Paragraph::new(warning).style(Style::default().fg(Color::Yellow)),
            chunks[2],
        );

        frame.render_widget(
            button(
                "Generate MOM and Action Items",
                self.focus == Focus::Generate,
                self.can_generate(),
            ),
            chunks[3],
        );

        self.draw_output(frame, chunks[4], busy);

        let recipient_text = if self.focus == Focus::Recipient {
            format!("{}█", self.recipient)
        } else if self.recipient.is_empty() {
            "Enter the recipient's email address".to_string()
        } else {
            self.recipient.clone()
        };
        let recipient_style = if self.recipient.is_empty() && self.focus != Focus::Recipient {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        let recipient = Paragraph::new(recipient_text)
            .style(recipient_style)
            .block(field_block(" Enter Recipient's Email ", self.focus == Focus::Recipient));
        frame.render_widget(recipient, chunks[5]);

        frame.render_widget(
            button("Send Output via Email", self.focus == Focus::Send, true),
            chunks[6],
        );

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Tab ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Next field  "),
            Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Press button  "),
            Span::styled(" F1 ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Help  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[7]);
    }

    fn draw_notes(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Notes;
        let (text, style) = if focused {
            (format!("{}█", self.notes), Style::default())
        } else if self.notes.is_empty() {
            (
                "Paste your meeting notes here...".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (self.notes.clone(), Style::default())
        };

        // Keep the end of the notes, where typing happens, in view.
        let visible = area.height.saturating_sub(2) as usize;
        let lines = text.lines().count().max(1);
        let scroll = lines.saturating_sub(visible) as u16;

        let notes = Paragraph::new(text)
            .style(style)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(field_block(" Enter Meeting Description ", focused));
        frame.render_widget(notes, area);
    }

    fn draw_output(&mut self, frame: &mut Frame, area: Rect, busy: Option<&str>) {
        let lines: Vec<Line> = match busy {
            Some(status) => vec![Line::from(Span::styled(
                status.to_string(),
                Style::default().fg(Color::Yellow).italic(),
            ))],
            None => self.output.lines().map(styled_markdown_line).collect(),
        };

        let output = Paragraph::new(lines).wrap(Wrap { trim: false });

        // Rows after wrapping inside the borders
        self.content_height = output.line_count(area.width.saturating_sub(2));
        self.scroll_offset = self
            .scroll_offset
            .min(self.content_height.saturating_sub(1));
        let visible_height = area.height.saturating_sub(2) as usize;

        let output = output
            .scroll((self.scroll_offset as u16, 0))
            .block(field_block(" Output ", self.focus == Focus::Output));
        frame.render_widget(output, area);

        if self.content_height > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            let mut scrollbar_state = ScrollbarState::new(self.content_height)
                .position(self.scroll_offset)
                .viewport_content_length(visible_height);

            frame.render_stateful_widget(
                scrollbar,
                area.inner(Margin {
                    horizontal: 0,
                    vertical: 1,
                }),
                &mut scrollbar_state,
            );
        }
    }
}

fn edit_text(text: &mut String, key: KeyCode, multiline: bool) {
    match key {
        KeyCode::Char(c) => text.push(c),
        KeyCode::Enter if multiline => text.push('\n'),
        KeyCode::Backspace => {
            text.pop();
        }
        _ => {}
    }
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Yellow } else { Color::Blue };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn button(label: &str, focused: bool, enabled: bool) -> Paragraph<'static> {
    let style = match (enabled, focused) {
        (false, _) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        (true, false) => Style::default().fg(Color::Cyan),
    };

    Paragraph::new(format!("[ {} ]", label))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style))
}

/// Light markdown styling for the output pane.
fn styled_markdown_line(line: &str) -> Line<'_> {
    if line.starts_with('#') {
        Line::from(Span::styled(
            line.trim_start_matches('#').trim_start(),
            Style::default().fg(Color::Cyan).bold(),
        ))
    } else if line.starts_with("Error") {
        Line::from(Span::styled(line, Style::default().fg(Color::Red)))
    } else {
        Line::from(line)
    }
}
