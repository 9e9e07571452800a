//! Help popup widget

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::tui::screens::Focus;

/// Help popup that shows keyboard shortcuts
pub struct HelpPopup;

impl HelpPopup {
    pub fn draw(frame: &mut Frame, area: Rect, focus: Focus) {
        // Centered, 60% width, 70% height
        let popup_width = (area.width as f32 * 0.6) as u16;
        let popup_height = (area.height as f32 * 0.7) as u16;
        let popup_area = Rect {
            x: (area.width - popup_width) / 2,
            y: (area.height - popup_height) / 2,
            width: popup_width,
            height: popup_height,
        };

        frame.render_widget(Clear, popup_area);

        let mut lines = vec![
            Line::from(Span::styled(
                "Form Shortcuts",
                Style::default().fg(Color::Cyan).bold(),
            )),
            Line::from(""),
            shortcut("Tab", "Next field"),
            shortcut("S-Tab", "Previous field"),
            shortcut("Enter", "Press the focused button"),
            shortcut("F1", "Toggle this help"),
            shortcut("Esc", "Quit"),
            Line::from(""),
        ];

        lines.extend(match focus {
            Focus::Notes => vec![
                shortcut("Enter", "New line in the notes"),
                shortcut("Bksp", "Delete last character"),
            ],
            Focus::Generate => vec![Line::from(
                "Generate is available once the notes contain text.",
            )],
            Focus::Output => vec![
                shortcut("↑/k ↓/j", "Scroll"),
                shortcut("PgUp/PgDn", "Page"),
                shortcut("g/G", "Top/Bottom"),
            ],
            Focus::Recipient => vec![shortcut("Enter", "Move to the send button")],
            Focus::Send => vec![Line::from(
                "Send generates a fresh summary and emails it to the recipient.",
            )],
        });

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )));

        let help = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );

        frame.render_widget(help, popup_area);
    }
}

fn shortcut(keys: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", keys), Style::default().fg(Color::Yellow)),
        Span::raw(description),
    ])
}
