//! Button rendering utilities

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub struct Button<'a> {
    pub label: &'a str,
    pub shortcut: &'a str,
    pub selected: bool,
    pub enabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, shortcut: &'a str, selected: bool, enabled: bool) -> Self {
        Self {
            label,
            shortcut,
            selected,
            enabled,
        }
    }

    fn style(&self) -> Style {
        if !self.enabled {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        } else if self.selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let text = format!(" [{}] {} ", self.shortcut, self.label);
        let border = if self.selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let button = Paragraph::new(text)
            .style(self.style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));

        f.render_widget(button, area);
    }
}
