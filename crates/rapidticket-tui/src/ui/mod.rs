mod buttons;
mod confirmation;
mod form;
pub mod helpers;
pub mod progress;

use crate::app::{App, InputMode};
use confirmation::draw_quit_confirmation;
use form::draw_form;
use helpers::centered_rect;
use rapidticket_core::models::StatusKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_title_bar(f, app, chunks[0]);
    draw_form(f, app, chunks[1]);
    draw_status_bar(f, app, chunks[2]);

    if app.show_help {
        draw_help_modal(f);
    }

    if app.input_mode == InputMode::ConfirmQuit {
        draw_quit_confirmation(f, app);
    }
}

fn draw_title_bar(f: &mut Frame, app: &App, area: Rect) {
    let ip = match app.form.ip() {
        Some(ip) if !ip.is_empty() => ip,
        _ => "-",
    };

    let spans = vec![
        Span::styled(
            "🎫 Rapid Ticketing System ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ System IP: "),
        Span::styled(ip, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" │ [F1]Help [Esc]Quit"),
    ];

    let title = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(title, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let content = match app.form.status() {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Success => Color::Green,
                StatusKind::Error => Color::Red,
            };
            let timestamp = status.created_at.with_timezone(&chrono::Local).format("%H:%M:%S");
            Line::from(vec![
                Span::styled(format!("[{}] ", timestamp), Style::default().fg(Color::Gray)),
                Span::styled(
                    status.text.as_str(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])
        }
        None => Line::from(Span::styled(
            "[Tab] Next field  [Shift+Tab] Previous  [Ctrl+S] Send",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let status_bar = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(status_bar, area);
}

fn draw_help_modal(f: &mut Frame) {
    let modal_area = centered_rect(f.area(), 64, 20);

    f.render_widget(Clear, modal_area);

    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let help_text = vec![
        Line::from(Span::styled(
            "  🎫 Rapid Ticket - Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("  NAVIGATION", heading)),
        Line::from("    [Tab] / [↓]        Next field"),
        Line::from("    [Shift+Tab] / [↑]  Previous field"),
        Line::from("    [F1]               Toggle this Help"),
        Line::from("    [Esc] / [Ctrl+C]   Quit"),
        Line::from(""),
        Line::from(Span::styled("  FORM", heading)),
        Line::from("    Type in Emp ID field  Look up employee after a pause"),
        Line::from("    [Enter] in Issue      New line"),
        Line::from("    [←→] / [Space]        Change Reporting To manager"),
        Line::from("    [Backspace] on select Clear Reporting To"),
        Line::from("    [Ctrl+S] / [Enter]    Send Mail & Save"),
        Line::from(""),
        Line::from(Span::styled(
            "  Press any key to close this help",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("❓ Help")
                .border_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .style(Style::default().bg(Color::Black));

    f.render_widget(help_paragraph, modal_area);
}
