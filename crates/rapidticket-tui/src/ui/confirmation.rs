use crate::app::App;
use crate::ui::helpers::centered_rect;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn draw_quit_confirmation(f: &mut Frame, app: &App) {
    let modal_area = centered_rect(f.area(), 60, 9);

    f.render_widget(Clear, modal_area);

    let message = if app.form.is_submitting() {
        "A ticket is still being sent. Quit anyway?"
    } else {
        "Your issue description has not been submitted. Discard it and quit?"
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  [Y]es, Quit    ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                "  [N]o, Cancel   ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            "Quit Rapid Ticket?",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(Color::Red));

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(block);

    f.render_widget(paragraph, modal_area);
}
