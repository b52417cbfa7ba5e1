use crate::app::{App, FormField};
use crate::ui::buttons::Button;
use crate::ui::helpers::{focused_border_style, or_placeholder};
use crate::ui::progress::draw_progress;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const KEY_PLACEHOLDER: &str = "e.g., EMP-1001 or prainila";
const ISSUE_PLACEHOLDER: &str = "Describe your issue or feedback...";
const MANAGER_PLACEHOLDER: &str = "-- Select Manager --";

pub fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    draw_employee_panel(f, app, chunks[0]);
    draw_issue_input(f, app, chunks[1]);
    draw_manager_select(f, app, chunks[2]);
    draw_submit_button(f, app, chunks[3]);
    draw_progress(f, &app.progress, chunks[4]);
}

fn draw_employee_panel(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("🔍 Employee Search");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(inner);

    let is_focused = app.focused_field == FormField::EmployeeKey;
    let (text, style) = or_placeholder(app.form.key(), KEY_PLACEHOLDER);
    let input = Paragraph::new(Span::styled(text, style)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Emp ID or Username")
            .border_style(focused_border_style(is_focused)),
    );
    f.render_widget(input, rows[0]);

    if is_focused {
        let cursor_x = (rows[0].x + 1 + app.form.key().chars().count() as u16)
            .min(rows[0].x + rows[0].width.saturating_sub(2));
        f.set_cursor_position((cursor_x, rows[0].y + 1));
    }

    if app.form.is_searching() {
        let searching = Paragraph::new(Span::styled(
            "⏳ Searching...",
            Style::default().fg(Color::Gray),
        ));
        f.render_widget(searching, rows[1]);
    }

    let Some(employee) = app.form.employee() else {
        return;
    };

    let fields = [
        ("Full Name", employee.full_name.as_str(), rows[2], 0),
        ("Emp ID", employee.emp_id.as_str(), rows[2], 1),
        ("Username", employee.username.as_str(), rows[3], 0),
        ("Department", employee.department.as_str(), rows[3], 1),
    ];

    for (label, value, row, column) in fields {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row);

        let field = Paragraph::new(value).block(
            Block::default()
                .borders(Borders::ALL)
                .title(label)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(field, cells[column]);
    }
}

fn draw_issue_input(f: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_field == FormField::Issue;
    let issue = app.form.draft().issue_text.as_str();

    let paragraph = if issue.is_empty() {
        Paragraph::new(Span::styled(
            ISSUE_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(issue).wrap(Wrap { trim: false })
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title("📝 Issue / Feedback")
        .border_style(focused_border_style(is_focused));

    f.render_widget(paragraph.block(block), area);

    if is_focused {
        let width = area.width.saturating_sub(2).max(1);
        let last_line = issue.rsplit('\n').next().unwrap_or("");
        let line_count = issue.split('\n').count().max(1) as u16;
        let col = last_line.chars().count() as u16 % width;
        let cursor_x = area.x + 1 + col;
        let cursor_y = (area.y + line_count).min(area.y + area.height.saturating_sub(2));
        f.set_cursor_position((cursor_x, cursor_y));
    }
}

fn draw_manager_select(f: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_field == FormField::ReportingTo;
    let selected = app.form.draft().reporting_to.as_str();
    let (text, style) = or_placeholder(selected, MANAGER_PLACEHOLDER);

    let line = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(Color::Yellow)),
        Span::styled(text, style.add_modifier(Modifier::BOLD)),
        Span::styled(" ▶", Style::default().fg(Color::Yellow)),
    ]);

    let select = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("👤 Reporting To")
            .border_style(focused_border_style(is_focused)),
    );

    f.render_widget(select, area);
}

fn draw_submit_button(f: &mut Frame, app: &App, area: Rect) {
    let label = if app.form.is_loading() {
        "Submitting..."
    } else {
        "Send Mail & Save"
    };

    let button = Button::new(
        label,
        "Ctrl+S",
        app.focused_field == FormField::Submit,
        app.form.can_submit(),
    );
    button.render(f, area);
}
