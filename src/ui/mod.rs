mod dashboard;
mod player;
mod quiz;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).split(area);
    render_tabs(frame, chunks[0], app.screen);

    match app.screen {
        Screen::Dashboard => dashboard::render(frame, chunks[1], app),
        Screen::Quiz => quiz::render(frame, chunks[1], app),
        Screen::Lesson => player::render(frame, chunks[1], app),
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, active: Screen) {
    let tabs = [
        (Screen::Dashboard, "1 Dashboard"),
        (Screen::Quiz, "2 Quiz"),
        (Screen::Lesson, "3 Lesson"),
    ];

    let mut spans = vec![
        Span::styled(" LEARNDASH", Style::default().fg(Color::Cyan).bold()),
        Span::raw("   "),
    ];
    for (screen, label) in tabs {
        let style = if screen == active {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("   "));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

/// Fixed-width text meter for progress and volume displays.
pub(crate) fn meter(percent: u32, width: usize) -> String {
    let filled = ((percent.min(100) as f64 / 100.0) * width as f64) as usize;
    let empty = width - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
