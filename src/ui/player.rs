use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::ui::meter;

const SEEK_BAR_WIDTH: usize = 40;
const VOLUME_BAR_WIDTH: usize = 10;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let player = app.player();
    let lesson = player.lesson();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let header = Paragraph::new(
        format!("Lesson {} of {}", lesson.number, lesson.total).fg(Color::DarkGray),
    );
    frame.render_widget(header, chunks[0]);

    render_video_frame(frame, chunks[1], player.is_playing());

    let info = vec![
        Line::from(Span::styled(
            lesson.title.clone(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(lesson.description.clone().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(info), chunks[2]);

    let transport = Paragraph::new(Line::from(vec![
        Span::styled(
            meter(player.progress_percent(), SEEK_BAR_WIDTH),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("  {}", player.transport_clock()),
            Style::default().fg(Color::Gray),
        ),
    ]));
    frame.render_widget(transport, chunks[3]);

    let volume = if player.is_muted() {
        Line::from(Span::styled("Muted", Style::default().fg(Color::Red)))
    } else {
        Line::from(vec![
            Span::styled("Volume ", Style::default().fg(Color::Gray)),
            Span::styled(
                meter(u32::from(player.volume()), VOLUME_BAR_WIDTH),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!(" {}%", player.volume()),
                Style::default().fg(Color::Gray),
            ),
        ])
    };
    frame.render_widget(Paragraph::new(volume), chunks[4]);

    let controls = Paragraph::new(
        "space play/pause  ·  m mute  ·  h/l skip 10s  ·  -/+ volume  ·  q quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[5]);
}

fn render_video_frame(frame: &mut Frame, area: Rect, playing: bool) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .margin(1)
    .split(area);

    let state = if playing {
        Span::styled("PLAYING", Style::default().fg(Color::Green).bold())
    } else {
        Span::styled("PAUSED", Style::default().fg(Color::Yellow).bold())
    };
    let widget = Paragraph::new(Line::from(state)).alignment(Alignment::Center);

    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
        area,
    );
    frame.render_widget(widget, chunks[1]);
}
