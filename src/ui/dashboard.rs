use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Course, Deadline, StatTile, Urgency};
use crate::ui::meter;

const PROGRESS_BAR_WIDTH: usize = 15;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Fill(1),
    ])
    .margin(1)
    .split(area);

    render_welcome(frame, chunks[0], &app.data().learner);
    render_stats(frame, chunks[1], &app.data().stats);

    let columns =
        Layout::horizontal([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(chunks[2]);
    render_courses(frame, columns[0], app);
    render_side_panel(frame, columns[1], app);
}

fn render_welcome(frame: &mut Frame, area: Rect, learner: &str) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Welcome back, {}!", learner),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from("Ready to continue your learning journey?".fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_stats(frame: &mut Frame, area: Rect, stats: &[StatTile]) {
    let tiles = Layout::horizontal(vec![
        Constraint::Ratio(1, stats.len().max(1) as u32);
        stats.len()
    ])
    .split(area);

    for (tile, chunk) in stats.iter().zip(tiles.iter()) {
        let mut lines = vec![Line::from(Span::styled(
            tile.value.clone(),
            Style::default().fg(Color::Cyan).bold(),
        ))];
        if let Some(change) = &tile.change {
            lines.push(Line::from(change.clone().fg(Color::DarkGray)));
        }

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1))
                .title(Span::styled(
                    tile.title.clone(),
                    Style::default().fg(Color::Gray),
                )),
        );
        frame.render_widget(widget, *chunk);
    }
}

fn render_courses(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(section_header("CONTINUE LEARNING"));
    for course in &app.data().enrolled {
        push_course_card(&mut lines, course);
    }

    lines.push(section_header("RECOMMENDED FOR YOU"));
    for course in &app.data().recommended {
        push_course_card(&mut lines, course);
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((app.dashboard_scroll() as u16, 0))
        .block(Block::default().padding(Padding::new(0, 2, 0, 0)));
    frame.render_widget(widget, area);
}

fn section_header(title: &str) -> Line<'_> {
    Line::from(Span::styled(title, Style::default().fg(Color::Cyan).bold()))
}

fn push_course_card(lines: &mut Vec<Line<'_>>, course: &Course) {
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(course.title.clone(), Style::default().fg(Color::White).bold()),
        Span::styled(
            format!("  [{}]", course.level.label()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    lines.push(Line::from(
        format!("{} · {}", course.instructor, course.category).fg(Color::Gray),
    ));
    lines.push(Line::from(course.description.clone().fg(Color::DarkGray)));
    lines.push(Line::from(
        format!(
            "{} · {} students · {:.1} rating",
            course.duration, course.students, course.rating
        )
        .fg(Color::DarkGray),
    ));

    match course.progress {
        Some(percent) => lines.push(Line::from(vec![
            Span::styled(
                meter(u32::from(percent), PROGRESS_BAR_WIDTH),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(format!(" {}%", percent), Style::default().fg(Color::Cyan)),
        ])),
        None => lines.push(Line::from(Span::styled(
            "Not enrolled",
            Style::default().fg(Color::DarkGray),
        ))),
    }
    lines.push(Line::from(""));
}

fn render_side_panel(frame: &mut Frame, area: Rect, app: &App) {
    let deadline_height = (app.data().deadlines.len() * 3 + 2) as u16;
    let chunks =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(deadline_height)]).split(area);

    render_activity(frame, chunks[0], app);
    render_deadlines(frame, chunks[1], &app.data().deadlines);
}

fn render_activity(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    for item in &app.data().activity {
        lines.push(Line::from(vec![
            Span::styled(" • ", Style::default().fg(Color::Cyan)),
            Span::styled(item.text.clone(), Style::default().fg(Color::Gray)),
        ]));
        lines.push(Line::from(format!("   {}", item.when).fg(Color::DarkGray)));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1))
            .title(Span::styled(
                "RECENT ACTIVITY",
                Style::default().fg(Color::Cyan),
            )),
    );
    frame.render_widget(widget, area);
}

fn render_deadlines(frame: &mut Frame, area: Rect, deadlines: &[Deadline]) {
    let mut lines: Vec<Line> = Vec::new();
    for deadline in deadlines {
        lines.push(Line::from(vec![
            Span::styled(deadline.title.clone(), Style::default().fg(Color::White)),
            Span::styled(
                format!("  [{}]", deadline.urgency.label()),
                Style::default().fg(urgency_color(deadline.urgency)),
            ),
        ]));
        lines.push(Line::from(format!("  {}", deadline.course).fg(Color::DarkGray)));
        lines.push(Line::from(
            Span::styled(
                format!("  {}", deadline.due),
                Style::default().fg(urgency_color(deadline.urgency)),
            ),
        ));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1))
            .title(Span::styled(
                "UPCOMING DEADLINES",
                Style::default().fg(Color::Cyan),
            )),
    );
    frame.render_widget(widget, area);
}

fn urgency_color(urgency: Urgency) -> Color {
    match urgency {
        Urgency::DueSoon => Color::Red,
        Urgency::ThisWeek => Color::Yellow,
        Urgency::Optional => Color::DarkGray,
    }
}
