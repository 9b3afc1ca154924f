use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Quiz;
use crate::session::{Score, SessionState};
use crate::ui::meter;

const QUESTION_PREVIEW_LENGTH: usize = 55;
const PROGRESS_BAR_WIDTH: usize = 30;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    match app.session().state() {
        SessionState::NotStarted => render_start_card(frame, area, app.session().quiz()),
        SessionState::InProgress => render_question(frame, area, app),
        SessionState::Completed => render_results(frame, area, app),
    }
}

fn render_start_card(frame: &mut Frame, area: Rect, quiz: &Quiz) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            quiz.title.clone(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(quiz.description.clone().fg(Color::Gray)),
        Line::from(""),
        Line::from(
            format!(
                "{} Questions · {} min · {} points",
                quiz.question_count(),
                quiz.time_limit,
                quiz.total_points
            )
            .fg(Color::DarkGray),
        ),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(2)),
        );
    frame.render_widget(widget, chunks[1]);
}

fn render_question(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let number = session.current_index().unwrap_or(0) + 1;
    let total = session.quiz().question_count();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Question {} of {}", number, total),
            Style::default().fg(Color::White).bold(),
        ),
        Span::styled(
            format!("   {}", session.remaining_clock().unwrap_or_default()),
            Style::default().fg(Color::Yellow),
        ),
    ]));
    frame.render_widget(header, chunks[0]);

    let percent = session.progress_percent().unwrap_or(0);
    let progress = Paragraph::new(format!("{}%", percent))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(progress, chunks[0]);

    let bar = Paragraph::new(Span::styled(
        meter(percent, PROGRESS_BAR_WIDTH),
        Style::default().fg(Color::Cyan),
    ));
    frame.render_widget(bar, chunks[1]);

    if let Some(question) = session.current_question() {
        let prompt = Paragraph::new(question.prompt.clone())
            .wrap(Wrap { trim: true })
            .fg(Color::White)
            .bold();
        frame.render_widget(prompt, chunks[2]);

        render_options(frame, chunks[3], app);
    }

    let controls =
        Paragraph::new("j/k move  ·  enter answer  ·  n/p next/previous  ·  q quit")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[4]);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Some(question) = session.current_question() else {
        return;
    };
    let recorded = session.current_answer();

    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);
    for (index, option) in question.options.iter().enumerate() {
        let is_cursor = index == app.option_cursor();
        let is_recorded = recorded == Some(index);

        let style = if is_cursor {
            Style::default().fg(Color::Cyan).bold()
        } else if is_recorded {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_cursor { ">" } else { " " };
        let radio = if is_recorded { "(x)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", radio), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn option_label(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Ok(score) = session.score() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], &score, session.quiz().total_points);
    render_breakdown(frame, chunks[1], app);

    let controls = Paragraph::new("j/k scroll  ·  r retake  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[2]);
}

fn render_score_summary(frame: &mut Frame, area: Rect, score: &Score, total_points: u32) {
    let (headline, subtitle, headline_color) = if score.passed() {
        (
            "Congratulations!",
            "You passed the quiz!",
            Color::Green,
        )
    } else {
        (
            "Keep Learning!",
            "You can retake this quiz to improve your score.",
            Color::Red,
        )
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(headline_color).bold(),
        )),
        Line::from(subtitle.fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{}%  ·  {}/{} correct  ·  {}/{} points",
                score.percentage, score.correct, score.total, score.points, total_points
            ),
            Style::default().fg(grade_color(score.percentage)).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn grade_color(percentage: u32) -> Color {
    match percentage {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_breakdown(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let mut lines: Vec<Line> = Vec::new();

    for (index, question) in session.quiz().questions.iter().enumerate() {
        let answer = session.answer(index);
        let is_correct = answer == Some(question.correct_answer);
        let (symbol, color) = if is_correct {
            ("+", Color::Green)
        } else {
            ("-", Color::Red)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{:2}. ", index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                truncate_prompt(&question.prompt),
                Style::default().fg(Color::Gray),
            ),
        ]));

        if !is_correct {
            lines.push(Line::from(Span::styled(
                format!("        {}", question.explanation),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((app.results_scroll() as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_prompt(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
