//! Leaderboard overlay, with the clear-records confirmation.

use super::game_common::render_modal;
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};
use serpent::{Leaderboard, Record};

const NAME_WIDTH: usize = 10;

/// Format a record timestamp (unix seconds) as a local date.
pub fn format_date(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// One leaderboard row: rank, name, level, speed and date.
pub fn record_row(rank: usize, record: &Record) -> String {
    let mut name: String = record.name.chars().take(NAME_WIDTH).collect();
    if record.name.chars().count() > NAME_WIDTH {
        name.pop();
        name.push('~');
    }
    format!(
        "{:>2}. {:<width$} {:>5}  {:<6} {:>4.1}x  {}",
        rank,
        name,
        record.score,
        record.level.name(),
        record.speed_multiplier,
        format_date(record.timestamp),
        width = NAME_WIDTH,
    )
}

fn table_lines(leaderboard: &Leaderboard) -> Vec<Line<'static>> {
    if leaderboard.is_empty() {
        return vec![Line::from(Span::styled(
            "No records yet",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "{:>2}  {:<width$} {:>5}  {:<6} {:>5}  {:<10}",
            "#",
            "Name",
            "Score",
            "Level",
            "Speed",
            "Date",
            width = NAME_WIDTH,
        ),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::UNDERLINED),
    ))];
    for (i, record) in leaderboard.entries().iter().enumerate() {
        let style = if i == 0 {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(record_row(i + 1, record), style)));
    }
    lines
}

pub fn render_records(frame: &mut Frame, area: Rect, leaderboard: &Leaderboard) {
    render_modal(
        frame,
        area,
        "RECORDS",
        Color::Yellow,
        table_lines(leaderboard),
        "[C] Clear  [Esc] Close",
    );
}

pub fn render_confirm_clear(frame: &mut Frame, area: Rect, leaderboard: &Leaderboard) {
    let body = vec![
        Line::from(format!("Delete all {} records?", leaderboard.len())),
        Line::from(Span::styled(
            "This cannot be undone.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_modal(
        frame,
        area,
        "CLEAR RECORDS",
        Color::Red,
        body,
        "[Y] Yes  [N] No",
    );
}
