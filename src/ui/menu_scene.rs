//! Title screen with level selection.

use super::game_common::{centered_rect, render_status_bar};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use serpent::{Leaderboard, Level};

const TITLE_ART: [&str; 5] = [
    " ___  ___ _ __ _ __   ___ _ __ | |_ ",
    "/ __|/ _ \\ '__| '_ \\ / _ \\ '_ \\| __|",
    "\\__ \\  __/ |  | |_) |  __/ | | | |_ ",
    "|___/\\___|_|  | .__/ \\___|_| |_|\\__|",
    "              |_|                   ",
];

/// `leaderboard` is the renderer's cached copy; the menu never reads the store.
pub fn render_menu_scene(frame: &mut Frame, area: Rect, leaderboard: &Leaderboard) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Serpent ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightGreen));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = TITLE_ART
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Green))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Choose a level",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for (i, level) in Level::ALL.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::White)),
            Span::styled(
                format!("{:<8}", level.name()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!(
                    "{:>4}ms  {} pt{}",
                    level.initial_interval_ms(),
                    level.points_per_food(),
                    if level.points_per_food() == 1 { "" } else { "s" }
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines.push(Line::from(""));
    let best = match leaderboard.entries().first() {
        Some(top) => format!("Best: {} by {}", top.score, top.name),
        None => "No records yet".to_string(),
    };
    lines.push(Line::from(Span::styled(
        best,
        Style::default().fg(Color::Yellow),
    )));

    let height = (lines.len() as u16).min(inner.height.saturating_sub(2));
    let body = centered_rect(
        Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        },
        inner.width,
        height,
    );
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);

    render_status_bar(
        frame,
        Rect {
            y: inner.y + inner.height.saturating_sub(2),
            height: 2.min(inner.height),
            ..inner
        },
        "Eat to keep your energy up",
        Color::Green,
        &[("[1-3]", "Play"), ("[V]", "Records"), ("[Q]", "Quit")],
    );
}
