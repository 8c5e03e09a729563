//! Play field and HUD.
//!
//! Uses half-block pixel rendering: each grid cell maps to a colored pixel
//! and pairs of vertical pixels are packed into one terminal row using the
//! `▀` (upper half block) character with fg=top, bg=bottom colors.

use super::game_common::{
    create_game_layout, render_info_panel_frame, render_modal, render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};
use serpent::{GameRunState, GameSession};

// ── Border characters ────────────────────────────────────────────────
const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀
const HEART_FULL: char = '\u{2665}'; // ♥
const HEART_EMPTY: char = '\u{2661}'; // ♡

// ── Colors ───────────────────────────────────────────────────────────
const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const BODY_COLOR: Color = Color::Rgb(40, 170, 40);
const EMPTY_BG: Color = Color::Rgb(12, 12, 18);
const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);

/// Render the game screen, with the pause or game-over modal on top.
pub fn render_game_scene(frame: &mut Frame, area: Rect, session: &GameSession) {
    let layout = create_game_layout(frame, area, 16);

    render_play_field(frame, layout.content, session);
    render_status_bar_content(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session);

    match session.state() {
        GameRunState::Paused => render_modal(
            frame,
            layout.content,
            "PAUSED",
            Color::Yellow,
            vec![Line::from(format!("Score: {}", session.score()))],
            "[Space] Resume  [M] Menu",
        ),
        GameRunState::GameOver => render_game_over(frame, layout.content, session),
        GameRunState::Playing | GameRunState::Stopped => {}
    }
}

/// Render the play field using half-block pixel rendering.
fn render_play_field(frame: &mut Frame, area: Rect, session: &GameSession) {
    if area.height < 3 || area.width < 5 {
        return;
    }

    let grid_n = session.grid().cell_count() as usize;

    // ── Build color grid (game coordinates) ─────────────────────
    let mut pixels: Vec<Vec<Option<Color>>> = vec![vec![None; grid_n]; grid_n];

    // Food pulses with the tick counter.
    let food = session.food();
    if session.grid().contains(food) {
        let pulse = ((session.tick_count() % 20) as f64 / 20.0 * std::f64::consts::PI * 2.0).sin();
        let g = (80.0 + pulse * 30.0) as u8;
        let b = (40.0 + pulse * 20.0) as u8;
        pixels[food.y as usize][food.x as usize] = Some(Color::Rgb(255, g, b));
    }

    for (i, seg) in session.snake().body().iter().enumerate().rev() {
        if session.grid().contains(*seg) {
            pixels[seg.y as usize][seg.x as usize] =
                Some(if i == 0 { HEAD_COLOR } else { BODY_COLOR });
        }
    }

    // ── Layout dimensions ───────────────────────────────────────
    let content_rows = grid_n.div_ceil(2);
    let render_w = ((grid_n + 2) as u16).min(area.width);
    let inner_w = render_w as usize - 2;

    let x_off = area.x + (area.width.saturating_sub(render_w)) / 2;
    let y_off = area.y;

    let border = Style::default().fg(BORDER_COLOR);
    let horizontal = |n: usize| -> String { std::iter::repeat(BORDER_H).take(n).collect() };

    // ── Top border ──────────────────────────────────────────────
    let top = format!("{}{}{}", BORDER_TL, horizontal(inner_w), BORDER_TR);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(top, border))),
        Rect::new(x_off, y_off, render_w, 1),
    );

    // ── Game content rows ───────────────────────────────────────
    let empty_row: Vec<Option<Color>> = vec![None; grid_n];
    for term_row in 0..content_rows {
        let top_gy = term_row * 2;
        let bot_gy = term_row * 2 + 1;
        let top_row = pixels.get(top_gy).unwrap_or(&empty_row);
        let bot_row = pixels.get(bot_gy).unwrap_or(&empty_row);

        let mut spans: Vec<Span> = vec![Span::styled(BORDER_V.to_string(), border)];

        // Batch consecutive cells with the same colors into one span.
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();

        for (&top_c, &bot_c) in top_row.iter().zip(bot_row.iter()).take(inner_w) {
            let fg = top_c.unwrap_or(EMPTY_BG);
            let bg = bot_c.unwrap_or(EMPTY_BG);

            if (fg != cur_fg || bg != cur_bg) && !cur_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut cur_text),
                    Style::default().fg(cur_fg).bg(cur_bg),
                ));
            }
            cur_fg = fg;
            cur_bg = bg;
            cur_text.push(HALF_TOP);
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(
                cur_text,
                Style::default().fg(cur_fg).bg(cur_bg),
            ));
        }
        spans.push(Span::styled(BORDER_V.to_string(), border));

        let row_y = y_off + 1 + term_row as u16;
        if row_y < area.y + area.height {
            frame.render_widget(
                Paragraph::new(Line::from(spans)),
                Rect::new(x_off, row_y, render_w, 1),
            );
        }
    }

    // ── Bottom border ───────────────────────────────────────────
    let bot_y = y_off + 1 + content_rows as u16;
    if bot_y < area.y + area.height {
        let bottom = format!("{}{}{}", BORDER_BL, horizontal(inner_w), BORDER_BR);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(bottom, border))),
            Rect::new(x_off, bot_y, render_w, 1),
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &GameSession) {
    match session.state() {
        GameRunState::Paused => render_status_bar(
            frame,
            area,
            "Paused",
            Color::Yellow,
            &[("[Space]", "Resume"), ("[M]", "Menu")],
        ),
        GameRunState::GameOver => render_status_bar(
            frame,
            area,
            "Game over",
            Color::Red,
            &[("[R]", "Restart"), ("[V]", "Records"), ("[M]", "Menu")],
        ),
        _ if session.energy_is_low() => render_status_bar(
            frame,
            area,
            "Energy low - eat!",
            Color::Red,
            &[("[Arrows]", "Move"), ("[Space]", "Pause"), ("[M]", "Menu")],
        ),
        _ => render_status_bar(
            frame,
            area,
            "Slither!",
            Color::Green,
            &[("[Arrows]", "Move"), ("[Space]", "Pause"), ("[M]", "Menu")],
        ),
    }
}

/// Lives as filled and empty hearts.
pub fn hearts(lives: u32, initial: u32) -> String {
    (0..initial.max(lives))
        .map(|i| if i < lives { HEART_FULL } else { HEART_EMPTY })
        .collect()
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &GameSession) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Level: ", label),
            Span::styled(session.level().name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                session.score().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Lives: ", label),
            Span::styled(
                hearts(session.lives(), session.config().initial_lives),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(vec![
            Span::styled("Speed: ", label),
            Span::styled(format!("{:.1}x", session.speed_multiplier()), value),
        ]),
        Line::from(vec![
            Span::styled("Tick: ", label),
            Span::styled(format!("{}ms", session.interval_ms()), value),
        ]),
        Line::from(""),
        Line::from(Span::styled("Energy:", label)),
    ];

    let text_height = (lines.len() as u16).min(inner.height);
    frame.render_widget(
        Paragraph::new(lines),
        Rect {
            height: text_height,
            ..inner
        },
    );

    let gauge_y = inner.y + text_height;
    if gauge_y < inner.y + inner.height {
        let color = if session.energy_is_low() {
            Color::Red
        } else {
            Color::Green
        };
        let energy = session.energy().clamp(0.0, 100.0);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color).bg(Color::Rgb(30, 30, 30)))
            .ratio(energy / 100.0)
            .label(format!("{:.0}%", energy));
        frame.render_widget(gauge, Rect::new(inner.x, gauge_y, inner.width, 1));
    }
}

fn render_game_over(frame: &mut Frame, area: Rect, session: &GameSession) {
    let Some(stats) = session.last_stats() else {
        return;
    };

    let mut body = vec![
        Line::from(format!("Score: {}", stats.score)),
        Line::from(format!("Level: {}", stats.level.name())),
        Line::from(format!("Speed: {:.1}x", stats.speed_multiplier)),
    ];
    if let Some(rank) = stats.new_record {
        body.push(Line::from(""));
        body.push(Line::from(Span::styled(
            format!("New record! Rank #{}", rank),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }

    render_modal(
        frame,
        area,
        "GAME OVER",
        Color::Red,
        body,
        "[R] Restart  [V] Records  [M] Menu",
    );
}
