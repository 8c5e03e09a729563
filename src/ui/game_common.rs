//! Frame, HUD column, status lines and modals shared by the screens.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the HUD column beside the play field.
const HUD_WIDTH: u16 = 24;

pub struct GameLayout {
    /// Play field.
    pub content: Rect,
    /// Hint and key lines under the play field.
    pub status_bar: Rect,
    /// HUD column: level, score, lives, speed, energy.
    pub info_panel: Rect,
}

/// Draw the outer border and split the inside into play field, status
/// lines and HUD column. The play field keeps at least `field_rows` rows.
pub fn create_game_layout(frame: &mut Frame, area: Rect, field_rows: u16) -> GameLayout {
    frame.render_widget(Clear, area);

    let border = Block::default()
        .title(" Serpent ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightGreen));
    let inner = border.inner(area);
    frame.render_widget(border, area);

    let [left, hud] = split(inner, Direction::Horizontal, [
        Constraint::Min(20),
        Constraint::Length(HUD_WIDTH),
    ]);
    let [field, status] = split(left, Direction::Vertical, [
        Constraint::Min(field_rows),
        Constraint::Length(2),
    ]);

    GameLayout {
        content: field,
        status_bar: status,
        info_panel: hud,
    }
}

fn split(area: Rect, direction: Direction, constraints: [Constraint; 2]) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);
    [chunks[0], chunks[1]]
}

/// One status line plus one line of `(key, action)` hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status: &str,
    color: Color,
    keys: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }
    frame.render_widget(
        Paragraph::new(status)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );

    if area.height < 2 || keys.is_empty() {
        return;
    }
    let hint = Style::default().fg(Color::DarkGray);
    let spans: Vec<Span> = keys
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let gap = if i == 0 { "" } else { "  " };
            [
                Span::raw(gap),
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {}", action), hint),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Border for the HUD column; returns the area inside it.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Stats ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A rectangle of at most `width` x `height`, centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render a centered modal with a bold colored title, body lines and a
/// controls hint at the bottom. The area behind the modal stays visible.
pub fn render_modal(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    body: Vec<Line>,
    hint: &str,
) {
    let height = body.len() as u16 + 6;
    let width = body
        .iter()
        .map(|l| l.width() as u16)
        .chain([title.len() as u16, hint.len() as u16])
        .max()
        .unwrap_or(0)
        + 6;
    let modal = centered_rect(area, width, height);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let mut lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(body);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(Color::DarkGray),
    )));

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}
