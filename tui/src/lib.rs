//! TUI rendering for Paws using ratatui.

mod card;
mod input;
mod summary;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use summary::summary_lines;
pub use theme::{Glyphs, Palette, blend, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use paws_engine::{App, CellRect, GesturePhase, HitTarget, Phase};

use self::card::{CARD_WIDTH, beneath_rect, cell_shift, displaced, draw_card};
use self::theme::CAT_ART;

const HEADER_HEIGHT: u16 = 2;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 9;
const BUTTON_GAP: u16 = 6;

/// Main draw function. Rewrites the app's hit regions for the next event.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    app.hit_regions_mut().clear();
    let area = frame.area();
    match app.phase() {
        Phase::Loading => draw_loading(frame, area, &palette, &glyphs),
        Phase::Swiping => draw_swiping(frame, app, area, &palette, &glyphs),
        Phase::Summary => summary::draw_summary(frame, app, area, &palette, &glyphs),
    }
}

fn draw_loading(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut lines: Vec<Line> = CAT_ART
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(palette.primary))))
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("Loading adorable kitties... {}", glyphs.cat),
        styles::muted(palette),
    )));

    let height = (lines.len() as u16).min(area.height);
    let rect = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: area.width,
        height,
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

fn draw_swiping(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Title
            Constraint::Min(3),                // Deck
            Constraint::Length(BUTTON_HEIGHT), // Like / dislike
            Constraint::Length(1),             // Progress
        ])
        .split(area);

    draw_header(frame, chunks[0], palette, glyphs);
    let mut regions = draw_deck(frame, app, chunks[1], palette, glyphs);

    let buttons_enabled = matches!(
        app.top_phase(),
        Some(GesturePhase::Idle | GesturePhase::Dragging)
    );
    regions.extend(draw_buttons(
        frame,
        chunks[2],
        buttons_enabled,
        palette,
        glyphs,
    ));

    let state = app.state();
    let total = state.len();
    let position = (state.current_index() + 1).min(total);
    draw_footer(
        frame,
        chunks[3],
        position,
        total,
        state.liked_items().len(),
        palette,
    );

    let hit = app.hit_regions_mut();
    for (target, rect) in regions {
        hit.push(
            target,
            CellRect::new(rect.x, rect.y, rect.width, rect.height),
        );
    }
}

/// Beneath card first, then the top card displaced by its gesture offset.
fn draw_deck(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<(HitTarget, Rect)> {
    let cards = app.cards();
    if cards.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("No more cats! {}", glyphs.cat),
                styles::muted(palette),
            )))
            .alignment(Alignment::Center),
            centered_line(area),
        );
        return Vec::new();
    }

    let scale = app.pointer_scale();
    let resting = card::resting_rect(area);
    let bounds = frame.area();
    let mut regions = Vec::with_capacity(cards.len());
    for (index, view) in cards.iter().enumerate() {
        let is_top = index + 1 == cards.len();
        let (target, origin, size) = if is_top {
            let (dx, dy) = cell_shift(view, scale);
            (
                HitTarget::TopCard,
                displaced(resting, dx, dy),
                (resting.width, resting.height),
            )
        } else {
            let rect = beneath_rect(resting, area);
            (
                HitTarget::BeneathCard,
                (i32::from(rect.x), i32::from(rect.y)),
                (rect.width, rect.height),
            )
        };

        if let Some(visible) =
            draw_card(frame.buffer_mut(), origin, size, view, bounds, palette, glyphs)
        {
            regions.push((target, visible));
        }
    }
    regions
}

fn draw_header(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{} Paws & Preferences {}", glyphs.cat, glyphs.sparkle),
            styles::title(palette),
        )),
        Line::from(Span::styled(
            "Find your favorite kitty",
            styles::muted(palette),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_buttons(
    frame: &mut Frame,
    area: Rect,
    enabled: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<(HitTarget, Rect)> {
    let total = BUTTON_WIDTH * 2 + BUTTON_GAP;
    if area.width < total || area.height == 0 {
        return Vec::new();
    }
    let left = area.x + (area.width - total) / 2;
    let dislike = Rect::new(left, area.y, BUTTON_WIDTH, area.height);
    let like = Rect::new(left + BUTTON_WIDTH + BUTTON_GAP, area.y, BUTTON_WIDTH, area.height);

    for (rect, glyph, color) in [
        (dislike, glyphs.cross, palette.nope),
        (like, glyphs.heart, palette.like),
    ] {
        let style = styles::button(palette, color, enabled);
        frame.render_widget(
            Paragraph::new(Line::from(glyph))
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(if enabled {
                            color
                        } else {
                            palette.bg_border
                        })),
                ),
            rect,
        );
    }

    if enabled {
        vec![
            (HitTarget::DislikeButton, dislike),
            (HitTarget::LikeButton, like),
        ]
    } else {
        Vec::new()
    }
}

fn draw_footer(
    frame: &mut Frame,
    area: Rect,
    position: usize,
    total: usize,
    liked: usize,
    palette: &Palette,
) {
    let width = area.width.min(CARD_WIDTH);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        width,
        ..area
    };
    frame.render_widget(
        Paragraph::new(Line::from(format!("{position} / {total}")))
            .style(styles::muted(palette))
            .alignment(Alignment::Left),
        rect,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{liked} liked"),
            Style::default().fg(palette.like),
        )))
        .alignment(Alignment::Right),
        rect,
    );
}

fn centered_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height.saturating_sub(1) / 2,
        height: area.height.min(1),
        ..area
    }
}

