//! Card rendering.
//!
//! A card is drawn at full size into a scratch buffer and then copied into
//! the frame at its displaced position, so a card sliding off screen keeps its
//! layout instead of being squeezed.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use paws_engine::{CardView, PointerScale};

use crate::theme::{CAT_ART, Glyphs, Palette, styles};

pub(crate) const CARD_WIDTH: u16 = 36;
pub(crate) const CARD_HEIGHT: u16 = 13;

/// Rotation below this many degrees shows no tilt marker.
const TILT_EPSILON: f32 = 0.5;

/// Resting rectangle for the topmost card inside the deck area.
pub(crate) fn resting_rect(deck: Rect) -> Rect {
    let width = deck.width.min(CARD_WIDTH);
    let height = deck.height.min(CARD_HEIGHT);
    Rect {
        x: deck.x + deck.width.saturating_sub(width) / 2,
        y: deck.y + deck.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// The card underneath peeks out one row lower and slightly narrower.
pub(crate) fn beneath_rect(resting: Rect, bounds: Rect) -> Rect {
    let shifted = Rect {
        x: resting.x.saturating_add(1),
        y: resting.y.saturating_add(1),
        width: resting.width.saturating_sub(2),
        height: resting.height,
    };
    shifted.intersection(bounds)
}

/// `base` moved by a whole number of cells. Coordinates may leave `bounds`;
/// only the visible part is ever written.
pub(crate) fn displaced(base: Rect, dx: i32, dy: i32) -> (i32, i32) {
    (i32::from(base.x) + dx, i32::from(base.y) + dy)
}

/// Visible part of a `width`x`height` rectangle at `(x, y)`.
pub(crate) fn visible_part(x: i32, y: i32, width: u16, height: u16, bounds: Rect) -> Option<Rect> {
    let left = x.max(i32::from(bounds.x));
    let top = y.max(i32::from(bounds.y));
    let right = (x + i32::from(width)).min(i32::from(bounds.right()));
    let bottom = (y + i32::from(height)).min(i32::from(bounds.bottom()));
    if left >= right || top >= bottom {
        return None;
    }
    Some(Rect {
        x: left as u16,
        y: top as u16,
        width: (right - left) as u16,
        height: (bottom - top) as u16,
    })
}

/// Draw `card` with its top-left corner at `(x, y)`, clipped to `bounds`.
/// Returns the visible rectangle, if any.
pub(crate) fn draw_card(
    buf: &mut Buffer,
    (x, y): (i32, i32),
    size: (u16, u16),
    card: &CardView<'_>,
    bounds: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Option<Rect> {
    let (width, height) = size;
    let visible = visible_part(x, y, width, height, bounds)?;

    let mut scratch = Buffer::empty(Rect::new(0, 0, width, height));
    render_card(&mut scratch, card, palette, glyphs);

    for row in visible.top()..visible.bottom() {
        for col in visible.left()..visible.right() {
            let sx = (i32::from(col) - x) as u16;
            let sy = (i32::from(row) - y) as u16;
            if let (Some(src), Some(dst)) = (
                scratch.cell(Position::new(sx, sy)),
                buf.cell_mut(Position::new(col, row)),
            ) {
                *dst = src.clone();
            }
        }
    }
    Some(visible)
}

/// Shift for the topmost card, in cells.
pub(crate) fn cell_shift(card: &CardView<'_>, scale: PointerScale) -> (i32, i32) {
    let offset = card.gesture.offset;
    (scale.columns(offset.x), scale.rows(offset.y))
}

fn render_card(buf: &mut Buffer, card: &CardView<'_>, palette: &Palette, glyphs: &Glyphs) {
    let area = buf.area;
    let border = if card.gesture.dragging {
        palette.accent
    } else if card.interactive {
        palette.primary
    } else {
        palette.bg_border
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(palette.bg_panel))
        .title(Line::from(Span::styled(
            format!(" {} ", card.item.id()),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )));
    if let Some(marker) = tilt_marker(card.gesture.rotation, glyphs) {
        block = block.title(
            Line::from(Span::styled(marker, Style::default().fg(palette.highlight)))
                .alignment(Alignment::Right),
        );
    }

    let inner = block.inner(area);
    block.render(area, buf);

    let art_style = if card.interactive {
        Style::default().fg(palette.text_primary)
    } else {
        styles::muted(palette)
    };

    let mut lines = vec![stamp_line(card, inner.width, palette), Line::default()];
    lines.extend(
        CAT_ART
            .iter()
            .map(|row| Line::from(Span::styled(*row, art_style)).alignment(Alignment::Center)),
    );
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            truncate_to_width(card.item.image_ref(), inner.width as usize, glyphs.ellipsis),
            styles::muted(palette),
        ))
        .alignment(Alignment::Center),
    );

    Paragraph::new(lines).render(inner, buf);
}

/// `LIKE` on the left, `NOPE` on the right, each as strong as its intensity.
fn stamp_line(card: &CardView<'_>, width: u16, palette: &Palette) -> Line<'static> {
    const LIKE: &str = " LIKE ";
    const NOPE: &str = " NOPE ";

    let like = card.gesture.like_intensity;
    let nope = card.gesture.dislike_intensity;
    let gap = (width as usize).saturating_sub(LIKE.len() + NOPE.len());

    let like_span = if like > 0.0 {
        Span::styled(LIKE, styles::stamp(palette, palette.like, like))
    } else {
        Span::raw(" ".repeat(LIKE.len()))
    };
    let nope_span = if nope > 0.0 {
        Span::styled(NOPE, styles::stamp(palette, palette.nope, nope))
    } else {
        Span::raw(" ".repeat(NOPE.len()))
    };
    Line::from(vec![like_span, Span::raw(" ".repeat(gap)), nope_span])
}

fn tilt_marker(rotation: f32, glyphs: &Glyphs) -> Option<String> {
    if !rotation.is_finite() || rotation.abs() < TILT_EPSILON {
        return None;
    }
    let glyph = if rotation > 0.0 {
        glyphs.tilt_right
    } else {
        glyphs.tilt_left
    };
    Some(format!(" {glyph} {:.0}° ", rotation.abs()))
}

/// Cut `text` to `max` display columns, ending in `ellipsis` when shortened.
pub(crate) fn truncate_to_width(text: &str, max: usize, ellipsis: &str) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let budget = max.saturating_sub(ellipsis.width());
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if ellipsis.width() <= max {
        out.push_str(ellipsis);
    }
    out
}
