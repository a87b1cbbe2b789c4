//! Results screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use paws_engine::{App, CellRect, HitTarget, Summary};

use crate::card::truncate_to_width;
use crate::theme::{Glyphs, Palette, styles};

const BUTTON_HEIGHT: u16 = 3;

/// Text of the results screen. At most `max_favorites` liked cards are
/// listed; the rest are counted.
#[must_use]
pub fn summary_lines(
    summary: &Summary<'_>,
    palette: &Palette,
    glyphs: &Glyphs,
    max_favorites: usize,
    width: u16,
) -> Vec<Line<'static>> {
    let text = Style::default().fg(palette.text_primary);
    let mut lines = vec![
        Line::from(Span::styled(
            glyphs.heart.to_string(),
            Style::default().fg(palette.primary),
        )),
        Line::from(Span::styled("Your Results", styles::title(palette))),
        Line::default(),
        Line::from(vec![
            Span::styled("You liked ", text),
            Span::styled(
                summary.liked_count().to_string(),
                Style::default()
                    .fg(palette.like)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" out of {} cats", summary.total()), text),
        ]),
        Line::from(vec![
            Span::styled("That's ", text),
            Span::styled(
                format!("{}%", summary.approval_percentage()),
                Style::default()
                    .fg(palette.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" approval rate!", text),
        ]),
        Line::default(),
    ];

    let liked = summary.liked_items();
    if liked.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("No cats won your heart this time! {}", glyphs.sad_cat),
            text,
        )));
        lines.push(Line::from(Span::styled(
            "Maybe try again with a fresh perspective?",
            styles::muted(palette),
        )));
        return lines;
    }

    lines.push(Line::from(Span::styled(
        format!("Your Favorite Kitties {}", glyphs.heart),
        styles::title(palette),
    )));

    let shown = if liked.len() > max_favorites {
        max_favorites.saturating_sub(1)
    } else {
        liked.len()
    };
    for item in &liked[..shown] {
        let label = format!("{} {}  ", glyphs.heart, item.id());
        let room = (width as usize).saturating_sub(label.width());
        lines.push(Line::from(vec![
            Span::styled(label, Style::default().fg(palette.primary)),
            Span::styled(
                truncate_to_width(item.image_ref(), room, glyphs.ellipsis),
                styles::muted(palette),
            ),
        ]));
    }
    if shown < liked.len() {
        lines.push(Line::from(Span::styled(
            format!("{} and {} more", glyphs.ellipsis, liked.len() - shown),
            styles::muted(palette),
        )));
    }
    lines
}

pub(crate) fn draw_summary(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),                // Results
            Constraint::Length(BUTTON_HEIGHT), // Start Over
        ])
        .split(area);

    // Seven fixed lines precede the list.
    let max_favorites = (chunks[0].height as usize).saturating_sub(7).max(1);
    let lines = summary_lines(
        &app.summary(),
        palette,
        glyphs,
        max_favorites,
        chunks[0].width,
    );
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[0],
    );

    let label = format!(" {} Start Over ", glyphs.restart);
    let width = (label.width() as u16 + 2).min(chunks[1].width);
    let button = Rect {
        x: chunks[1].x + chunks[1].width.saturating_sub(width) / 2,
        y: chunks[1].y,
        width,
        height: chunks[1].height,
    };
    frame.render_widget(
        Paragraph::new(Line::from(label))
            .alignment(Alignment::Center)
            .style(styles::button(palette, palette.primary, true))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.primary)),
            ),
        button,
    );
    app.hit_regions_mut().push(
        HitTarget::RestartButton,
        CellRect::new(button.x, button.y, button.width, button.height),
    );
}
