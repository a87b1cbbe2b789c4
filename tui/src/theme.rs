//! Color theme and glyphs for Paws.
//!
//! Uses Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use paws_types::ui::UiOptions;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Brand ===
    pub const PRIMARY: Color = Color::Rgb(210, 126, 153); // sakuraPink
    pub const ACCENT: Color = Color::Rgb(149, 127, 184); // oniViolet

    // === Decisions ===
    pub const LIKE: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const NOPE: Color = Color::Rgb(255, 93, 98); // peachRed
    pub const HIGHLIGHT: Color = Color::Rgb(230, 195, 132); // carpYellow
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub like: Color,
    pub nope: Color,
    pub highlight: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::ACCENT,
            like: colors::LIKE,
            nope: colors::NOPE,
            highlight: colors::HIGHLIGHT,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_muted: Color::Gray,
            primary: Color::White,
            accent: Color::Cyan,
            like: Color::Green,
            nope: Color::Red,
            highlight: Color::Yellow,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub cat: &'static str,
    pub sad_cat: &'static str,
    pub sparkle: &'static str,
    pub heart: &'static str,
    pub cross: &'static str,
    pub restart: &'static str,
    pub tilt_left: &'static str,
    pub tilt_right: &'static str,
    pub ellipsis: &'static str,
}

/// Drawn in the middle of every card. Plain ASCII so it survives any font.
pub const CAT_ART: [&str; 3] = [r" /\_/\ ", r"( o.o )", r" > ^ < "];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            cat: "=^.^=",
            sad_cat: "=;_;=",
            sparkle: "*",
            heart: "<3",
            cross: "X",
            restart: "@",
            tilt_left: "\\",
            tilt_right: "/",
            ellipsis: "...",
        }
    } else {
        Glyphs {
            cat: "🐱",
            sad_cat: "😿",
            sparkle: "✨",
            heart: "♥",
            cross: "✗",
            restart: "↺",
            tilt_left: "↶",
            tilt_right: "↷",
            ellipsis: "…",
        }
    }
}

/// Linear blend between two RGB colors. Named colors cannot be mixed, so
/// they switch over at the midpoint.
#[must_use]
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mix = |a: u8, b: u8| {
                let value = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
                value.round().clamp(0.0, 255.0) as u8
            };
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ if t >= 0.5 => to,
        _ => from,
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Color, Modifier, Palette, Style, blend};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn button(palette: &Palette, color: Color, enabled: bool) -> Style {
        let fg = if enabled { color } else { palette.text_muted };
        Style::default()
            .fg(fg)
            .bg(palette.bg_panel)
            .add_modifier(Modifier::BOLD)
    }

    /// LIKE/NOPE stamp, fading in with the drag.
    #[must_use]
    pub fn stamp(palette: &Palette, color: Color, intensity: f32) -> Style {
        Style::default()
            .fg(blend(palette.bg_panel, color, intensity))
            .bg(palette.bg_panel)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use paws_types::ui::UiOptions;
    use ratatui::style::Color;

    use super::{blend, glyphs};

    #[test]
    fn blend_hits_endpoints() {
        let from = Color::Rgb(0, 0, 0);
        let to = Color::Rgb(200, 100, 50);
        assert_eq!(blend(from, to, 0.0), from);
        assert_eq!(blend(from, to, 1.0), to);
        assert_eq!(blend(from, to, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn blend_clamps_and_ignores_nan() {
        let from = Color::Rgb(10, 10, 10);
        let to = Color::Rgb(20, 20, 20);
        assert_eq!(blend(from, to, 3.0), to);
        assert_eq!(blend(from, to, f32::NAN), from);
    }

    #[test]
    fn blend_named_colors_switch_at_midpoint() {
        assert_eq!(blend(Color::Black, Color::Green, 0.49), Color::Black);
        assert_eq!(blend(Color::Black, Color::Green, 0.5), Color::Green);
    }

    #[test]
    fn ascii_glyphs_are_ascii() {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        let g = glyphs(options);
        for glyph in [
            g.cat,
            g.sad_cat,
            g.sparkle,
            g.heart,
            g.cross,
            g.restart,
            g.tilt_left,
            g.tilt_right,
            g.ellipsis,
        ] {
            assert!(glyph.is_ascii(), "{glyph:?}");
        }
    }
}
