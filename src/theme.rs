//! Tone-to-color mapping for both render targets: hex palettes for the
//! SVG output and ANSI paint for the terminal block.

use crate::models::Tone;

/// Hex colors backing one SVG color scheme.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub bg: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent1: &'static str,
    pub accent2: &'static str,
    pub accent3: &'static str,
    pub accent4: &'static str,
}

pub const DARK: Palette = Palette {
    bg: "#0d1117",
    text: "#39c5cf",
    muted: "#6e7681",
    accent1: "#bc8cff",
    accent2: "#3fb950",
    accent3: "#d29922",
    accent4: "#f85149",
};

pub const LIGHT: Palette = Palette {
    bg: "#ffffff",
    text: "#0969da",
    muted: "#656d76",
    accent1: "#8250df",
    accent2: "#1a7f37",
    accent3: "#9a6700",
    accent4: "#cf222e",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Dark,
    Light,
}

impl ColorMode {
    pub fn palette(self) -> Palette {
        match self {
            ColorMode::Dark => DARK,
            ColorMode::Light => LIGHT,
        }
    }

    /// Output file stem, e.g. `dark_mode.svg`.
    pub fn file_stem(self) -> &'static str {
        match self {
            ColorMode::Dark => "dark_mode",
            ColorMode::Light => "light_mode",
        }
    }
}

impl Palette {
    pub fn tone_color(&self, tone: Tone) -> &'static str {
        match tone {
            Tone::Text => self.text,
            Tone::Muted => self.muted,
            Tone::Accent1 => self.accent1,
            Tone::Accent2 => self.accent2,
            Tone::Accent3 => self.accent3,
            Tone::Accent4 => self.accent4,
        }
    }
}

/// Paint `text` in the ANSI color nearest the tone, when enabled.
pub fn tint(text: &str, tone: Tone, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    paint(text, tone)
}

/// Stat values get plain white instead of a tone color.
pub fn tint_value(text: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    paint_value(text)
}

#[cfg(feature = "colors")]
fn paint(text: &str, tone: Tone) -> String {
    use owo_colors::OwoColorize;
    match tone {
        Tone::Text => text.cyan().to_string(),
        Tone::Muted => text.bright_black().to_string(),
        Tone::Accent1 => text.bright_magenta().to_string(),
        Tone::Accent2 => text.green().to_string(),
        Tone::Accent3 => text.yellow().to_string(),
        Tone::Accent4 => text.red().to_string(),
    }
}

#[cfg(not(feature = "colors"))]
fn paint(text: &str, _tone: Tone) -> String {
    text.to_string()
}

#[cfg(feature = "colors")]
fn paint_value(text: &str) -> String {
    use owo_colors::OwoColorize;
    text.white().to_string()
}

#[cfg(not(feature = "colors"))]
fn paint_value(text: &str) -> String {
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_per_mode() {
        assert_ne!(ColorMode::Dark.palette().bg, ColorMode::Light.palette().bg);
        assert_eq!(ColorMode::Dark.palette().text, "#39c5cf");
        assert_eq!(ColorMode::Light.palette().text, "#0969da");
    }

    #[test]
    fn every_tone_maps_to_a_hex() {
        let palette = ColorMode::Dark.palette();
        for tone in [
            Tone::Text,
            Tone::Muted,
            Tone::Accent1,
            Tone::Accent2,
            Tone::Accent3,
            Tone::Accent4,
        ] {
            assert!(palette.tone_color(tone).starts_with('#'));
        }
    }

    #[test]
    fn disabled_tint_passes_text_through() {
        assert_eq!(tint("hello", Tone::Accent1, false), "hello");
        assert_eq!(tint_value("42", false), "42");
    }

    #[cfg(feature = "colors")]
    #[test]
    fn enabled_tint_wraps_in_escape_codes() {
        let painted = tint("hello", Tone::Accent3, true);
        assert!(painted.contains("hello"));
        assert!(painted.starts_with('\u{1b}'));
    }
}
