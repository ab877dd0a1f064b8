//! SVG renderer. Emits one centered `<text>` element per non-blank row on
//! a rounded dark or light canvas, with the canvas height recomputed from
//! the row list so layout edits never clip the bottom margin.

use crate::models::{Row, RowContent, Spacing, Tone};
use crate::rows::{loc_parts, stat_content};
use crate::theme::ColorMode;

const WIDTH: u32 = 800;
const FONT_SIZE: u32 = 14;
const Y_START: u32 = 30;
const BOTTOM_MARGIN: u32 = 30;
// art rows overlap a little to hide the inter-line gaps
const LINE_TIGHT: u32 = 13;
const LINE_NORMAL: u32 = 20;
const BLANK_ADVANCE: u32 = LINE_NORMAL / 2;
const CONTENT_WIDTH: usize = 90;

pub fn render_svg(rows: &[Row], mode: ColorMode) -> String {
    let palette = mode.palette();
    let height = canvas_height(rows);
    let center = WIDTH / 2;

    let mut svg = String::with_capacity(rows.len() * 160 + 1024);
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{height}\" viewBox=\"0 0 {WIDTH} {height}\">\n"
    ));
    svg.push_str(&format!(
        "<style>\n\
         @font-face {{\n\
         \x20   src: local('Consolas'), local('Monaco'), local('Menlo');\n\
         \x20   font-family: 'MonoFallback';\n\
         \x20   font-display: swap;\n\
         }}\n\
         text {{\n\
         \x20   font-family: 'MonoFallback', ui-monospace, SFMono-Regular, 'SF Mono', Menlo, Consolas, monospace;\n\
         \x20   font-size: {FONT_SIZE}px;\n\
         \x20   white-space: pre;\n\
         \x20   dominant-baseline: text-before-edge;\n\
         }}\n\
         .text {{ fill: {}; }}\n\
         .muted {{ fill: {}; }}\n\
         .accent1 {{ fill: {}; }}\n\
         .accent2 {{ fill: {}; }}\n\
         .accent3 {{ fill: {}; }}\n\
         .accent4 {{ fill: {}; }}\n\
         </style>\n",
        palette.text, palette.muted, palette.accent1, palette.accent2, palette.accent3, palette.accent4
    ));
    svg.push_str(&format!(
        "<rect width=\"{WIDTH}\" height=\"{height}\" fill=\"{}\" rx=\"10\"/>\n",
        palette.bg
    ));

    let mut y = Y_START;
    for row in rows {
        match &row.content {
            RowContent::Text(text) if text.is_empty() => {}
            RowContent::Text(text) => {
                svg.push_str(&format!(
                    "<text x=\"{center}\" y=\"{y}\" text-anchor=\"middle\" class=\"{}\">{}</text>\n",
                    tone_class(row.tone),
                    escape_xml(text)
                ));
            }
            RowContent::Stat { key, value } => {
                svg.push_str(&format!(
                    "<text x=\"{center}\" y=\"{y}\" text-anchor=\"middle\" class=\"{}\">{}</text>\n",
                    tone_class(row.tone),
                    escape_xml(&stat_content(key, value, CONTENT_WIDTH))
                ));
            }
            RowContent::Loc {
                total,
                added,
                deleted,
            } => {
                let parts = loc_parts(*total, *added, *deleted, CONTENT_WIDTH);
                svg.push_str(&format!(
                    "<text x=\"{center}\" y=\"{y}\" text-anchor=\"middle\">\
                     <tspan class=\"muted\">{}</tspan>\
                     <tspan class=\"accent2\">{}</tspan>\
                     <tspan class=\"muted\">{}</tspan>\
                     <tspan class=\"accent4\">{}</tspan>\
                     <tspan class=\"muted\">{}</tspan>\
                     </text>\n",
                    escape_xml(&parts.lead),
                    escape_xml(&parts.added),
                    parts.separator,
                    escape_xml(&parts.deleted),
                    parts.close
                ));
            }
        }
        y += advance(row.spacing);
    }

    svg.push_str("</svg>\n");
    svg
}

fn advance(spacing: Spacing) -> u32 {
    match spacing {
        Spacing::Tight => LINE_TIGHT,
        Spacing::Normal => LINE_NORMAL,
        Spacing::Blank => BLANK_ADVANCE,
    }
}

fn canvas_height(rows: &[Row]) -> u32 {
    Y_START + rows.iter().map(|r| advance(r.spacing)).sum::<u32>() + BOTTOM_MARGIN
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Text => "text",
        Tone::Muted => "muted",
        Tone::Accent1 => "accent1",
        Tone::Accent2 => "accent2",
        Tone::Accent3 => "accent3",
        Tone::Accent4 => "accent4",
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_characters_are_escaped() {
        let rows = vec![Row::stat("A<B", "x&y")];
        let svg = render_svg(&rows, ColorMode::Dark);
        assert!(svg.contains("A&lt;B"));
        assert!(svg.contains("x&amp;y"));
        assert!(!svg.contains("A<B"));
    }

    #[test]
    fn height_follows_row_spacing() {
        use crate::models::Spacing;
        let rows = vec![
            Row::text("art", Tone::Accent3, Spacing::Tight),
            Row::text("stat", Tone::Muted, Spacing::Normal),
            Row::blank(),
        ];
        // 30 + 13 + 20 + 10 + 30
        let svg = render_svg(&rows, ColorMode::Dark);
        assert!(svg.contains("height=\"103\""));
        assert!(svg.contains("viewBox=\"0 0 800 103\""));
    }

    #[test]
    fn blank_rows_advance_without_elements() {
        use crate::models::Spacing;
        let rows = vec![
            Row::text("first", Tone::Muted, Spacing::Normal),
            Row::blank(),
            Row::text("second", Tone::Muted, Spacing::Normal),
        ];
        let svg = render_svg(&rows, ColorMode::Dark);
        assert_eq!(svg.matches("<text").count(), 2);
        assert!(svg.contains("y=\"30\""));
        assert!(svg.contains("y=\"60\""));
    }

    #[test]
    fn palettes_change_fills_but_not_content() {
        let rows = vec![Row::stat("Sessions", "42")];
        let dark = render_svg(&rows, ColorMode::Dark);
        let light = render_svg(&rows, ColorMode::Light);
        assert!(dark.contains("#0d1117"));
        assert!(light.contains("#ffffff"));

        let body = |svg: &str| {
            svg.lines()
                .find(|l| l.contains("Sessions"))
                .map(str::to_string)
        };
        assert_eq!(body(&dark), body(&light));
    }

    #[test]
    fn loc_row_renders_colored_tspans() {
        let rows = vec![Row::loc(-50, 1_234, 1_284)];
        let svg = render_svg(&rows, ColorMode::Dark);
        assert!(svg.contains("<tspan class=\"accent2\">+1,234</tspan>"));
        assert!(svg.contains("<tspan class=\"accent4\">-1,284</tspan>"));
        assert!(svg.contains("-50 ( "));
    }
}
