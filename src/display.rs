//! Terminal renderer: the 98-column double-line bordered block. Text rows
//! are centered, stat rows keep their dot-leader alignment, and every
//! interior line is padded to the exact block width so the right border
//! never drifts.

use std::env;

use crate::models::{Row, RowContent, Tone};
use crate::rows::{loc_parts, stat_content};
use crate::theme::{tint, tint_value};

const BLOCK_WIDTH: usize = 98;
// borders plus their flanking spaces
const CONTENT_WIDTH: usize = BLOCK_WIDTH - 4;

/// Colors are on unless the flag or the NO_COLOR convention disables them.
pub fn color_enabled(no_color_flag: bool) -> bool {
    !no_color_flag && env::var_os("NO_COLOR").is_none()
}

pub fn render_terminal(rows: &[Row], color: bool) -> String {
    let horiz = "═".repeat(BLOCK_WIDTH - 2);
    let mut lines = Vec::with_capacity(rows.len() + 4);

    lines.push(tint(&format!("╔{horiz}╗"), Tone::Text, color));
    lines.push(frame(String::new(), 0, false, color));

    for row in rows {
        lines.push(render_row(row, color));
    }

    lines.push(frame(String::new(), 0, false, color));
    lines.push(tint(&format!("╚{horiz}╝"), Tone::Text, color));

    lines.join("\n") + "\n"
}

/// Left-pads every line of the block so it sits centered in a terminal
/// wider than the block. Unknown or narrow terminals get no margin.
pub fn centered_in_terminal(block: &str) -> String {
    let margin = terminal_left_margin();
    if margin == 0 {
        return block.to_string();
    }
    let pad = " ".repeat(margin);
    let mut out = String::with_capacity(block.len() + margin * block.lines().count());
    for line in block.lines() {
        out.push_str(&pad);
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn terminal_left_margin() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .filter(|cols| *cols > BLOCK_WIDTH)
        .map(|cols| (cols - BLOCK_WIDTH) / 2)
        .unwrap_or(0)
}

fn render_row(row: &Row, color: bool) -> String {
    match &row.content {
        RowContent::Text(text) if text.is_empty() => frame(String::new(), 0, false, color),
        RowContent::Text(text) => {
            let visible = text.chars().count();
            frame(tint(text, row.tone, color), visible, true, color)
        }
        RowContent::Stat { key, value } => {
            let plain = stat_content(key, value, CONTENT_WIDTH);
            let visible = plain.chars().count();
            frame(colored_stat(key, value, &plain, color), visible, false, color)
        }
        RowContent::Loc {
            total,
            added,
            deleted,
        } => {
            let parts = loc_parts(*total, *added, *deleted, CONTENT_WIDTH);
            let visible = parts.lead.chars().count()
                + parts.added.chars().count()
                + parts.separator.len()
                + parts.deleted.chars().count()
                + parts.close.len();
            let colored = format!(
                "{}{}{}{}{}",
                tint(&parts.lead, Tone::Muted, color),
                tint(&parts.added, Tone::Accent2, color),
                tint(parts.separator, Tone::Muted, color),
                tint(&parts.deleted, Tone::Accent4, color),
                tint(parts.close, Tone::Muted, color),
            );
            frame(colored, visible, false, color)
        }
    }
}

/// Recolors the key, dot run, and value without touching the visible text.
fn colored_stat(key: &str, value: &str, plain: &str, color: bool) -> String {
    if !color {
        return plain.to_string();
    }
    let dots = plain.chars().count() - key.chars().count() - value.chars().count() - 3;
    format!(
        "{}: {} {}",
        tint(key, Tone::Accent3, color),
        tint(&".".repeat(dots), Tone::Muted, color),
        tint_value(value, color),
    )
}

/// Wraps already-colored content in the side borders, padding the plain
/// (`visible`) width out to the full content area.
fn frame(content: String, visible: usize, centered: bool, color: bool) -> String {
    let pad = CONTENT_WIDTH.saturating_sub(visible);
    let (left, right) = if centered {
        (pad / 2, pad - pad / 2)
    } else {
        (0, pad)
    };
    let border = tint("║", Tone::Text, color);
    format!(
        "{border} {}{content}{} {border}",
        " ".repeat(left),
        " ".repeat(right)
    )
}
