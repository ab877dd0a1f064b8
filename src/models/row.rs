/// Semantic color class resolved against a palette at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Text,
    Muted,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
}

/// Vertical rhythm class. Tight packs art blocks, Blank advances half a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spacing {
    Tight,
    Normal,
    Blank,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RowContent {
    Text(String),
    Stat { key: String, value: String },
    Loc { total: i64, added: u64, deleted: u64 },
}

/// One logical output row, shared by the terminal and SVG renderers.
#[derive(Clone, Debug)]
pub struct Row {
    pub content: RowContent,
    pub tone: Tone,
    pub spacing: Spacing,
}

impl Row {
    pub fn text(text: impl Into<String>, tone: Tone, spacing: Spacing) -> Self {
        Row {
            content: RowContent::Text(text.into()),
            tone,
            spacing,
        }
    }

    pub fn stat(key: impl Into<String>, value: impl Into<String>) -> Self {
        Row {
            content: RowContent::Stat {
                key: key.into(),
                value: value.into(),
            },
            tone: Tone::Muted,
            spacing: Spacing::Normal,
        }
    }

    pub fn loc(total: i64, added: u64, deleted: u64) -> Self {
        Row {
            content: RowContent::Loc {
                total,
                added,
                deleted,
            },
            tone: Tone::Muted,
            spacing: Spacing::Normal,
        }
    }

    pub fn blank() -> Self {
        Row {
            content: RowContent::Text(String::new()),
            tone: Tone::Muted,
            spacing: Spacing::Blank,
        }
    }
}
