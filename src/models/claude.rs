use serde::{Deserialize, Serialize};

/// Aggregated Claude Code usage across every session log found locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaudeUsage {
    pub sessions: u64,
    pub messages: u64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cache_creation_tokens: u64,
    pub cache_read_tokens: u64,
    pub total_tokens: u64,
    pub cost_estimate: f64,
}

#[derive(Deserialize, Debug, Default)]
pub struct MessageUsage {
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
    pub cache_creation_input_tokens: Option<u64>,
    pub cache_read_input_tokens: Option<u64>,
}

impl MessageUsage {
    /// A line only counts as a message when at least one counter is present.
    pub fn has_counts(&self) -> bool {
        self.input_tokens.is_some()
            || self.output_tokens.is_some()
            || self.cache_creation_input_tokens.is_some()
            || self.cache_read_input_tokens.is_some()
    }
}

#[derive(Deserialize, Debug)]
pub struct MessageObj {
    pub usage: Option<MessageUsage>,
}

#[derive(Deserialize, Debug)]
pub struct TranscriptLine {
    pub message: Option<MessageObj>,
}
