pub mod claude;
pub mod github;
pub mod row;
pub mod snapshot;

pub use claude::{ClaudeUsage, MessageUsage, TranscriptLine};
pub use github::GithubUsage;
pub use row::{Row, RowContent, Spacing, Tone};
pub use snapshot::Snapshot;
