use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::claude::ClaudeUsage;
use super::github::GithubUsage;

/// Persisted copy of one full aggregation run. Fields default on read so
/// snapshots written by older builds still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default = "Utc::now")]
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub claude: ClaudeUsage,
    #[serde(default)]
    pub github: GithubUsage,
}

impl Snapshot {
    pub fn new(claude: ClaudeUsage, github: GithubUsage) -> Self {
        Snapshot {
            generated_at: Utc::now(),
            claude,
            github,
        }
    }
}
