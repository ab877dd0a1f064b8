use serde::{Deserialize, Serialize};

/// Aggregated GitHub profile stats for one login.
///
/// Counts that come from first-page queries (stars, lines of code) only cover
/// the first 100 repositories and undercount larger accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubUsage {
    pub repos: u64,
    pub contributed_repos: u64,
    pub commits: u64,
    pub prs: u64,
    pub issues: u64,
    pub stars: u64,
    pub followers: u64,
    pub following: u64,
    pub loc_added: u64,
    pub loc_deleted: u64,
    pub loc_total: i64,
}
