//! Builds the logical row sequence shared by the terminal and SVG
//! renderers. Rows carry semantic tones and spacing only; concrete
//! colors, borders, and markup belong to the render targets.

use chrono::NaiveDate;

use crate::art;
use crate::models::{ClaudeUsage, GithubUsage, Row, Spacing, Tone};
use crate::utils::{format_money, format_number, group_digits, group_digits_signed};

/// Floor for the dot run so an oversized value cannot collapse the leader.
const MIN_DOTS: usize = 3;

const LOC_KEY: &str = "Lines of Code";

/// The full profile block, top to bottom. Layout is fixed; only the stat
/// values vary between runs.
pub fn build_rows(claude: &ClaudeUsage, github: &GithubUsage, today: NaiveDate) -> Vec<Row> {
    let mut rows = Vec::new();

    for line in art::HEADER_ART {
        rows.push(Row::text(line, Tone::Accent3, Spacing::Tight));
    }
    rows.push(Row::blank());
    rows.push(Row::text(art::TAGLINE, Tone::Muted, Spacing::Normal));
    rows.push(Row::blank());

    banner(&mut rows, &art::SYSTEM_HEADER, Tone::Text);
    for (key, value) in art::PROFILE_FIELDS {
        rows.push(Row::stat(key, value));
    }
    rows.push(Row::blank());

    banner(&mut rows, &art::CLAUDE_HEADER, Tone::Accent1);
    rows.push(Row::stat("Sessions", format_number(claude.sessions)));
    rows.push(Row::stat("Messages", format_number(claude.messages)));
    rows.push(Row::stat("Input Tokens", format_number(claude.input_tokens)));
    rows.push(Row::stat("Output Tokens", format_number(claude.output_tokens)));
    rows.push(Row::stat(
        "Cache Created",
        format_number(claude.cache_creation_tokens),
    ));
    rows.push(Row::stat("Cache Read", format_number(claude.cache_read_tokens)));
    rows.push(Row::stat("Total Tokens", format_number(claude.total_tokens)));
    rows.push(Row::stat("Est. API Cost", format_money(claude.cost_estimate)));
    rows.push(Row::blank());

    banner(&mut rows, &art::GITHUB_HEADER, Tone::Accent2);
    rows.push(Row::stat("Repositories", github.repos.to_string()));
    rows.push(Row::stat(
        "Contributed To",
        github.contributed_repos.to_string(),
    ));
    rows.push(Row::stat("Total Commits", format_number(github.commits)));
    rows.push(Row::stat("Pull Requests", github.prs.to_string()));
    rows.push(Row::stat("Issues", github.issues.to_string()));
    rows.push(Row::stat("Stars Earned", github.stars.to_string()));
    rows.push(Row::stat("Followers", github.followers.to_string()));
    rows.push(Row::stat("Following", github.following.to_string()));
    rows.push(Row::loc(github.loc_total, github.loc_added, github.loc_deleted));
    rows.push(Row::blank());

    rows.push(Row::text(art::FOOTER_GREETZ, Tone::Muted, Spacing::Normal));
    rows.push(Row::blank());
    rows.push(Row::text(
        format!("Last Updated: {}", today.format("%Y-%m-%d")),
        Tone::Muted,
        Spacing::Normal,
    ));

    rows
}

fn banner(rows: &mut Vec<Row>, header: &[&str; 3], tone: Tone) {
    for line in header {
        rows.push(Row::text(*line, tone, Spacing::Tight));
    }
    rows.push(Row::blank());
}

/// Dot-leader stat line: `key: .... value`, padded to exactly `width`
/// visible characters while the dot run stays above the floor.
pub fn stat_content(key: &str, value: &str, width: usize) -> String {
    let used = key.chars().count() + 1 + value.chars().count() + 2;
    let dots = width.saturating_sub(used).max(MIN_DOTS);
    format!("{key}: {} {value}", ".".repeat(dots))
}

/// The lines-of-code row split into independently colored segments.
pub struct LocParts {
    pub lead: String,
    pub added: String,
    pub separator: &'static str,
    pub deleted: String,
    pub close: &'static str,
}

pub fn loc_parts(total: i64, added: u64, deleted: u64, width: usize) -> LocParts {
    let total = group_digits_signed(total);
    let added = format!("+{}", group_digits(added));
    let deleted = format!("-{}", group_digits(deleted));

    // visible value: "{total} ( {added}, {deleted} )"
    let value_len = total.len() + added.len() + deleted.len() + 7;
    let used = LOC_KEY.len() + 1 + value_len + 2;
    let dots = width.saturating_sub(used).max(MIN_DOTS);

    LocParts {
        lead: format!("{LOC_KEY}: {} {total} ( ", ".".repeat(dots)),
        added,
        separator: ", ",
        deleted,
        close: " )",
    }
}
