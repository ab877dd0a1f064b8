//! # GitHub Stats Module
//!
//! Aggregates profile stats for one login in three phases:
//! 1. one GraphQL profile query (repo/follower/PR/issue counts, star sum)
//! 2. per-repo commit totals filtered by the user's node id
//! 3. per-repo lines-of-code totals from the REST contributor stats
//!
//! Repo listings are capped at the first page of 100, so star and LOC
//! totals undercount on larger accounts. Phases 2 and 3 degrade to zero
//! on failure; only a failed profile query abandons the fetch.

use serde::Deserialize;
use serde_json::{Value, json};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

use crate::cache::{SnapshotStore, keys};
use crate::models::GithubUsage;
use crate::transport::QueryTransport;

const PROFILE_QUERY: &str = r"
query($login: String!) {
  user(login: $login) {
    repositories(first: 100, ownerAffiliations: [OWNER, COLLABORATOR, ORGANIZATION_MEMBER]) {
      totalCount
      nodes { stargazerCount }
    }
    followers { totalCount }
    following { totalCount }
    repositoriesContributedTo(first: 0, contributionTypes: [COMMIT, PULL_REQUEST]) { totalCount }
    pullRequests(first: 0) { totalCount }
    issues(first: 0) { totalCount }
  }
}";

const USER_ID_QUERY: &str = r"
query($login: String!) {
  user(login: $login) { id }
}";

const REPO_COMMITS_QUERY: &str = r"
query($owner: String!, $name: String!, $authorId: ID!) {
  repository(owner: $owner, name: $name) {
    defaultBranchRef {
      target {
        ... on Commit {
          history(first: 0, author: { id: $authorId }) { totalCount }
        }
      }
    }
  }
}";

const ALL_AFFILIATIONS: &str = "owner,collaborator,organization_member";
const OWNER_AFFILIATION: &str = "owner";

/// Bounded retry for endpoints that answer 202 while GitHub computes stats.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Same attempt budget without sleeping.
    pub fn instant() -> Self {
        RetryPolicy {
            attempts: 3,
            delay: Duration::ZERO,
        }
    }
}

#[derive(Deserialize, Debug)]
struct RepoListing {
    name: String,
    #[serde(default)]
    fork: bool,
    owner: RepoOwner,
}

#[derive(Deserialize, Debug)]
struct RepoOwner {
    login: String,
}

#[derive(Deserialize, Debug)]
struct ContributorStat {
    author: Option<ContributorAuthor>,
    #[serde(default)]
    weeks: Vec<WeekStat>,
}

#[derive(Deserialize, Debug)]
struct ContributorAuthor {
    login: String,
}

#[derive(Deserialize, Debug, Default)]
struct WeekStat {
    #[serde(default)]
    a: u64,
    #[serde(default)]
    d: u64,
}

/// Aggregate stats for `login`, preferring the transport and falling back
/// to the last cached snapshot, then to a zero-valued record.
pub fn github_usage_with_fallback(
    transport: &dyn QueryTransport,
    login: &str,
    retry: &RetryPolicy,
    store: &SnapshotStore,
) -> GithubUsage {
    if !transport.available() {
        warn!("github transport unavailable, using cached stats");
        return cached_github(store);
    }
    match fetch_github_stats(transport, login, retry) {
        Some(stats) => stats,
        None => {
            warn!(login, "github aggregation failed, using cached stats");
            cached_github(store)
        }
    }
}

fn cached_github(store: &SnapshotStore) -> GithubUsage {
    store.read(keys::GITHUB_STATS).unwrap_or_default()
}

/// Run all three phases against the transport. `None` only when the profile
/// query itself fails; later phases degrade to zeros instead.
pub fn fetch_github_stats(
    transport: &dyn QueryTransport,
    login: &str,
    retry: &RetryPolicy,
) -> Option<GithubUsage> {
    let data = transport.graphql(PROFILE_QUERY, json!({ "login": login }))?;
    if let Some(errors) = data.get("errors") {
        warn!(%errors, "github profile query failed");
        return None;
    }

    let user = data.get("data")?.get("user")?;
    let repositories = user.get("repositories")?;

    let repos = repositories
        .get("totalCount")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    // Star sum only covers the first page of repository nodes
    let stars = repositories
        .get("nodes")
        .and_then(Value::as_array)
        .map(|nodes| {
            nodes
                .iter()
                .filter_map(|n| n.get("stargazerCount").and_then(Value::as_u64))
                .sum()
        })
        .unwrap_or(0);

    let commits = total_commits(transport, login);
    let (loc_added, loc_deleted) = loc_totals(transport, login, retry);

    Some(GithubUsage {
        repos,
        contributed_repos: total_count(user, "repositoriesContributedTo"),
        commits,
        prs: total_count(user, "pullRequests"),
        issues: total_count(user, "issues"),
        stars,
        followers: total_count(user, "followers"),
        following: total_count(user, "following"),
        loc_added,
        loc_deleted,
        loc_total: loc_added as i64 - loc_deleted as i64,
    })
}

fn total_count(user: &Value, field: &str) -> u64 {
    user.get(field)
        .and_then(|v| v.get("totalCount"))
        .and_then(Value::as_u64)
        .unwrap_or(0)
}

/// Sum commits authored by the user over every listed repository's default
/// branch. Repos that fail to answer (or have no default branch) add zero.
fn total_commits(transport: &dyn QueryTransport, login: &str) -> u64 {
    let Some(author_id) = user_node_id(transport, login) else {
        debug!("could not resolve user node id, skipping commit totals");
        return 0;
    };
    let Some(repos) = list_repos(transport, ALL_AFFILIATIONS) else {
        return 0;
    };

    repos
        .iter()
        .filter_map(|repo| commit_count(transport, repo, &author_id))
        .sum()
}

fn commit_count(
    transport: &dyn QueryTransport,
    repo: &RepoListing,
    author_id: &str,
) -> Option<u64> {
    let data = transport.graphql(
        REPO_COMMITS_QUERY,
        json!({
            "owner": repo.owner.login,
            "name": repo.name,
            "authorId": author_id,
        }),
    )?;
    data.get("data")?
        .get("repository")?
        .get("defaultBranchRef")?
        .get("target")?
        .get("history")?
        .get("totalCount")?
        .as_u64()
}

/// Week-by-week added/deleted line totals over owned, non-fork repos.
fn loc_totals(transport: &dyn QueryTransport, login: &str, retry: &RetryPolicy) -> (u64, u64) {
    let Some(repos) = list_repos(transport, OWNER_AFFILIATION) else {
        return (0, 0);
    };

    let mut added = 0u64;
    let mut deleted = 0u64;
    for repo in repos.iter().filter(|r| !r.fork) {
        if let Some((a, d)) = contributor_loc(transport, login, &repo.name, retry) {
            added += a;
            deleted += d;
        }
    }
    (added, deleted)
}

/// Contributor stats for one repo. GitHub answers 202 until the stats are
/// computed, so the call retries on a bounded budget; a repo whose stats
/// never become ready (or that has no entry for the login) adds zero.
fn contributor_loc(
    transport: &dyn QueryTransport,
    login: &str,
    repo: &str,
    retry: &RetryPolicy,
) -> Option<(u64, u64)> {
    let endpoint = format!("repos/{login}/{repo}/stats/contributors");

    for attempt in 1..=retry.attempts {
        let Some(value) = transport.rest(&endpoint) else {
            if attempt < retry.attempts {
                thread::sleep(retry.delay);
            }
            continue;
        };
        let Ok(stats) = serde_json::from_value::<Vec<ContributorStat>>(value) else {
            return None;
        };

        let contributor = stats.iter().find(|c| {
            c.author
                .as_ref()
                .is_some_and(|a| a.login.eq_ignore_ascii_case(login))
        })?;
        return Some(
            contributor
                .weeks
                .iter()
                .fold((0, 0), |(a, d), w| (a + w.a, d + w.d)),
        );
    }

    debug!(%endpoint, attempts = retry.attempts, "contributor stats never became ready");
    None
}

fn list_repos(transport: &dyn QueryTransport, affiliation: &str) -> Option<Vec<RepoListing>> {
    let endpoint = format!("user/repos?per_page=100&affiliation={affiliation}");
    let value = transport.rest(&endpoint)?;
    match serde_json::from_value(value) {
        Ok(repos) => Some(repos),
        Err(e) => {
            warn!(affiliation, error = %e, "unexpected repo listing shape");
            None
        }
    }
}

fn user_node_id(transport: &dyn QueryTransport, login: &str) -> Option<String> {
    let data = transport.graphql(USER_ID_QUERY, json!({ "login": login }))?;
    data.get("data")?
        .get("user")?
        .get("id")?
        .as_str()
        .map(str::to_string)
}
