//! GitHub API transport.
//!
//! `QueryTransport` is the seam between the aggregation logic and the
//! network: one REST call, one GraphQL call, and an availability probe.
//! Every call is soft-failing; `None` covers auth problems, HTTP errors,
//! and the 202 "still computing" responses from the stats endpoints alike.

use once_cell::sync::Lazy;
use serde_json::Value;
use std::env;
use std::process::Command;
use std::time::Duration;
use tracing::debug;

const API_ROOT: &str = "https://api.github.com";
const GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

static USER_AGENT: Lazy<String> = Lazy::new(resolve_user_agent);

fn resolve_user_agent() -> String {
    if let Ok(explicit) = env::var("NFOGEN_USER_AGENT") {
        let trimmed = explicit.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    format!("nfogen/{}", env!("CARGO_PKG_VERSION"))
}

/// Read-only GitHub query surface used by the stats aggregator.
pub trait QueryTransport {
    /// Whether the transport is worth trying at all (a credential exists).
    fn available(&self) -> bool;

    /// GET a REST endpoint relative to the API root. `None` on any failure,
    /// including 202 responses while GitHub computes statistics.
    fn rest(&self, endpoint: &str) -> Option<Value>;

    /// POST a GraphQL query with variables. `None` on any failure.
    fn graphql(&self, query: &str, variables: Value) -> Option<Value>;
}

/// ureq-backed transport authenticated with a personal access token.
pub struct GithubHttp {
    agent: ureq::Agent,
    token: Option<String>,
}

impl GithubHttp {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_read(Duration::from_secs(10))
            .timeout_write(Duration::from_secs(10))
            .build();
        GithubHttp {
            agent,
            token: discover_token(),
        }
    }
}

impl Default for GithubHttp {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryTransport for GithubHttp {
    fn available(&self) -> bool {
        self.token.is_some()
    }

    fn rest(&self, endpoint: &str) -> Option<Value> {
        let token = self.token.as_deref()?;
        let response = self
            .agent
            .get(&format!("{API_ROOT}/{endpoint}"))
            .set("Authorization", &format!("Bearer {token}"))
            .set("User-Agent", USER_AGENT.as_str())
            .set("Accept", "application/vnd.github+json")
            .call()
            .ok()?;

        if response.status() != 200 {
            debug!(endpoint, status = response.status(), "rest call not ready");
            return None;
        }

        response.into_json().ok()
    }

    fn graphql(&self, query: &str, variables: Value) -> Option<Value> {
        let token = self.token.as_deref()?;
        let response = self
            .agent
            .post(GRAPHQL_ENDPOINT)
            .set("Authorization", &format!("Bearer {token}"))
            .set("User-Agent", USER_AGENT.as_str())
            .set("Accept", "application/json")
            .send_json(serde_json::json!({
                "query": query,
                "variables": variables,
            }))
            .ok()?;

        if response.status() != 200 {
            return None;
        }

        response.into_json().ok()
    }
}

/// Find a GitHub token: environment variables first, then the gh CLI.
fn discover_token() -> Option<String> {
    for key in ["GITHUB_TOKEN", "GH_TOKEN"] {
        if let Ok(val) = env::var(key) {
            let trimmed = val.trim().to_string();
            if !trimmed.is_empty() {
                return Some(trimmed);
            }
        }
    }
    gh_cli_token()
}

fn gh_cli_token() -> Option<String> {
    let output = Command::new("gh").args(["auth", "token"]).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() { None } else { Some(token) }
}
