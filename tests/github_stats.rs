use nfogen::cache::{SnapshotStore, keys};
use nfogen::github::{RetryPolicy, fetch_github_stats, github_usage_with_fallback};
use nfogen::transport::QueryTransport;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use tempfile::TempDir;

/// Scripted GitHub backend. GraphQL queries are told apart by the fields
/// they select, REST endpoints by path, with queued replies so a 202-style
/// "not ready yet" sequence can be played back.
#[derive(Default)]
struct ScriptedGithub {
    live: bool,
    profile: Option<Value>,
    user_id: Option<Value>,
    commit_counts: HashMap<(String, String), Value>,
    rest: RefCell<HashMap<String, VecDeque<Option<Value>>>>,
}

impl ScriptedGithub {
    fn rest_queue(self, endpoint: &str, replies: Vec<Option<Value>>) -> Self {
        self.rest
            .borrow_mut()
            .insert(endpoint.to_string(), replies.into());
        self
    }
}

impl QueryTransport for ScriptedGithub {
    fn available(&self) -> bool {
        self.live
    }

    fn rest(&self, endpoint: &str) -> Option<Value> {
        self.rest
            .borrow_mut()
            .get_mut(endpoint)?
            .pop_front()
            .flatten()
    }

    fn graphql(&self, query: &str, variables: Value) -> Option<Value> {
        if query.contains("stargazerCount") {
            return self.profile.clone();
        }
        if query.contains("history(") {
            let owner = variables.get("owner")?.as_str()?.to_string();
            let name = variables.get("name")?.as_str()?.to_string();
            return self.commit_counts.get(&(owner, name)).cloned();
        }
        self.user_id.clone()
    }
}

fn profile_payload() -> Value {
    json!({
        "data": {
            "user": {
                "repositories": {
                    "totalCount": 150,
                    "nodes": [ { "stargazerCount": 40 }, { "stargazerCount": 2 } ]
                },
                "followers": { "totalCount": 64 },
                "following": { "totalCount": 32 },
                "repositoriesContributedTo": { "totalCount": 9 },
                "pullRequests": { "totalCount": 120 },
                "issues": { "totalCount": 45 }
            }
        }
    })
}

fn commit_payload(count: u64) -> Value {
    json!({
        "data": {
            "repository": {
                "defaultBranchRef": { "target": { "history": { "totalCount": count } } }
            }
        }
    })
}

fn scripted_happy_path() -> ScriptedGithub {
    let mut transport = ScriptedGithub {
        live: true,
        profile: Some(profile_payload()),
        user_id: Some(json!({ "data": { "user": { "id": "MDQ6VXNlcjE=" } } })),
        ..Default::default()
    };
    transport.commit_counts.insert(
        ("octocat".to_string(), "spoon-knife".to_string()),
        commit_payload(250),
    );
    transport.commit_counts.insert(
        ("some-org".to_string(), "shared".to_string()),
        commit_payload(50),
    );

    transport
        .rest_queue(
            "user/repos?per_page=100&affiliation=owner,collaborator,organization_member",
            vec![Some(json!([
                { "name": "spoon-knife", "fork": false, "owner": { "login": "octocat" } },
                { "name": "shared", "fork": false, "owner": { "login": "some-org" } }
            ]))],
        )
        .rest_queue(
            "user/repos?per_page=100&affiliation=owner",
            vec![Some(json!([
                { "name": "spoon-knife", "fork": false, "owner": { "login": "octocat" } },
                { "name": "mirrored", "fork": true, "owner": { "login": "octocat" } }
            ]))],
        )
        .rest_queue(
            "repos/octocat/spoon-knife/stats/contributors",
            // first answer is the 202 "still computing" case
            vec![
                None,
                Some(json!([
                    {
                        "author": { "login": "Octocat" },
                        "weeks": [ { "a": 900, "d": 100 }, { "a": 100, "d": 150 } ]
                    }
                ])),
            ],
        )
}

#[test]
fn full_pipeline_aggregates_all_phases() {
    let transport = scripted_happy_path();
    let stats = fetch_github_stats(&transport, "octocat", &RetryPolicy::instant()).unwrap();

    assert_eq!(stats.repos, 150);
    assert_eq!(stats.stars, 42);
    assert_eq!(stats.followers, 64);
    assert_eq!(stats.following, 32);
    assert_eq!(stats.contributed_repos, 9);
    assert_eq!(stats.prs, 120);
    assert_eq!(stats.issues, 45);
    assert_eq!(stats.commits, 300);
    assert_eq!(stats.loc_added, 1_000);
    assert_eq!(stats.loc_deleted, 250);
    assert_eq!(stats.loc_total, 750);
}

#[test]
fn fetched_stats_survive_a_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = SnapshotStore::open(&dir.path().join("snap.db")).unwrap();

    let transport = scripted_happy_path();
    let fetched = github_usage_with_fallback(&transport, "octocat", &RetryPolicy::instant(), &store);
    store.write(keys::GITHUB_STATS, &fetched).unwrap();

    let offline = ScriptedGithub::default();
    let restored = github_usage_with_fallback(&offline, "octocat", &RetryPolicy::instant(), &store);
    assert_eq!(restored.repos, fetched.repos);
    assert_eq!(restored.commits, fetched.commits);
    assert_eq!(restored.loc_total, fetched.loc_total);
}

#[test]
fn failed_fetch_with_empty_store_yields_zero_record() {
    let dir = TempDir::new().unwrap();
    let store = SnapshotStore::open(&dir.path().join("snap.db")).unwrap();

    // live transport whose profile query answers with an error payload
    let transport = ScriptedGithub {
        live: true,
        profile: Some(json!({ "errors": [ { "message": "bad credentials" } ] })),
        ..Default::default()
    };

    let stats = github_usage_with_fallback(&transport, "octocat", &RetryPolicy::instant(), &store);
    assert_eq!(stats, nfogen::models::GithubUsage::default());
}

#[test]
fn commit_phase_survives_unresolvable_user_id() {
    let transport = ScriptedGithub {
        live: true,
        profile: Some(profile_payload()),
        user_id: None,
        ..Default::default()
    }
    .rest_queue("user/repos?per_page=100&affiliation=owner", vec![Some(json!([]))]);

    let stats = fetch_github_stats(&transport, "octocat", &RetryPolicy::instant()).unwrap();
    assert_eq!(stats.commits, 0);
    assert_eq!(stats.repos, 150);
}
