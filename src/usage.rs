//! # Usage Module
//!
//! Aggregates Claude Code token usage from the local session log tree.
//!
//! Every `*.jsonl` file under the root is one session, even when it cannot
//! be read. Lines that fail to parse are skipped; a line only counts as a
//! message when its `message.usage` object carries at least one counter.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::cache::{SnapshotStore, keys};
use crate::models::{ClaudeUsage, Snapshot, TranscriptLine};
use crate::pricing::Rates;

/// Scan the log tree and total up sessions, messages, and token counters.
///
/// Returns `None` when there is nothing to aggregate (missing root or zero
/// session files), signalling the caller to fall back to a cached snapshot.
pub fn scan_logs(root: &Path, rates: &Rates) -> Option<ClaudeUsage> {
    if !root.is_dir() {
        return None;
    }

    let mut sessions = 0u64;
    let mut messages = 0u64;
    let mut input = 0u64;
    let mut output = 0u64;
    let mut cache_creation = 0u64;
    let mut cache_read = 0u64;

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some("jsonl") {
            continue;
        }

        // The file marks a session even when its contents are unreadable
        sessions += 1;

        let file = match File::open(entry.path()) {
            Ok(f) => f,
            Err(e) => {
                debug!(path = %entry.path().display(), error = %e, "skipping unreadable session log");
                continue;
            }
        };

        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };
            let parsed: TranscriptLine = match serde_json::from_str(line.trim()) {
                Ok(v) => v,
                Err(_) => continue,
            };
            let Some(usage) = parsed.message.and_then(|m| m.usage) else {
                continue;
            };
            if !usage.has_counts() {
                continue;
            }

            messages += 1;
            input += usage.input_tokens.unwrap_or(0);
            output += usage.output_tokens.unwrap_or(0);
            cache_creation += usage.cache_creation_input_tokens.unwrap_or(0);
            cache_read += usage.cache_read_input_tokens.unwrap_or(0);
        }
    }

    if sessions == 0 {
        return None;
    }

    Some(ClaudeUsage {
        sessions,
        messages,
        input_tokens: input,
        output_tokens: output,
        cache_creation_tokens: cache_creation,
        cache_read_tokens: cache_read,
        total_tokens: input + output + cache_creation + cache_read,
        cost_estimate: rates.estimate(input, output, cache_creation, cache_read),
    })
}

/// Scan the logs, falling back to the last saved snapshot and then to a
/// zero-valued record.
pub fn claude_usage_with_fallback(
    root: &Path,
    rates: &Rates,
    store: &SnapshotStore,
) -> ClaudeUsage {
    if let Some(usage) = scan_logs(root, rates) {
        return usage;
    }
    debug!(root = %root.display(), "no session logs found, trying cached snapshot");
    match store.read::<Snapshot>(keys::STATS) {
        Some(snapshot) => snapshot.claude,
        None => {
            warn!("no usage logs and no cached snapshot, reporting zeros");
            ClaudeUsage::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const USAGE_LINE_A: &str = r#"{"message":{"usage":{"input_tokens":100,"output_tokens":50,"cache_creation_input_tokens":10,"cache_read_input_tokens":5}}}"#;
    const USAGE_LINE_B: &str = r#"{"message":{"usage":{"input_tokens":200,"output_tokens":100}}}"#;

    fn write_log(dir: &Path, rel: &str, contents: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn counts_sessions_messages_and_tokens() {
        let dir = TempDir::new().unwrap();
        let body = format!("{USAGE_LINE_A}\nnot json at all\n{USAGE_LINE_B}\n");
        write_log(dir.path(), "proj-a/session1.jsonl", &body);
        write_log(dir.path(), "proj-b/nested/session2.jsonl", "");

        let usage = scan_logs(dir.path(), &Rates::default()).unwrap();
        assert_eq!(usage.sessions, 2);
        assert_eq!(usage.messages, 2);
        assert_eq!(usage.input_tokens, 300);
        assert_eq!(usage.output_tokens, 150);
        assert_eq!(usage.cache_creation_tokens, 10);
        assert_eq!(usage.cache_read_tokens, 5);
        assert_eq!(usage.total_tokens, 465);
    }

    #[test]
    fn lines_without_counters_are_not_messages() {
        let dir = TempDir::new().unwrap();
        let body = format!(
            "{}\n{}\n{USAGE_LINE_B}\n",
            r#"{"type":"summary","summary":"hi"}"#, r#"{"message":{"usage":{}}}"#
        );
        write_log(dir.path(), "proj/session.jsonl", &body);

        let usage = scan_logs(dir.path(), &Rates::default()).unwrap();
        assert_eq!(usage.messages, 1);
        assert_eq!(usage.input_tokens, 200);
    }

    #[test]
    fn non_jsonl_files_are_ignored() {
        let dir = TempDir::new().unwrap();
        write_log(dir.path(), "proj/notes.txt", USAGE_LINE_A);
        write_log(dir.path(), "proj/session.json", USAGE_LINE_A);

        assert!(scan_logs(dir.path(), &Rates::default()).is_none());
    }

    #[test]
    fn missing_root_yields_none() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("never-created");
        assert!(scan_logs(&gone, &Rates::default()).is_none());
    }

    #[test]
    fn cost_estimate_follows_rates() {
        let dir = TempDir::new().unwrap();
        write_log(dir.path(), "proj/session.jsonl", USAGE_LINE_A);

        let rates = Rates::default();
        let usage = scan_logs(dir.path(), &rates).unwrap();
        let expected = rates.estimate(100, 50, 10, 5);
        assert!((usage.cost_estimate - expected).abs() < 1e-12);
    }

    #[test]
    fn fallback_prefers_cached_snapshot_then_zeros() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::open(&dir.path().join("snap.db")).unwrap();
        let missing_root = dir.path().join("no-logs-here");

        let zeros = claude_usage_with_fallback(&missing_root, &Rates::default(), &store);
        assert_eq!(zeros.sessions, 0);
        assert_eq!(zeros.cost_estimate, 0.0);

        let cached = ClaudeUsage {
            sessions: 9,
            messages: 40,
            total_tokens: 1234,
            ..Default::default()
        };
        store
            .write(keys::STATS, &Snapshot::new(cached, Default::default()))
            .unwrap();

        let restored = claude_usage_with_fallback(&missing_root, &Rates::default(), &store);
        assert_eq!(restored.sessions, 9);
        assert_eq!(restored.total_tokens, 1234);
    }
}
