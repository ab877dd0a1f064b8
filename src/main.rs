use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use nfogen::cache::{SnapshotStore, default_db_path, keys};
use nfogen::cli::{Args, Command};
use nfogen::display::{centered_in_terminal, color_enabled, render_terminal};
use nfogen::github::{RetryPolicy, github_usage_with_fallback};
use nfogen::models::{GithubUsage, Snapshot};
use nfogen::pricing::Rates;
use nfogen::rows::build_rows;
use nfogen::svg::render_svg;
use nfogen::theme::ColorMode;
use nfogen::transport::GithubHttp;
use nfogen::usage::claude_usage_with_fallback;
use nfogen::utils::default_claude_root;

fn main() -> Result<()> {
    // stdout carries the rendered output, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let rates = Rates::from_env();
    let claude_root = default_claude_root(args.claude_dir.as_deref());
    let db_path = default_db_path(args.db_path.as_deref())?;
    let store = SnapshotStore::open(&db_path)
        .with_context(|| format!("failed to open snapshot store at {}", db_path.display()))?;
    let retry = RetryPolicy::default();

    let claude = claude_usage_with_fallback(&claude_root, &rates, &store);
    let fetch_github = || {
        let transport = GithubHttp::new();
        github_usage_with_fallback(&transport, &args.login, &retry, &store)
    };

    match args.command.clone().unwrap_or(Command::Preview { fetch: false }) {
        Command::Preview { fetch } => {
            let github: GithubUsage = if fetch {
                fetch_github()
            } else {
                store.read(keys::GITHUB_STATS).unwrap_or_default()
            };
            let rows = build_rows(&claude, &github, Local::now().date_naive());
            let block = render_terminal(&rows, color_enabled(args.no_color));
            print!("{}", centered_in_terminal(&block));
        }
        Command::Svg { out_dir } => {
            let github = fetch_github();
            let rows = build_rows(&claude, &github, Local::now().date_naive());
            let dir = Path::new(&out_dir);
            for mode in [ColorMode::Dark, ColorMode::Light] {
                let path = dir.join(format!("{}.svg", mode.file_stem()));
                fs::write(&path, render_svg(&rows, mode))
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Generated: {}", path.display());
            }
        }
        Command::Save => {
            let github = fetch_github();
            store.write(keys::GITHUB_STATS, &github)?;
            store.write(keys::STATS, &Snapshot::new(claude, github))?;
            println!("Saved snapshots to {}", db_path.display());
        }
    }

    Ok(())
}
