//! # nfogen
//!
//! A one-shot profile stats generator that renders a warez-NFO-style block
//! from two sources:
//! - local Claude Code transcript logs (sessions, messages, token counters,
//!   an estimated API cost)
//! - the GitHub GraphQL/REST APIs (repos, commits, PRs, stars, follower
//!   counts, lines-of-code totals)
//!
//! Output targets are an ANSI-bordered terminal block and a pair of
//! dark/light SVG files. Aggregation is best-effort: anything that cannot
//! be fetched degrades to a cached snapshot and then to zeros, so a render
//! is always produced.
//!
//! ## Features
//!
//! - `colors` (default): Enables terminal color output via owo-colors

/// Decorative literals: header art, section banners, profile copy
pub mod art;

/// SQLite-backed snapshot store for offline fallback
pub mod cache;

/// Command-line argument parsing
pub mod cli;

/// Terminal block renderer
pub mod display;

/// GitHub stats aggregation over GraphQL and REST
pub mod github;

/// Data models for usage records, snapshots, and render rows
pub mod models;

/// Per-token rates and the cost estimate
pub mod pricing;

/// Logical row construction shared by both renderers
pub mod rows;

/// SVG renderer
pub mod svg;

/// Tone palettes and ANSI painting
pub mod theme;

/// HTTP transport abstraction over the GitHub APIs
pub mod transport;

/// Local transcript log scanning
pub mod usage;

/// Utility functions for paths and number formatting
pub mod utils;
