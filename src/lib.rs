//! # Datascan
//!
//! A small CLI that looks through a fixed family of project checkouts for a
//! `data/` marker folder, prints every file whose name matches one of the
//! requested glob patterns, and can `git pull` the checkouts that had hits.
//!
//! ## Pipeline
//!
//! 1. **Enumerate** candidate directories: `~/pdev/tmp/northflier1..10`, whatever
//!    `~/pdev/tmp/northflier*` matches on disk, and a fixed supplementary list
//! 2. **Qualify** each candidate by the presence of a `data/` subdirectory
//! 3. **Search** each qualified tree once per target pattern, streaming matches
//!    to stdout
//! 4. **Sync** directories that produced at least one match, when enabled
//!
//! ## Quick Start
//!
//! ```bash
//! # Print every summary.txt under qualified checkouts
//! datascan
//!
//! # Look for several patterns and pull the checkouts that matched
//! datascan -file '*.log' -file summary.txt -git-pull -log
//! ```
//!
//! ## Module Structure
//!
//! - [`args`] - Accepts single-dash long flags (`-log`) alongside `--log`
//! - [`candidates`] - Home expansion and candidate directory enumeration
//! - [`commands`] - The scan pipeline and its per-directory outcomes
//! - [`config`] - Scan configuration and duplicate target detection
//! - [`git`] - `git -C <dir> pull` runner
//! - [`logging`] - tracing subscriber setup for the `-log` flag
//! - [`search`] - Marker qualification and tree searching
//! - [`traits`] - Defines the `SyncRunner` trait for testability

pub mod args;
pub mod candidates;
pub mod commands;
pub mod config;
pub mod git;
pub mod logging;
pub mod search;
pub mod traits;

pub use anyhow::Result;
