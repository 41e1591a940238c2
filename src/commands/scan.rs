use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::candidates;
use crate::config::{MARKER_DIR, ScanConfig};
use crate::git::GitPull;
use crate::search::{self, TreeSearch};
use crate::traits::SyncRunner;

/// Where a candidate directory ended up after the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirState {
    /// No `data` marker; not searched
    Skipped,
    /// Searched, nothing matched
    SearchedNoMatch,
    /// Matches found, sync not run
    SearchedMatch,
    /// Matches found and the sync command was started
    SyncAttempted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirOutcome {
    pub dir: PathBuf,
    pub state: DirState,
    pub matches: usize,
}

#[derive(Debug, Default)]
pub struct ScanSummary {
    pub dirs: Vec<DirOutcome>,
}

impl ScanSummary {
    #[must_use]
    pub fn outcome(&self, dir: &Path) -> Option<&DirOutcome> {
        self.dirs.iter().find(|outcome| outcome.dir == dir)
    }

    #[must_use]
    pub fn total_matches(&self) -> usize {
        self.dirs.iter().map(|outcome| outcome.matches).sum()
    }

    #[must_use]
    pub fn count(&self, state: DirState) -> usize {
        self.dirs.iter().filter(|outcome| outcome.state == state).count()
    }
}

/// Scans all candidate directories, printing matches to stdout
///
/// # Errors
/// Returns an error if the candidate directories cannot be enumerated.
/// Problems inside individual directories are logged and skipped.
pub fn run_scan(config: &ScanConfig) -> Result<ScanSummary> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_scan_with(config, &GitPull::new(), &mut out)
}

/// Test version that accepts a mock sync runner and output sink
///
/// # Errors
/// Returns an error if the candidate directories cannot be enumerated
pub fn run_scan_with(
    config: &ScanConfig,
    sync: &dyn SyncRunner,
    out: &mut dyn Write,
) -> Result<ScanSummary> {
    if let Some(duplicate) = config.duplicate_target() {
        warn!(
            "The file '{}' has been specified more than once.",
            duplicate
        );
    }

    let dirs = candidates::enumerate(&config.sources)
        .context("Error getting candidate directories")?;

    let mut summary = ScanSummary::default();
    for dir in dirs {
        let outcome = scan_directory(&dir, config, sync, out);
        summary.dirs.push(outcome);
    }

    debug!(
        "Scanned {} directories: {} skipped, {} matches",
        summary.dirs.len(),
        summary.count(DirState::Skipped),
        summary.total_matches()
    );

    Ok(summary)
}

fn scan_directory(
    dir: &Path,
    config: &ScanConfig,
    sync: &dyn SyncRunner,
    out: &mut dyn Write,
) -> DirOutcome {
    info!("Checking directory: {}", dir.display());

    let marker = dir.join(MARKER_DIR);
    if !search::is_qualified(dir) {
        info!("Data directory does not exist: {}", marker.display());
        return DirOutcome {
            dir: dir.to_path_buf(),
            state: DirState::Skipped,
            matches: 0,
        };
    }
    info!("Data directory exists: {}", marker.display());

    let mut matches = 0;
    for target in &config.targets {
        match search_target(dir, target, out) {
            Ok(found) => matches += found,
            Err(e) => warn!("Error walking the path {}: {:#}", dir.display(), e),
        }
    }

    DirOutcome {
        dir: dir.to_path_buf(),
        state: finish_directory(dir, matches, config, sync),
        matches,
    }
}

/// Runs the sync step for a searched directory when it had matches, syncing
/// is enabled, and the directory still exists.
fn finish_directory(
    dir: &Path,
    matches: usize,
    config: &ScanConfig,
    sync: &dyn SyncRunner,
) -> DirState {
    if matches == 0 {
        return DirState::SearchedNoMatch;
    }
    if !config.git_pull || std::fs::metadata(dir).is_err() {
        return DirState::SearchedMatch;
    }

    info!("Executing git pull in: {}", dir.display());
    // Sync failures are not surfaced.
    let _ = sync.pull(dir);
    DirState::SyncAttempted
}

/// Prints every match for one target pattern and returns how many there were.
/// An error drops the count for this pattern, even if some paths were printed.
fn search_target(dir: &Path, target: &str, out: &mut dyn Write) -> Result<usize> {
    let mut found = 0;

    for path in TreeSearch::new(dir, target)? {
        let path = path?;
        info!("Found {} file: {}", target, path.display());
        write_path(out, &path)?;
        found += 1;
    }

    Ok(found)
}

/// Writes `path` and a newline, keeping non-UTF-8 bytes intact on unix.
fn write_path(out: &mut dyn Write, path: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        out.write_all(path.as_os_str().as_bytes())?;
    }
    #[cfg(not(unix))]
    {
        write!(out, "{}", path.display())?;
    }

    out.write_all(b"\n")?;
    out.flush()
}
