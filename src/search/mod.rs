use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::MARKER_DIR;

/// Checks whether `dir` has a `data` subdirectory directly beneath it.
///
/// A missing directory, a missing marker, or any other stat failure all
/// count as not qualified.
#[must_use]
pub fn is_qualified(dir: &Path) -> bool {
    fs::metadata(dir.join(MARKER_DIR)).is_ok_and(|meta| meta.is_dir())
}

/// Lazily walks a directory tree and yields files whose base name matches a
/// glob pattern.
///
/// Traversal is pre-order and does not follow symlinks. Every entry that is
/// not a directory is a match candidate. Yielded paths are absolute but not
/// symlink-resolved. A traversal error is yielded once and ends the walk.
pub struct TreeSearch {
    walker: walkdir::IntoIter,
    pattern: glob::Pattern,
    failed: bool,
}

impl TreeSearch {
    /// Prepares a search of `root` for `pattern`
    ///
    /// # Errors
    /// Returns an error if `pattern` is not a valid glob
    pub fn new(root: &Path, pattern: &str) -> Result<Self> {
        let pattern = glob::Pattern::new(pattern)
            .with_context(|| format!("Invalid file pattern '{}'", pattern))?;

        Ok(Self {
            walker: WalkDir::new(root).into_iter(),
            pattern,
            failed: false,
        })
    }

    fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.pattern.matches(&name.to_string_lossy()))
    }
}

impl Iterator for TreeSearch {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(
                        anyhow::Error::new(e).context("Failed to walk directory tree")
                    ));
                }
            };

            if entry.file_type().is_dir() || !self.matches(entry.path()) {
                continue;
            }

            return Some(
                std::path::absolute(entry.path())
                    .with_context(|| format!("Failed to resolve {}", entry.path().display())),
            );
        }
    }
}
