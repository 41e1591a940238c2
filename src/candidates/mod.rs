use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::CandidateSources;

/// Expands a leading `~` to the current user's home directory
///
/// `~` and `~/rest` are expanded; any other path is returned unchanged.
///
/// # Errors
/// Returns an error if:
/// - The path uses the `~user` form, which is not supported
/// - Failed to determine the home directory
pub fn expand_home(path: &str) -> Result<PathBuf> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };

    if !rest.is_empty() && !rest.starts_with(['/', std::path::MAIN_SEPARATOR]) {
        anyhow::bail!("Cannot expand user-specific home directory: {}", path);
    }

    let home = dirs::home_dir().context("Failed to get user home directory")?;
    let rest = rest.trim_start_matches(['/', std::path::MAIN_SEPARATOR]);

    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

/// Builds the de-duplicated set of directories to inspect
///
/// Merges the numbered range `<tmp_root>/<prefix>1..=count`, every path
/// currently matching `<tmp_root>/<prefix>*`, and the extra directories.
/// Paths are compared after home expansion; no canonicalization happens.
/// Callers should not rely on the order of the result.
///
/// # Errors
/// Returns an error if:
/// - Any path needs home expansion and the home directory is unavailable
/// - The wildcard pattern is invalid
pub fn enumerate(sources: &CandidateSources) -> Result<Vec<PathBuf>> {
    let mut dirs = BTreeSet::new();

    for n in 1..=sources.count {
        let dir = format!("{}/{}{}", sources.tmp_root, sources.prefix, n);
        dirs.insert(expand_home(&dir)?);
    }

    let tmp_root = expand_home(&sources.tmp_root)?;
    for dir in glob_candidates(&tmp_root, &sources.prefix)? {
        dirs.insert(dir);
    }

    for dir in &sources.extra_dirs {
        dirs.insert(expand_home(dir)?);
    }

    Ok(dirs.into_iter().collect())
}

fn glob_candidates(tmp_root: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/{}*",
        glob::Pattern::escape(&tmp_root.to_string_lossy()),
        prefix
    );

    let entries = glob::glob(&pattern)
        .with_context(|| format!("Invalid candidate directory pattern: {}", pattern))?;

    let mut matches = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => matches.push(path),
            Err(e) => tracing::debug!("Skipping unreadable candidate: {}", e),
        }
    }

    Ok(matches)
}
