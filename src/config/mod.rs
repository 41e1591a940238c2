//! Scan configuration.
//!
//! Everything the pipeline needs is carried in a [`ScanConfig`] built once
//! from the parsed command line:
//! - Output and sync switches (`-log`, `-git-pull`)
//! - Target filename patterns (`-file`, defaulting to `summary.txt`)
//! - The candidate directory sources, which are fixed
//!
//! # Candidate Sources
//!
//! ```text
//! ~/pdev/tmp/northflier1 .. ~/pdev/tmp/northflier10   numbered range
//! ~/pdev/tmp/northflier*                              glob, evaluated at scan time
//! ~/pdev/taylormonacelli/northflier                   supplementary list
//! ```

use std::collections::HashSet;

/// Target filename used when `-file` is never given
pub const DEFAULT_TARGET: &str = "summary.txt";

/// Name of the subdirectory that qualifies a candidate for searching
pub const MARKER_DIR: &str = "data";

/// Complete configuration for one scan run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Emit progress lines on stderr
    pub log: bool,

    /// Run the sync command on directories with matches
    pub git_pull: bool,

    /// Target filename glob patterns, in the order given
    pub targets: Vec<String>,

    /// Where candidate directories come from
    pub sources: CandidateSources,
}

/// The three sources merged into the candidate directory set.
///
/// Paths may start with `~`; they are expanded during enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSources {
    /// Directory holding the numbered checkouts
    pub tmp_root: String,

    /// Name prefix shared by the numbered checkouts
    pub prefix: String,

    /// Highest number in the synthetic `<prefix>1..=<count>` range
    pub count: u32,

    /// Extra directories always considered
    pub extra_dirs: Vec<String>,
}

impl Default for CandidateSources {
    fn default() -> Self {
        Self {
            tmp_root: "~/pdev/tmp".to_string(),
            prefix: "northflier".to_string(),
            count: 10,
            extra_dirs: vec!["~/pdev/taylormonacelli/northflier".to_string()],
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::from_flags(false, false, Vec::new())
    }
}

impl ScanConfig {
    /// Builds the configuration from command line flags.
    ///
    /// An empty target list falls back to [`DEFAULT_TARGET`].
    #[must_use]
    pub fn from_flags(log: bool, git_pull: bool, targets: Vec<String>) -> Self {
        let targets = if targets.is_empty() {
            vec![DEFAULT_TARGET.to_string()]
        } else {
            targets
        };

        Self {
            log,
            git_pull,
            targets,
            sources: CandidateSources::default(),
        }
    }

    /// Replaces the candidate sources
    #[must_use]
    pub fn with_sources(mut self, sources: CandidateSources) -> Self {
        self.sources = sources;
        self
    }

    /// Returns the first target pattern given more than once, if any
    #[must_use]
    pub fn duplicate_target(&self) -> Option<&str> {
        find_duplicate(&self.targets)
    }
}

/// Finds the first value that repeats an earlier one, in list order.
///
/// With `["a", "b", "a"]` this is `Some("a")`; with `["a", "b"]` it is `None`.
#[must_use]
pub fn find_duplicate<S: AsRef<str>>(items: &[S]) -> Option<&str> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(S::as_ref)
        .find(|item| !seen.insert(*item))
}
