use anyhow::Result;
use std::path::Path;

/// Trait for directory sync operations to enable mocking in tests
pub trait SyncRunner {
    /// Runs the sync command against `dir`.
    ///
    /// Only failing to start the command is an error; its exit status and
    /// output are not reported.
    ///
    /// # Errors
    /// Returns an error if the sync command could not be spawned
    fn pull(&self, dir: &Path) -> Result<()>;
}
