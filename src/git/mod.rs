use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::traits::SyncRunner;

/// Default version-control client used for syncing
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Runs `<program> -C <dir> pull` for directories with matches.
pub struct GitPull {
    program: String,
}

impl GitPull {
    #[must_use]
    pub fn new() -> Self {
        Self::with_program(DEFAULT_GIT_PROGRAM)
    }

    /// Uses a different client binary, resolved through `PATH` like `git`
    #[must_use]
    pub fn with_program(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    fn pull_command(&self, dir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-C")
            .arg(dir)
            .arg("pull")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl Default for GitPull {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncRunner for GitPull {
    fn pull(&self, dir: &Path) -> Result<()> {
        // Blocks until the child exits; its status is dropped.
        let _status = self
            .pull_command(dir)
            .status()
            .with_context(|| format!("Failed to execute {} pull in {}", self.program, dir.display()))?;
        Ok(())
    }
}
