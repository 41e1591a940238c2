#![allow(clippy::unwrap_used)] // Tests use unwrap for simplicity

use anyhow::{Context, Result};
use assert_fs::TempDir;
use assert_fs::prelude::*;

use std::path::PathBuf;

/// Isolated home directory plus a fake `git` that records its arguments
pub struct ScanTestEnvironment {
    pub home_dir: assert_fs::fixture::ChildPath,
    pub bin_dir: assert_fs::fixture::ChildPath,
    pub git_log: assert_fs::fixture::ChildPath,
    _temp_dir: TempDir, // Keep temp_dir private to ensure cleanup, but don't expose it
}

impl ScanTestEnvironment {
    /// Creates a new test environment with an empty home and a fake git client
    ///
    /// # Errors
    /// Returns an error if:
    /// - Failed to create temporary directory
    /// - Failed to write the fake git script
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temporary directory")?;
        let home_dir = temp_dir.child("home");
        let bin_dir = temp_dir.child("bin");
        let git_log = temp_dir.child("git-calls.log");

        home_dir.create_dir_all()?;
        bin_dir.create_dir_all()?;

        Self::install_fake_git(&bin_dir, &git_log)?;

        Ok(Self {
            home_dir,
            bin_dir,
            git_log,
            _temp_dir: temp_dir,
        })
    }

    /// Write a `git` script that appends its arguments to `git_log`
    fn install_fake_git(
        bin_dir: &assert_fs::fixture::ChildPath,
        git_log: &assert_fs::fixture::ChildPath,
    ) -> Result<()> {
        let script = bin_dir.child("git");
        script.write_str(&format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\n",
            git_log.path().display()
        ))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(script.path(), std::fs::Permissions::from_mode(0o755))
                .context("Failed to make fake git executable")?;
        }

        Ok(())
    }

    /// Path of a numbered checkout under `~/pdev/tmp`
    pub fn checkout(&self, name: &str) -> assert_fs::fixture::ChildPath {
        self.home_dir.child("pdev").child("tmp").child(name)
    }

    /// Create a checkout, optionally with the `data` marker, holding the given files
    ///
    /// # Errors
    /// Returns an error if any directory or file cannot be created
    pub fn create_checkout(
        &self,
        name: &str,
        with_data: bool,
        files: &[&str],
    ) -> Result<assert_fs::fixture::ChildPath> {
        let checkout = self.checkout(name);
        checkout.create_dir_all()?;
        if with_data {
            checkout.child("data").create_dir_all()?;
        }
        for file in files {
            checkout.child(file).write_str("contents")?;
        }
        Ok(checkout)
    }

    /// Execute the CLI with `HOME` and `PATH` pointed at this environment
    ///
    /// # Errors
    /// Returns an error if the command setup fails
    pub fn run_command(&self, args: &[&str]) -> Result<assert_cmd::Command> {
        let mut cmd = assert_cmd::Command::cargo_bin("datascan")
            .context("Failed to find datascan binary")?;

        let mut paths = vec![self.bin_dir.path().to_path_buf()];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        let path = std::env::join_paths(paths).context("Failed to build PATH")?;

        cmd.current_dir(self.home_dir.path())
            .env("HOME", self.home_dir.path())
            .env("PATH", path)
            .env_remove("RUST_LOG");

        cmd.args(args);
        Ok(cmd)
    }

    /// Lines recorded by the fake git, one per invocation
    pub fn git_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.git_log.path())
            .map(|content| content.lines().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    /// Absolute path of a file inside the environment's home
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use predicates::prelude::*;

    #[test]
    fn test_environment_creation() -> Result<()> {
        let env = ScanTestEnvironment::new()?;

        env.home_dir.assert(predicate::path::is_dir());
        env.bin_dir.child("git").assert(predicate::str::contains("git-calls.log"));
        assert!(env.git_calls().is_empty());

        Ok(())
    }

    #[test]
    fn test_create_checkout() -> Result<()> {
        let env = ScanTestEnvironment::new()?;

        let checkout = env.create_checkout("northflier1", true, &["data/summary.txt"])?;

        checkout.child("data").assert(predicate::path::is_dir());
        checkout
            .child("data/summary.txt")
            .assert(predicate::path::is_file());
        assert_eq!(
            checkout.path(),
            env.home_path("pdev/tmp/northflier1").as_path()
        );

        Ok(())
    }
}
