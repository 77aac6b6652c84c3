//! Spawning the external programs the launcher relies on, currently only
//! the desktop opener.
use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::process::Command;

/// A program plus the arguments it is always given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl Invocation {
    /// `program` with its fixed `prefix` arguments followed by `target`.
    #[must_use]
    pub fn new(program: &'static str, prefix: &[&str], target: &str) -> Self {
        let mut args: Vec<String> = prefix.iter().map(|a| (*a).to_string()).collect();
        args.push(target.to_string());
        Self { program, args }
    }

    /// Absolute location of the program on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be found.
    pub fn locate(&self) -> Result<PathBuf> {
        which::which(self.program).with_context(|| format!("{} not found on PATH", self.program))
    }

    /// Run to completion, failing on a non-zero exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the program is missing, cannot be started, or
    /// exits non-zero. The message carries the program's stderr.
    pub fn run(&self) -> Result<()> {
        let program = self.locate()?;
        let output = Command::new(&program)
            .args(&self.args)
            .output()
            .with_context(|| format!("failed to start {}", program.display()))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "{} {} exited with {}: {}",
                self.program,
                self.args.join(" "),
                output
                    .status
                    .code()
                    .map_or_else(|| "a signal".to_string(), |c| format!("status {c}")),
                stderr.trim()
            );
        }
        Ok(())
    }
}
