//! Running look(1) and decoding what it prints.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, trace};

/// Default program name, resolved through `PATH`.
pub const LOOK_PROGRAM: &str = "look";

/// Something that answers a look invocation with its raw standard output.
///
/// `LookCommand` spawns the real binary; tests plug in word lists.
pub trait Lookup {
    fn lookup(&self, args: &[String]) -> Result<String>;
}

/// Spawns look as a child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookCommand {
    program: PathBuf,
}

impl Default for LookCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl LookCommand {
    pub fn new() -> Self {
        Self::with_program(LOOK_PROGRAM)
    }

    /// Use a different binary, e.g. an absolute path to look.
    pub fn with_program<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Lookup for LookCommand {
    /// Run the program and return its stdout.
    ///
    /// A non-zero exit is not an error: look exits with 1 when nothing
    /// matches. Only failing to spawn or read the child is reported.
    fn lookup(&self, args: &[String]) -> Result<String> {
        debug!(program = %self.program.display(), ?args, "running lookup");
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .with_context(|| format!("failed to run `{}`", self.program.display()))?;

        if !output.status.success() {
            debug!(status = %output.status, "lookup exited unsuccessfully");
        }
        trace!(bytes = output.stdout.len(), "lookup output");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn lookup(&self, args: &[String]) -> Result<String> {
        (**self).lookup(args)
    }
}

/// One word per non-blank line, with surrounding whitespace trimmed.
pub fn parse_output(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
