//! Command execution.
//!
//! Processes are spawned directly (program + argument vector) rather than
//! through a shell, so project names and URLs never need quoting. The
//! [`CommandRunner`] trait is the seam that lets the materializer and the
//! installer be tested without spawning real subprocesses.
//!
//! Programs are looked up on `PATH` with `which` before spawning, which
//! also finds the `.cmd` shims package managers install on Windows.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Result, ScaffoldError};

/// A program invocation: what to run and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name, resolved through `PATH`.
    pub program: String,
    /// Arguments passed verbatim (paths need not be UTF-8).
    pub args: Vec<OsString>,
    /// Working directory (inherits the current directory when `None`).
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    /// Create an invocation of `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }

    /// Best single-line description of why the command failed.
    pub fn failure_detail(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        match self.exit_code {
            Some(code) => format!("exited with code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Something that can run an [`Invocation`] to completion.
///
/// Spawn failures are returned as `Err`; a process that ran but exited
/// non-zero is an `Ok` result with `success == false`.
pub trait CommandRunner {
    /// Run the invocation and wait for it to exit.
    fn run(&self, invocation: &Invocation) -> Result<CommandResult>;
}

/// Runs commands as real child processes with captured output.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

/// Find `program` on `PATH`.
///
/// Names containing a path separator are checked as-is.
pub fn resolve_program(program: &str) -> Result<PathBuf> {
    which::which(program).map_err(|e| ScaffoldError::SpawnFailed {
        command: program.to_string(),
        message: e.to_string(),
    })
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandResult> {
        let program = resolve_program(&invocation.program)?;

        let mut cmd = Command::new(&program);
        cmd.args(&invocation.args);
        if let Some(cwd) = &invocation.cwd {
            cmd.current_dir(cwd);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        tracing::debug!(
            "Running `{}` ({}) in {:?}",
            invocation,
            program.display(),
            invocation.cwd
        );

        let output = cmd.output().map_err(|e| {
            tracing::debug!("Failed to spawn `{}`: {}", invocation.program, e);
            ScaffoldError::SpawnFailed {
                command: invocation.to_string(),
                message: e.to_string(),
            }
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(CommandResult::success(stdout, stderr))
        } else {
            tracing::debug!("`{}` exited with {:?}", invocation, output.status.code());
            Ok(CommandResult::failure(output.status.code(), stdout, stderr))
        }
    }
}
