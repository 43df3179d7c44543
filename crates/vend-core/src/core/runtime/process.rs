use std::{
    fmt,
    path::Path,
    process::{Command, ExitStatus, Stdio},
};

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct RunOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// Stdout followed by stderr, for scanning a tool's diagnostics as one text.
    #[must_use]
    pub fn combined(&self) -> String {
        let mut text = String::with_capacity(self.stdout.len() + self.stderr.len());
        text.push_str(&self.stdout);
        text.push_str(&self.stderr);
        text
    }
}

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionExit {
    pub code: Option<i32>,
    pub description: String,
}

impl SessionExit {
    #[must_use]
    pub fn from_status(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
            description: status.to_string(),
        }
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for SessionExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Execute a program and capture stdout/stderr.
///
/// # Errors
///
/// Returns an error when the program cannot be spawned.
pub fn run_command(program: &str, args: &[String], cwd: &Path) -> Result<RunOutput> {
    let mut command = Command::new(program);
    command.args(args);
    command.current_dir(cwd);
    command.stdin(Stdio::null());

    let output = command
        .output()
        .with_context(|| format!("failed to start {program}"))?;
    let code = output.status.code().unwrap_or(-1);
    Ok(RunOutput {
        code,
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Execute a program attached to the caller's terminal and wait for it to exit.
///
/// `envs` are layered on top of the inherited environment. On Unix, `arg0`
/// replaces the resolved program path as the child's argv[0].
///
/// # Errors
///
/// Returns an error when the program cannot be spawned or waited on.
pub fn run_command_passthrough(
    program: &Path,
    arg0: Option<&str>,
    args: &[String],
    envs: &[(String, String)],
    cwd: &Path,
) -> Result<SessionExit> {
    let mut command = Command::new(program);
    set_arg0(&mut command, arg0);
    command.args(args);
    for (key, value) in envs {
        command.env(key, value);
    }
    command.current_dir(cwd);
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    let status = command
        .status()
        .with_context(|| format!("failed to start {}", program.display()))?;
    Ok(SessionExit::from_status(status))
}

#[cfg(unix)]
fn set_arg0(command: &mut Command, arg0: Option<&str>) {
    use std::os::unix::process::CommandExt;

    if let Some(arg0) = arg0 {
        command.arg0(arg0);
    }
}

#[cfg(not(unix))]
fn set_arg0(_command: &mut Command, _arg0: Option<&str>) {}
