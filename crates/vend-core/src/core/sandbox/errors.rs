use std::path::PathBuf;

use serde_json::{json, Value};

use crate::ExecutionOutcome;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(thiserror::Error, Debug)]
pub enum SandboxError {
    #[error("unable to determine the working directory")]
    WorkingDirectory(#[source] std::io::Error),
    #[error("cannot enter {}: {source}", path.display())]
    TargetDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("vend.toml is missing from {}", dir.display())]
    MissingManifest { dir: PathBuf },
    #[error("enter-command is empty")]
    EmptyEnterCommand,
    #[error("enter-command `{command}` was not found on PATH")]
    CommandNotFound {
        command: String,
        #[source]
        source: which::Error,
    },
    #[error("SHELL is not set; cannot pick a shell for the sandbox")]
    NoShell,
    #[error("failed to start {}", program.display())]
    Launch {
        program: PathBuf,
        #[source]
        source: BoxError,
    },
}

impl SandboxError {
    /// Renders environment-discovery failures for the CLI.
    ///
    /// Launch failures are left to the caller; they propagate as errors.
    pub(crate) fn into_outcome(self) -> Result<ExecutionOutcome, Self> {
        match self.details() {
            Some(details) => Ok(ExecutionOutcome::user_error(self.to_string(), details)),
            None => Err(self),
        }
    }

    fn details(&self) -> Option<Value> {
        let details = match self {
            SandboxError::WorkingDirectory(source) => json!({
                "reason": "working_directory",
                "error": source.to_string(),
            }),
            SandboxError::TargetDirectory { path, source } => json!({
                "reason": "target_directory",
                "target": path.display().to_string(),
                "error": source.to_string(),
                "hint": "Pass an existing project directory to `vend enter`.",
            }),
            SandboxError::MissingManifest { dir } => json!({
                "reason": "missing_manifest",
                "project_root": dir.display().to_string(),
                "manifest": vend_domain::manifest_path(dir).display().to_string(),
                "hint": "Run vend from a directory that contains vend.toml.",
            }),
            SandboxError::EmptyEnterCommand => json!({
                "reason": "empty_enter_command",
                "hint": "Set VEND_ENTER_COMMAND or [tool.vend].enter-command to a command.",
            }),
            SandboxError::CommandNotFound { command, .. } => json!({
                "reason": "enter_command_not_found",
                "command": command,
                "hint": "Install the command or fix VEND_ENTER_COMMAND / [tool.vend].enter-command.",
            }),
            SandboxError::NoShell => json!({
                "reason": "no_shell",
                "hint": "Export SHELL or set VEND_ENTER_COMMAND to the program to run.",
            }),
            SandboxError::Launch { .. } => return None,
        };
        Some(details)
    }
}
