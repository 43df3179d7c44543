use std::env;
use std::path::{Path, PathBuf};

use serde_json::json;
use vend_domain::{manifest_path, workspace_bin_dir, workspace_dir, WorkspaceConfig};

use super::{SandboxError, SandboxSession};
use crate::config::{EnvSnapshot, ACTIVE_ENV};
use crate::effects::SessionLauncher;
use crate::process::SessionExit;
use crate::ExecutionOutcome;

pub(crate) const GOPATH_ENV: &str = "GOPATH";
pub(crate) const GOBIN_ENV: &str = "GOBIN";
pub(crate) const WORKSPACE_GOPATH_ENV: &str = "VEND_GOPATH";
pub(crate) const PROJECT_ENV: &str = "VEND_PROJECT";
pub(crate) const MANIFEST_ENV: &str = "VEND_MANIFEST";
const PATH_ENV: &str = "PATH";
const SHELL_ENV: &str = "SHELL";

#[cfg(windows)]
const PATH_LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
const PATH_LIST_SEPARATOR: char = ':';

#[must_use]
pub fn workspace_path(cwd: &Path) -> PathBuf {
    workspace_dir(cwd)
}

/// Moves the process into `target` and returns the resulting working directory.
pub(crate) fn change_directory(target: &Path) -> Result<PathBuf, SandboxError> {
    env::set_current_dir(target).map_err(|source| SandboxError::TargetDirectory {
        path: target.to_path_buf(),
        source,
    })?;
    env::current_dir().map_err(SandboxError::WorkingDirectory)
}

/// The program run as the sandbox session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCommand {
    pub program: PathBuf,
    /// The word as written in the enter-command, passed to the child as argv[0].
    pub arg0: Option<String>,
    pub args: Vec<String>,
    /// Set when the program came from an enter-command override.
    pub custom: bool,
}

impl SessionCommand {
    pub(crate) fn resolve(
        enter_command: Option<&str>,
        env: &EnvSnapshot,
    ) -> Result<Self, SandboxError> {
        if let Some(raw) = enter_command {
            let mut words = raw.split_whitespace();
            let command = words.next().ok_or(SandboxError::EmptyEnterCommand)?;
            let program = which::which(command).map_err(|source| {
                SandboxError::CommandNotFound {
                    command: command.to_string(),
                    source,
                }
            })?;
            return Ok(Self {
                program,
                arg0: Some(command.to_string()),
                args: words.map(ToString::to_string).collect(),
                custom: true,
            });
        }
        let shell = env
            .var(SHELL_ENV)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(SandboxError::NoShell)?;
        Ok(Self {
            program: PathBuf::from(shell),
            arg0: None,
            args: Vec::new(),
            custom: false,
        })
    }

    #[must_use]
    pub fn argv(&self) -> Vec<String> {
        let first = match &self.arg0 {
            Some(arg0) => arg0.clone(),
            None => self.program.display().to_string(),
        };
        std::iter::once(first)
            .chain(self.args.iter().cloned())
            .collect()
    }
}

/// Variables layered over the inherited environment of the sandbox session.
#[must_use]
pub fn sandbox_environment(
    project_root: &Path,
    inherited_path: Option<&str>,
) -> Vec<(String, String)> {
    let workspace = workspace_dir(project_root).display().to_string();
    let bin = workspace_bin_dir(project_root).display().to_string();
    let path = match inherited_path {
        Some(existing) if !existing.is_empty() => format!("{existing}{PATH_LIST_SEPARATOR}{bin}"),
        _ => bin.clone(),
    };
    vec![
        (ACTIVE_ENV.to_string(), "1".to_string()),
        (GOPATH_ENV.to_string(), workspace.clone()),
        (GOBIN_ENV.to_string(), bin),
        (WORKSPACE_GOPATH_ENV.to_string(), workspace),
        (PATH_ENV.to_string(), path),
        (PROJECT_ENV.to_string(), project_root.display().to_string()),
        (
            MANIFEST_ENV.to_string(),
            manifest_path(project_root).display().to_string(),
        ),
    ]
}

/// Everything `enter` needs, computed before anything is spawned.
#[derive(Clone, Debug)]
pub struct EnterPlan {
    pub project_root: PathBuf,
    pub workspace: PathBuf,
    pub command: SessionCommand,
    pub envs: Vec<(String, String)>,
}

impl EnterPlan {
    pub(crate) fn prepare(
        config: &WorkspaceConfig,
        env: &EnvSnapshot,
    ) -> Result<Self, SandboxError> {
        let command = SessionCommand::resolve(config.enter_command.as_deref(), env)?;
        let project_root = config.project_root.clone();
        Ok(Self {
            workspace: workspace_dir(&project_root),
            envs: sandbox_environment(&project_root, env.var(PATH_ENV)),
            command,
            project_root,
        })
    }
}

/// Runs the sandbox session and blocks until it exits.
///
/// The child's exit status is returned as data; only a failure to start it is an error.
///
/// # Errors
/// Returns [`SandboxError::Launch`] if the session cannot be spawned.
pub fn enter(
    launcher: &dyn SessionLauncher,
    plan: &EnterPlan,
) -> Result<SessionExit, SandboxError> {
    launcher
        .launch(
            &plan.command.program,
            plan.command.arg0.as_deref(),
            &plan.command.args,
            &plan.envs,
            &plan.project_root,
        )
        .map_err(|err| SandboxError::Launch {
            program: plan.command.program.clone(),
            source: err.into(),
        })
}

/// Explains how to leave the current sandbox. Never changes any state.
#[must_use]
pub fn leave(session: SandboxSession) -> ExecutionOutcome {
    if session.is_active() {
        ExecutionOutcome::success(
            "to leave this sandbox, type 'exit' in the sandbox shell",
            json!({
                "active": true,
                "hint": "The sandbox ends when its shell exits.",
            }),
        )
    } else {
        ExecutionOutcome::success(
            "you are not currently inside a sandbox",
            json!({
                "active": false,
                "hint": "Run `vend enter` to start one.",
            }),
        )
    }
}
