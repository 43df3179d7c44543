use std::ops::ControlFlow;
use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;
use tracing::{debug, info};

use super::controller::{change_directory, enter, leave, workspace_path, EnterPlan};
use super::{already_sandboxed, valid_project_root, SandboxError};
use crate::{CommandContext, ExecutionOutcome};

#[derive(Clone, Debug, Default)]
pub struct EnterRequest {
    /// Project directory to switch into before entering.
    pub target: Option<PathBuf>,
}

/// Reports the workspace path for editors and other tooling.
///
/// # Errors
/// Never fails once the context exists; kept fallible for dispatcher symmetry.
pub fn sandbox_path(ctx: &CommandContext) -> Result<ExecutionOutcome> {
    let workspace = workspace_path(ctx.cwd());
    Ok(ExecutionOutcome::success(
        workspace.display().to_string(),
        json!({
            "passthrough": true,
            "workspace": workspace.display().to_string(),
        }),
    ))
}

/// Enters the sandbox: starts a session with the workspace environment and
/// blocks until it exits.
///
/// # Errors
/// Returns an error if the session cannot be started or configuration is unreadable.
pub fn sandbox_enter(ctx: &CommandContext, request: &EnterRequest) -> Result<ExecutionOutcome> {
    if let ControlFlow::Break(outcome) = already_sandboxed(ctx.session()) {
        return Ok(outcome);
    }

    let target = request
        .target
        .as_deref()
        .filter(|path| !path.as_os_str().is_empty());
    let project_root = match target {
        Some(target) => match change_directory(target) {
            Ok(dir) => dir,
            Err(err) => return discovery_outcome(err),
        },
        None => ctx.cwd().to_path_buf(),
    };
    if let Err(err) = valid_project_root(&project_root) {
        return discovery_outcome(err);
    }

    let config = ctx.config_for(&project_root)?;
    let plan = match EnterPlan::prepare(config.workspace(), ctx.env()) {
        Ok(plan) => plan,
        Err(err) => return discovery_outcome(err),
    };
    debug!(
        program = %plan.command.program.display(),
        args = ?plan.command.args,
        "starting sandbox session"
    );

    if !ctx.global.quiet {
        if plan.command.custom {
            eprintln!(">> Running custom 'vend enter': {:?}", plan.command.argv());
        } else {
            eprintln!(">> You are now entering a new sandbox shell. To exit, type 'exit'");
        }
    }

    let exit = enter(ctx.effects().sessions(), &plan)?;
    info!(status = %exit, clean = exit.success(), "sandbox session ended");
    Ok(ExecutionOutcome::success(
        format!("exited sandbox shell: {exit}"),
        json!({
            "exit_code": exit.code,
            "status": exit.description,
            "workspace": plan.workspace.display().to_string(),
            "project_root": plan.project_root.display().to_string(),
            "command": plan.command.argv(),
            "custom_command": plan.command.custom,
        }),
    ))
}

/// Explains how to leave the current sandbox.
///
/// # Errors
/// Never fails; kept fallible for dispatcher symmetry.
pub fn sandbox_leave(ctx: &CommandContext) -> Result<ExecutionOutcome> {
    Ok(leave(ctx.session()))
}

fn discovery_outcome(err: SandboxError) -> Result<ExecutionOutcome> {
    err.into_outcome().map_err(anyhow::Error::from)
}
