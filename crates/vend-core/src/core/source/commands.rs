use anyhow::Result;
use serde_json::{json, Value};
use tracing::debug;
use vend_domain::Dependency;

use super::{fetcher_for, SourceError};
use crate::{CommandContext, ExecutionOutcome};

#[derive(Clone, Debug)]
pub struct SourceRequest {
    pub names: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct PinRequest {
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FetchMode {
    Get,
    Update,
}

impl FetchMode {
    fn verb(self) -> &'static str {
        match self {
            FetchMode::Get => "fetched",
            FetchMode::Update => "updated",
        }
    }
}

/// Fetches each named dependency into the toolchain's package tree.
///
/// # Errors
/// Returns an error if configuration cannot be loaded.
pub fn source_get(ctx: &CommandContext, request: &SourceRequest) -> Result<ExecutionOutcome> {
    fetch_all(ctx, request, FetchMode::Get)
}

/// Refreshes each named dependency, re-fetching copies that already exist.
///
/// # Errors
/// Returns an error if configuration cannot be loaded.
pub fn source_update(ctx: &CommandContext, request: &SourceRequest) -> Result<ExecutionOutcome> {
    fetch_all(ctx, request, FetchMode::Update)
}

fn fetch_all(
    ctx: &CommandContext,
    request: &SourceRequest,
    mode: FetchMode,
) -> Result<ExecutionOutcome> {
    if request.names.iter().all(|name| name.trim().is_empty()) {
        return Ok(ExecutionOutcome::user_error(
            "no dependencies given",
            json!({ "hint": "pass one or more import paths, e.g. `vend get golang.org/x/text`" }),
        ));
    }
    let config = ctx.config()?;
    let program = config.toolchain().program.as_str();
    let toolchain = ctx.effects().toolchain();

    let mut done: Vec<Value> = Vec::new();
    for name in request.names.iter().map(|name| name.trim()) {
        if name.is_empty() {
            continue;
        }
        let dependency = Dependency::without_repository(name);
        debug!(dependency = %dependency, ?mode, "fetching dependency");
        let result = fetcher_for(&dependency, toolchain, program, ctx.cwd()).and_then(|fetcher| {
            match mode {
                FetchMode::Get => fetcher.get(&dependency)?,
                FetchMode::Update => fetcher.update(&dependency)?,
            }
            fetcher.last_commit(&dependency)
        });
        match result {
            Ok(revision) => done.push(json!({
                "name": dependency.name,
                "source": dependency.source,
                "revision": (!revision.is_empty()).then_some(revision),
            })),
            Err(err) => return Ok(fetch_error_outcome(&err, program, done)),
        }
    }

    let count = done.len();
    let noun = if count == 1 { "dependency" } else { "dependencies" };
    Ok(ExecutionOutcome::success(
        format!("{} {count} {noun}", mode.verb()),
        json!({ "dependencies": done }),
    ))
}

fn fetch_error_outcome(err: &SourceError, program: &str, done: Vec<Value>) -> ExecutionOutcome {
    match err {
        SourceError::FetchFailed { name, code, output } => ExecutionOutcome::failure(
            err.to_string(),
            json!({
                "reason": "fetch_failed",
                "dependency": name,
                "exit_code": code,
                "output": output,
                "completed": done,
                "hint": "Check the import path and your network access, then rerun.",
            }),
        ),
        SourceError::Spawn { source, .. } => ExecutionOutcome::user_error(
            err.to_string(),
            json!({
                "reason": "toolchain_unavailable",
                "dependency": err.dependency(),
                "program": program,
                "error": source.to_string(),
                "completed": done,
                "hint": "Install the Go toolchain or point VEND_GO at the `go` binary.",
            }),
        ),
        SourceError::Unpinnable { .. } | SourceError::UnsupportedBackend { .. } => {
            ExecutionOutcome::user_error(
                err.to_string(),
                json!({
                    "reason": "unsupported_source",
                    "dependency": err.dependency(),
                    "completed": done,
                }),
            )
        }
    }
}

/// Pins a dependency to the revision its backend reports.
///
/// # Errors
/// Returns an error if configuration cannot be loaded.
pub fn source_pin(ctx: &CommandContext, request: &PinRequest) -> Result<ExecutionOutcome> {
    let name = request.name.trim();
    if name.is_empty() {
        return Ok(ExecutionOutcome::user_error(
            "no dependency given",
            json!({ "hint": "pass the import path to pin, e.g. `vend pin golang.org/x/text`" }),
        ));
    }
    let config = ctx.config()?;
    let program = config.toolchain().program.as_str();
    let dependency = Dependency::without_repository(name);
    let result = fetcher_for(&dependency, ctx.effects().toolchain(), program, ctx.cwd())
        .and_then(|fetcher| {
            fetcher.version(&dependency)?;
            fetcher.last_commit(&dependency)
        });
    match result {
        Ok(revision) => Ok(ExecutionOutcome::success(
            format!("pinned {name}"),
            json!({
                "dependency": name,
                "revision": (!revision.is_empty()).then_some(revision),
            }),
        )),
        Err(err @ SourceError::Unpinnable { .. }) => Ok(ExecutionOutcome::user_error(
            err.to_string(),
            json!({
                "reason": "unpinnable",
                "dependency": name,
                "hint": "Declare a repository for this dependency to pin its version.",
            }),
        )),
        Err(err) => Ok(fetch_error_outcome(&err, program, Vec::new())),
    }
}
