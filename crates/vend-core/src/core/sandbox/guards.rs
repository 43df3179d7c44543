//! Preconditions checked before any sandbox transition.

use std::ops::ControlFlow;
use std::path::Path;

use serde_json::json;
use tracing::warn;
use vend_domain::manifest_exists;

use super::{SandboxError, SandboxSession};
use crate::ExecutionOutcome;

#[must_use]
pub fn is_sandboxed(session: SandboxSession) -> bool {
    session.is_active()
}

/// Halts processing when a sandbox is already active in this process tree.
///
/// A `Break` is a deliberate stop, not a failure: its outcome carries
/// [`crate::CommandStatus::Stopped`].
pub fn already_sandboxed(session: SandboxSession) -> ControlFlow<ExecutionOutcome> {
    if !is_sandboxed(session) {
        return ControlFlow::Continue(());
    }
    warn!("already inside a vend sandbox; run `vend leave` to stop the current one first");
    ControlFlow::Break(ExecutionOutcome::stopped(
        "already inside a sandbox",
        json!({
            "reason": "already_sandboxed",
            "hint": "Run `vend leave` and exit the current sandbox shell first.",
        }),
    ))
}

/// Fails unless `dir` holds the project manifest.
///
/// # Errors
/// Returns [`SandboxError::MissingManifest`] naming `dir`.
pub fn valid_project_root(dir: &Path) -> Result<(), SandboxError> {
    if manifest_exists(dir) {
        Ok(())
    } else {
        Err(SandboxError::MissingManifest {
            dir: dir.to_path_buf(),
        })
    }
}
