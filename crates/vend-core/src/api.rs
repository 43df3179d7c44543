// Intended public API surface for `vend-core`.
//
// This module keeps the crate root small and makes it explicit which
// types/functions are part of the interface used by the CLI.

pub use crate::core::config::context::{CommandContext, CommandInfo};
pub use crate::core::config::{Config, GlobalOptions, ToolchainConfig};
pub use crate::core::runtime::effects::SystemEffects;
pub use crate::core::runtime::process::SessionExit;
pub use crate::core::runtime::{
    format_status_message, manifest_error_outcome, to_json_response, CommandGroup,
};
pub use crate::core::sandbox::{
    already_sandboxed, enter, is_sandboxed, leave, sandbox_enter, sandbox_environment,
    sandbox_leave, sandbox_path, valid_project_root, workspace_path, EnterPlan, EnterRequest,
    SandboxError, SandboxSession, SessionCommand,
};
pub use crate::core::source::{
    fetcher_for, source_get, source_pin, source_update, GoGetBackend, PinRequest, SourceError,
    SourceFetch, SourceRequest, NO_BUILDABLE_SOURCE,
};
pub use crate::core::tooling::outcome::{CommandStatus, ExecutionOutcome, UserError};
