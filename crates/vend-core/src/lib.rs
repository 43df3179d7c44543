#![deny(clippy::all, warnings)]

pub mod api;
mod core;

pub(crate) use crate::core::config;
pub(crate) use crate::core::config::context;
pub(crate) use crate::core::runtime::{effects, process};
pub(crate) use crate::core::sandbox;
pub(crate) use crate::core::tooling::outcome;

pub use crate::core::config::context::{CommandContext, CommandInfo};
pub use crate::core::config::{Config, GlobalOptions, ToolchainConfig};
pub use crate::core::runtime::effects::{
    Effects, SessionLauncher, SharedEffects, SystemEffects, Toolchain,
};
pub use crate::core::runtime::process::{RunOutput, SessionExit};
pub use crate::core::runtime::{
    format_status_message, manifest_error_outcome, to_json_response, CommandGroup,
};
pub use crate::core::tooling::outcome::{CommandStatus, ExecutionOutcome, UserError};
