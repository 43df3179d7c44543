//! The isolated workspace: guards, the enter/leave controller, and their handlers.

mod commands;
mod controller;
mod errors;
pub mod guards;
mod session;

pub use commands::{sandbox_enter, sandbox_leave, sandbox_path, EnterRequest};
pub use controller::{enter, leave, sandbox_environment, workspace_path, EnterPlan, SessionCommand};
pub use errors::SandboxError;
pub use guards::{already_sandboxed, is_sandboxed, valid_project_root};
pub use session::SandboxSession;
