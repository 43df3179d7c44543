#![deny(clippy::all, warnings)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod dependency;
pub mod project;
pub mod workspace;

pub use dependency::{Dependency, SourceKind, VcsKind};
pub use project::{
    manifest_exists, manifest_path, read_enter_command, ManifestError, MANIFEST_FILE,
};
pub use workspace::{workspace_bin_dir, workspace_dir, WorkspaceConfig, WORKSPACE_DIR};
