use std::path::{Path, PathBuf};

/// Directory, relative to the project root, that holds the private package tree.
pub const WORKSPACE_DIR: &str = "_vendor";

#[must_use]
pub fn workspace_dir(project_root: &Path) -> PathBuf {
    project_root.join(WORKSPACE_DIR)
}

#[must_use]
pub fn workspace_bin_dir(project_root: &Path) -> PathBuf {
    workspace_dir(project_root).join("bin")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkspaceConfig {
    pub project_root: PathBuf,
    /// Replaces the user's login shell when entering the sandbox.
    pub enter_command: Option<String>,
}

impl WorkspaceConfig {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            enter_command: None,
        }
    }

    #[must_use]
    pub fn with_enter_command(mut self, command: Option<String>) -> Self {
        self.enter_command = command.filter(|value| !value.trim().is_empty());
        self
    }
}
