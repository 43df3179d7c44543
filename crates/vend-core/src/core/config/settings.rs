use std::collections::HashMap;
use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};
use vend_domain::{read_enter_command, WorkspaceConfig};

pub(crate) const ACTIVE_ENV: &str = "VEND_ACTIVE";
pub(crate) const TOOLCHAIN_ENV: &str = "VEND_GO";
pub(crate) const ENTER_COMMAND_ENV: &str = "VEND_ENTER_COMMAND";
const DEFAULT_TOOLCHAIN: &str = "go";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalOptions {
    pub quiet: bool,
    pub verbose: u8,
    pub trace: bool,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    pub(crate) fn capture() -> Self {
        Self {
            vars: env::vars().collect(),
        }
    }

    pub(crate) fn flag_is_enabled(&self, key: &str) -> bool {
        matches!(self.vars.get(key).map(String::as_str), Some("1"))
    }

    pub(crate) fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn testing(pairs: &[(&str, &str)]) -> Self {
        let vars = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self { vars }
    }
}

#[derive(Debug)]
pub struct Config {
    pub(crate) toolchain: ToolchainConfig,
    pub(crate) workspace: WorkspaceConfig,
}

impl Config {
    /// Builds a configuration snapshot for the project rooted at `project_root`.
    ///
    /// `VEND_ENTER_COMMAND` takes precedence over `[tool.vend] enter-command`.
    ///
    /// # Errors
    /// Returns an error if the manifest exists but cannot be read.
    pub(crate) fn from_snapshot(
        snapshot: &EnvSnapshot,
        project_root: &Path,
    ) -> anyhow::Result<Self> {
        let enter_command = match snapshot.var(ENTER_COMMAND_ENV) {
            Some(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
            _ => read_enter_command(project_root)?,
        };
        Ok(Self {
            toolchain: ToolchainConfig {
                program: snapshot
                    .var(TOOLCHAIN_ENV)
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .unwrap_or(DEFAULT_TOOLCHAIN)
                    .to_string(),
            },
            workspace: WorkspaceConfig::new(project_root).with_enter_command(enter_command),
        })
    }

    #[must_use]
    pub fn toolchain(&self) -> &ToolchainConfig {
        &self.toolchain
    }

    #[must_use]
    pub fn workspace(&self) -> &WorkspaceConfig {
        &self.workspace
    }
}

#[derive(Debug, Clone)]
pub struct ToolchainConfig {
    pub program: String,
}
