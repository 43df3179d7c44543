use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};

use crate::config::{Config, EnvSnapshot, GlobalOptions};
use crate::effects::{Effects, SharedEffects};
use crate::sandbox::SandboxSession;
use crate::CommandGroup;

#[derive(Clone, Copy, Debug)]
pub struct CommandInfo {
    pub group: CommandGroup,
    pub name: &'static str,
}

impl CommandInfo {
    #[must_use]
    pub const fn new(group: CommandGroup, name: &'static str) -> Self {
        Self { group, name }
    }
}

pub struct CommandContext<'a> {
    pub global: &'a GlobalOptions,
    env: EnvSnapshot,
    session: SandboxSession,
    cwd: PathBuf,
    config: OnceLock<Config>,
    effects: SharedEffects,
}

impl<'a> CommandContext<'a> {
    /// Creates a new command context with the provided global options.
    ///
    /// The environment is captured once here; later reads go through the snapshot.
    ///
    /// # Errors
    /// Returns an error if the working directory cannot be determined.
    pub fn new(global: &'a GlobalOptions, effects: SharedEffects) -> Result<Self> {
        let cwd = env::current_dir().context("unable to determine the working directory")?;
        Ok(Self::with_snapshot(
            global,
            EnvSnapshot::capture(),
            cwd,
            effects,
        ))
    }

    pub(crate) fn with_snapshot(
        global: &'a GlobalOptions,
        env: EnvSnapshot,
        cwd: PathBuf,
        effects: SharedEffects,
    ) -> Self {
        let session = SandboxSession::from_snapshot(&env);
        Self {
            global,
            env,
            session,
            cwd,
            config: OnceLock::new(),
            effects,
        }
    }

    pub fn effects(&self) -> &dyn Effects {
        self.effects.as_ref()
    }

    #[must_use]
    pub fn session(&self) -> SandboxSession {
        self.session
    }

    #[must_use]
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Loads configuration for the working directory the context was created in.
    ///
    /// # Errors
    /// Returns an error if the project manifest exists but cannot be read.
    pub fn config(&self) -> Result<&Config> {
        if let Some(config) = self.config.get() {
            return Ok(config);
        }
        let config = Config::from_snapshot(&self.env, &self.cwd)?;
        Ok(self.config.get_or_init(|| config))
    }

    /// Loads configuration for another project directory, e.g. after `vend enter DIR`.
    ///
    /// # Errors
    /// Returns an error if the project manifest exists but cannot be read.
    pub fn config_for(&self, project_root: &Path) -> Result<Config> {
        Config::from_snapshot(&self.env, project_root)
    }

    pub(crate) fn env(&self) -> &EnvSnapshot {
        &self.env
    }
}
