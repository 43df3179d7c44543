use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use super::process::{run_command, run_command_passthrough, RunOutput, SessionExit};

/// Runs the host toolchain with captured output.
pub trait Toolchain: Send + Sync {
    fn run_captured(&self, program: &str, args: &[String], cwd: &Path) -> Result<RunOutput>;
}

/// Starts an interactive session on the caller's terminal and blocks until it ends.
pub trait SessionLauncher: Send + Sync {
    fn launch(
        &self,
        program: &Path,
        arg0: Option<&str>,
        args: &[String],
        envs: &[(String, String)],
        cwd: &Path,
    ) -> Result<SessionExit>;
}

pub trait Effects: Send + Sync {
    fn toolchain(&self) -> &dyn Toolchain;
    fn sessions(&self) -> &dyn SessionLauncher;
}

pub struct SystemEffects {
    toolchain: Arc<SystemToolchain>,
    sessions: Arc<SystemSessions>,
}

impl SystemEffects {
    #[must_use]
    pub fn new() -> Self {
        Self {
            toolchain: Arc::new(SystemToolchain),
            sessions: Arc::new(SystemSessions),
        }
    }
}

impl Default for SystemEffects {
    fn default() -> Self {
        Self::new()
    }
}

impl Effects for SystemEffects {
    fn toolchain(&self) -> &dyn Toolchain {
        self.toolchain.as_ref()
    }

    fn sessions(&self) -> &dyn SessionLauncher {
        self.sessions.as_ref()
    }
}

struct SystemToolchain;

impl Toolchain for SystemToolchain {
    fn run_captured(&self, program: &str, args: &[String], cwd: &Path) -> Result<RunOutput> {
        run_command(program, args, cwd)
    }
}

struct SystemSessions;

impl SessionLauncher for SystemSessions {
    fn launch(
        &self,
        program: &Path,
        arg0: Option<&str>,
        args: &[String],
        envs: &[(String, String)],
        cwd: &Path,
    ) -> Result<SessionExit> {
        run_command_passthrough(program, arg0, args, envs, cwd)
    }
}

pub type SharedEffects = Arc<dyn Effects>;
