use std::path::Path;

use tracing::{info, warn};
use vend_domain::Dependency;

use super::{SourceError, SourceFetch};
use crate::effects::Toolchain;

/// Diagnostic the toolchain prints when a fetched package has no Go files.
///
/// Matched verbatim against the fetch output; a rewording upstream silently
/// turns these fetches back into failures.
pub const NO_BUILDABLE_SOURCE: &str = "no buildable Go source";

/// Fetch backend for dependencies without a declared repository.
///
/// Delegates to `go get -d`, which resolves the import path itself. It has no
/// notion of revisions, so it can neither pin nor report a commit.
pub struct GoGetBackend<'a> {
    toolchain: &'a dyn Toolchain,
    program: &'a str,
    cwd: &'a Path,
}

impl<'a> GoGetBackend<'a> {
    pub fn new(toolchain: &'a dyn Toolchain, program: &'a str, cwd: &'a Path) -> Self {
        Self {
            toolchain,
            program,
            cwd,
        }
    }

    fn go_get(&self, dependency: &Dependency, update: bool) -> Result<(), SourceError> {
        let mut args = vec!["get".to_string(), "-d".to_string()];
        if update {
            args.push("-u".to_string());
        }
        args.push(dependency.name.clone());

        let output = self
            .toolchain
            .run_captured(self.program, &args, self.cwd)
            .map_err(|err| SourceError::spawn(&dependency.name, err))?;
        if output.success() {
            return Ok(());
        }

        let combined = output.combined();
        if combined.contains(NO_BUILDABLE_SOURCE) {
            info!(dependency = %dependency.name, "go get: {}", combined.trim_end());
            return Ok(());
        }
        warn!(dependency = %dependency.name, "go get: {}", combined.trim_end());
        Err(SourceError::FetchFailed {
            name: dependency.name.clone(),
            code: output.code,
            output: combined,
        })
    }
}

impl SourceFetch for GoGetBackend<'_> {
    fn get(&self, dependency: &Dependency) -> Result<(), SourceError> {
        self.go_get(dependency, false)
    }

    fn update(&self, dependency: &Dependency) -> Result<(), SourceError> {
        self.go_get(dependency, true)
    }

    fn version(&self, dependency: &Dependency) -> Result<(), SourceError> {
        Err(SourceError::Unpinnable {
            name: dependency.name.clone(),
        })
    }

    fn last_commit(&self, _dependency: &Dependency) -> Result<String, SourceError> {
        Ok(String::new())
    }
}
