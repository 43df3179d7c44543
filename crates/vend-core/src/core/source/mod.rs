//! Source-fetch capability shared by every dependency backend.

mod commands;
mod errors;
mod goget;

use std::path::Path;

use vend_domain::{Dependency, SourceKind};

use crate::effects::Toolchain;

pub use commands::{source_get, source_pin, source_update, PinRequest, SourceRequest};
pub use errors::SourceError;
pub use goget::{GoGetBackend, NO_BUILDABLE_SOURCE};

/// Operations every fetch backend provides for a dependency.
pub trait SourceFetch {
    /// Fetches the dependency into the toolchain's package tree without building it.
    fn get(&self, dependency: &Dependency) -> Result<(), SourceError>;

    /// Like [`SourceFetch::get`] but refreshes an already-fetched copy.
    fn update(&self, dependency: &Dependency) -> Result<(), SourceError>;

    /// Checks out the revision the dependency is pinned to.
    fn version(&self, dependency: &Dependency) -> Result<(), SourceError>;

    /// Returns the revision currently checked out, or an empty string when the
    /// backend does not track revisions.
    fn last_commit(&self, dependency: &Dependency) -> Result<String, SourceError>;
}

/// Selects the backend for `dependency` from its declared source.
///
/// # Errors
/// Returns [`SourceError::UnsupportedBackend`] for repository kinds without a backend.
pub fn fetcher_for<'a>(
    dependency: &Dependency,
    toolchain: &'a dyn Toolchain,
    program: &'a str,
    cwd: &'a Path,
) -> Result<Box<dyn SourceFetch + 'a>, SourceError> {
    match &dependency.source {
        SourceKind::NoRepository => Ok(Box::new(GoGetBackend::new(toolchain, program, cwd))),
        SourceKind::Repository { vcs, .. } => Err(SourceError::UnsupportedBackend {
            name: dependency.name.clone(),
            vcs: *vcs,
        }),
    }
}
