use std::fmt;

use serde::{Deserialize, Serialize};

/// Version-control systems a dependency may declare as its source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VcsKind {
    Git,
    Mercurial,
    Bazaar,
    Subversion,
}

impl VcsKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            VcsKind::Git => "git",
            VcsKind::Mercurial => "hg",
            VcsKind::Bazaar => "bzr",
            VcsKind::Subversion => "svn",
        }
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a dependency's source comes from.
///
/// The variant is fixed when the [`Dependency`] is built, so fetch backends are
/// picked by matching on it rather than by probing optional fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceKind {
    /// No repository declared; the toolchain's own remote fetch is used.
    NoRepository,
    Repository { vcs: VcsKind, url: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub source: SourceKind,
}

impl Dependency {
    pub fn without_repository(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: SourceKind::NoRepository,
        }
    }

    pub fn with_repository(name: impl Into<String>, vcs: VcsKind, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: SourceKind::Repository {
                vcs,
                url: url.into(),
            },
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            SourceKind::NoRepository => f.write_str(&self.name),
            SourceKind::Repository { vcs, url } => write!(f, "{} ({vcs}+{url})", self.name),
        }
    }
}
