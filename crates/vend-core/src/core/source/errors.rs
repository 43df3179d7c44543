use vend_domain::VcsKind;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("fetching {name} failed (exit code {code})")]
    FetchFailed {
        name: String,
        code: i32,
        output: String,
    },
    #[error("unable to run the fetch command for {name}")]
    Spawn {
        name: String,
        #[source]
        source: BoxError,
    },
    #[error("{name} does not have a repository/VCS set; its version cannot be pinned")]
    Unpinnable { name: String },
    #[error("no fetch backend is available for {vcs} repositories (needed by {name})")]
    UnsupportedBackend { name: String, vcs: VcsKind },
}

impl SourceError {
    pub(crate) fn spawn(name: &str, err: anyhow::Error) -> Self {
        Self::Spawn {
            name: name.to_string(),
            source: err.into(),
        }
    }

    #[must_use]
    pub fn dependency(&self) -> &str {
        match self {
            SourceError::FetchFailed { name, .. }
            | SourceError::Spawn { name, .. }
            | SourceError::Unpinnable { name }
            | SourceError::UnsupportedBackend { name, .. } => name,
        }
    }
}
