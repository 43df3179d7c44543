use std::{
    fs,
    path::{Path, PathBuf},
};

use toml_edit::{DocumentMut, Item};

pub const MANIFEST_FILE: &str = "vend.toml";

#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },
    #[error("[tool.vend].enter-command in {path} must be a string")]
    EnterCommandType { path: PathBuf },
}

#[must_use]
pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILE)
}

#[must_use]
pub fn manifest_exists(dir: &Path) -> bool {
    manifest_path(dir).is_file()
}

/// Reads the optional `[tool.vend] enter-command` override from the manifest in `dir`.
///
/// A missing manifest is not an error here; the project-root guard reports that.
pub fn read_enter_command(dir: &Path) -> Result<Option<String>, ManifestError> {
    let path = manifest_path(dir);
    if !path.is_file() {
        return Ok(None);
    }
    let contents = fs::read_to_string(&path).map_err(|source| ManifestError::Read {
        path: path.clone(),
        source,
    })?;
    let doc: DocumentMut = contents.parse().map_err(|source| ManifestError::Parse {
        path: path.clone(),
        source,
    })?;
    let Some(item) = doc
        .get("tool")
        .and_then(Item::as_table)
        .and_then(|tool| tool.get("vend"))
        .and_then(Item::as_table)
        .and_then(|vend| vend.get("enter-command"))
    else {
        return Ok(None);
    };
    let command = item
        .as_str()
        .ok_or(ManifestError::EnterCommandType { path })?
        .trim();
    if command.is_empty() {
        tracing::debug!("ignoring empty enter-command in manifest");
        return Ok(None);
    }
    Ok(Some(command.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_command_is_read_from_tool_table() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(
            temp.path().join(MANIFEST_FILE),
            "[tool.vend]\nenter-command = \"tmux new-session\"\n",
        )
        .expect("write manifest");
        let command = read_enter_command(temp.path()).expect("read");
        assert_eq!(command.as_deref(), Some("tmux new-session"));
    }

    #[test]
    fn missing_manifest_or_table_yields_none() {
        let temp = tempfile::tempdir().expect("tempdir");
        assert!(!manifest_exists(temp.path()));
        assert!(read_enter_command(temp.path()).expect("read").is_none());

        fs::write(temp.path().join(MANIFEST_FILE), "[project]\nname = \"demo\"\n")
            .expect("write manifest");
        assert!(manifest_exists(temp.path()));
        assert!(read_enter_command(temp.path()).expect("read").is_none());
    }

    #[test]
    fn non_string_enter_command_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(
            temp.path().join(MANIFEST_FILE),
            "[tool.vend]\nenter-command = 3\n",
        )
        .expect("write manifest");
        let err = read_enter_command(temp.path()).unwrap_err();
        assert!(matches!(err, ManifestError::EnterCommandType { .. }));
    }
}
