use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use vend_domain::ManifestError;

use crate::context::CommandInfo;
use crate::outcome::{CommandStatus, ExecutionOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandGroup {
    Path,
    Enter,
    Leave,
    Get,
    Update,
    Pin,
}

impl fmt::Display for CommandGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandGroup::Path => "path",
            CommandGroup::Enter => "enter",
            CommandGroup::Leave => "leave",
            CommandGroup::Get => "get",
            CommandGroup::Update => "update",
            CommandGroup::Pin => "pin",
        };
        f.write_str(name)
    }
}

/// Maps a manifest read/parse failure anywhere in `err`'s chain to a user error.
pub fn manifest_error_outcome(err: &anyhow::Error) -> Option<ExecutionOutcome> {
    let manifest = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<ManifestError>())?;
    let (reason, hint) = match manifest {
        ManifestError::Read { .. } => (
            "unreadable_manifest",
            "Check the permissions on vend.toml and rerun the command.",
        ),
        ManifestError::Parse { .. } => (
            "invalid_manifest",
            "Fix vend.toml syntax and rerun the command.",
        ),
        ManifestError::EnterCommandType { .. } => (
            "invalid_enter_command",
            "Set [tool.vend].enter-command to a string such as \"zsh -l\".",
        ),
    };
    Some(ExecutionOutcome::user_error(
        manifest.to_string(),
        json!({
            "reason": reason,
            "hint": hint,
        }),
    ))
}

#[must_use]
pub fn to_json_response(info: CommandInfo, outcome: &ExecutionOutcome, _code: i32) -> Value {
    let status = match outcome.status {
        CommandStatus::Ok => "ok",
        CommandStatus::Stopped => "stopped",
        CommandStatus::UserError => "user-error",
        CommandStatus::Failure => "error",
    };
    let details = match &outcome.details {
        Value::Object(_) => outcome.details.clone(),
        Value::Null => json!({}),
        other => json!({ "value": other }),
    };
    json!({
        "status": status,
        "message": format_status_message(info, &outcome.message),
        "details": details,
    })
}

#[must_use]
pub fn format_status_message(info: CommandInfo, message: &str) -> String {
    let group_name = info.group.to_string();
    let prefix = if group_name == info.name {
        format!("vend {}", info.name)
    } else {
        format!("vend {} {}", group_name, info.name)
    };
    if message.is_empty() {
        prefix
    } else if message.starts_with(&prefix) {
        message.to_string()
    } else {
        format!("{prefix}: {message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn status_message_is_prefixed_once() {
        let info = CommandInfo::new(CommandGroup::Enter, "enter");
        assert_eq!(format_status_message(info, "done"), "vend enter: done");
        assert_eq!(
            format_status_message(info, "vend enter: done"),
            "vend enter: done"
        );
        assert_eq!(format_status_message(info, ""), "vend enter");
    }

    #[test]
    fn json_envelope_reports_stopped_status() {
        let info = CommandInfo::new(CommandGroup::Enter, "enter");
        let outcome = ExecutionOutcome::stopped("already inside a sandbox", Value::Null);
        let payload = to_json_response(info, &outcome, 0);
        assert_eq!(payload["status"], "stopped");
        assert_eq!(payload["details"], json!({}));
    }

    #[test]
    fn manifest_errors_become_user_errors() {
        let err = anyhow::Error::new(ManifestError::EnterCommandType {
            path: PathBuf::from("/p/vend.toml"),
        })
        .context("loading configuration");
        let outcome = manifest_error_outcome(&err).expect("manifest outcome");
        assert_eq!(outcome.status, CommandStatus::UserError);
        assert_eq!(outcome.details["reason"], "invalid_enter_command");

        let unrelated = anyhow::anyhow!("boom");
        assert!(manifest_error_outcome(&unrelated).is_none());
    }
}
