use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    pub status: CommandStatus,
    pub message: String,
    #[serde(default)]
    pub details: Value,
}

impl ExecutionOutcome {
    pub fn success(message: impl Into<String>, details: Value) -> Self {
        Self {
            status: CommandStatus::Ok,
            message: message.into(),
            details,
        }
    }

    /// A deliberate early exit: processing halts but nothing failed.
    pub fn stopped(message: impl Into<String>, details: Value) -> Self {
        Self {
            status: CommandStatus::Stopped,
            message: message.into(),
            details,
        }
    }

    pub fn failure(message: impl Into<String>, details: Value) -> Self {
        Self {
            status: CommandStatus::Failure,
            message: message.into(),
            details,
        }
    }

    pub fn user_error(message: impl Into<String>, details: Value) -> Self {
        Self {
            status: CommandStatus::UserError,
            message: message.into(),
            details,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct UserError {
    pub(crate) message: String,
    pub(crate) details: Value,
}

impl UserError {
    pub fn new(message: impl Into<String>, details: Value) -> Self {
        Self {
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn details(&self) -> &Value {
        &self.details
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandStatus {
    Ok,
    Stopped,
    UserError,
    Failure,
}

impl CommandStatus {
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            CommandStatus::Ok | CommandStatus::Stopped => 0,
            CommandStatus::UserError => 1,
            CommandStatus::Failure => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stopped_exits_cleanly() {
        let outcome = ExecutionOutcome::stopped("halted", json!({}));
        assert_eq!(outcome.status.exit_code(), 0);
        assert_eq!(CommandStatus::UserError.exit_code(), 1);
        assert_eq!(CommandStatus::Failure.exit_code(), 2);
    }
}
