use color_eyre::Result;
use tracing::debug;
use vend_core::api::{
    manifest_error_outcome, sandbox_enter, sandbox_leave, sandbox_path, source_get, source_pin,
    source_update, CommandContext, CommandGroup, CommandInfo, EnterRequest, ExecutionOutcome,
    PinRequest, SourceRequest, UserError,
};

use crate::cli::CommandGroupCli;

pub fn dispatch_command(
    ctx: &CommandContext,
    group: &CommandGroupCli,
) -> Result<(CommandInfo, ExecutionOutcome)> {
    match group {
        CommandGroupCli::Path => {
            let info = CommandInfo::new(CommandGroup::Path, "path");
            core_call(info, || sandbox_path(ctx))
        }
        CommandGroupCli::Enter(args) => {
            let info = CommandInfo::new(CommandGroup::Enter, "enter");
            let request = EnterRequest {
                target: args.dir.clone(),
            };
            core_call(info, || sandbox_enter(ctx, &request))
        }
        CommandGroupCli::Leave => {
            let info = CommandInfo::new(CommandGroup::Leave, "leave");
            core_call(info, || sandbox_leave(ctx))
        }
        CommandGroupCli::Get(args) => {
            let info = CommandInfo::new(CommandGroup::Get, "get");
            let request = SourceRequest {
                names: args.names.clone(),
            };
            core_call(info, || source_get(ctx, &request))
        }
        CommandGroupCli::Update(args) => {
            let info = CommandInfo::new(CommandGroup::Update, "update");
            let request = SourceRequest {
                names: args.names.clone(),
            };
            core_call(info, || source_update(ctx, &request))
        }
        CommandGroupCli::Pin(args) => {
            let info = CommandInfo::new(CommandGroup::Pin, "pin");
            let request = PinRequest {
                name: args.name.clone(),
            };
            core_call(info, || source_pin(ctx, &request))
        }
    }
}

fn core_call<F>(info: CommandInfo, action: F) -> Result<(CommandInfo, ExecutionOutcome)>
where
    F: FnOnce() -> anyhow::Result<ExecutionOutcome>,
{
    debug!(command = info.name, "dispatching");
    match action() {
        Ok(result) => Ok((info, result)),
        Err(err) => {
            if let Some(outcome) = manifest_error_outcome(&err) {
                Ok((info, outcome))
            } else if let Some(user) = err.downcast_ref::<UserError>() {
                Ok((
                    info,
                    ExecutionOutcome::user_error(
                        user.message().to_string(),
                        user.details().clone(),
                    ),
                ))
            } else {
                let issues: Vec<String> =
                    err.chain().map(std::string::ToString::to_string).collect();
                Ok((
                    info,
                    ExecutionOutcome::failure(
                        err.to_string(),
                        serde_json::json!({
                            "reason": "internal_error",
                            "error": err.to_string(),
                            "issues": issues,
                            "hint": "Re-run with `-vv` for more detail, or open an issue if this persists.",
                        }),
                    ),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vend_core::api::CommandStatus;

    #[test]
    fn unexpected_errors_become_failures_with_their_chain() {
        let info = CommandInfo::new(CommandGroup::Get, "get");
        let (_, outcome) = core_call(info, || {
            Err(anyhow::anyhow!("socket closed").context("talking to the toolchain"))
        })
        .unwrap();
        assert_eq!(outcome.status, CommandStatus::Failure);
        assert_eq!(outcome.details["reason"], "internal_error");
        assert_eq!(outcome.details["issues"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn user_errors_keep_their_details() {
        let info = CommandInfo::new(CommandGroup::Pin, "pin");
        let (_, outcome) = core_call(info, || {
            Err(UserError::new("bad input", serde_json::json!({ "hint": "try again" })).into())
        })
        .unwrap();
        assert_eq!(outcome.status, CommandStatus::UserError);
        assert_eq!(outcome.message, "bad input");
        assert_eq!(outcome.details["hint"], "try again");
    }
}
