use atty::Stream;
use color_eyre::Result;
use serde_json::Value;
use vend_core::api::{format_status_message, to_json_response, CommandInfo, ExecutionOutcome};

use crate::style::Style;

#[derive(Clone, Copy, Debug)]
pub struct OutputOptions {
    pub quiet: bool,
    pub json: bool,
    pub no_color: bool,
}

pub fn emit_output(
    opts: &OutputOptions,
    info: CommandInfo,
    outcome: &ExecutionOutcome,
) -> Result<i32> {
    let code = outcome.status.exit_code();

    if opts.json {
        let payload = to_json_response(info, outcome, code);
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(code);
    }
    // Passthrough output is printed even in quiet mode.
    if code == 0 && is_passthrough(&outcome.details) {
        println!("{}", outcome.message);
        return Ok(code);
    }

    if code == 0 {
        if opts.quiet {
            return Ok(code);
        }
        let style = Style::new(opts.no_color, atty::is(Stream::Stdout));
        let message = format_status_message(info, &outcome.message);
        println!("{}", style.status(&outcome.status, &message));
        if let Some(hint) = hint_from_details(&outcome.details) {
            println!("{}", style.info(&format!("Tip: {hint}")));
        }
        return Ok(code);
    }

    if opts.quiet {
        let style = Style::new(opts.no_color, atty::is(Stream::Stderr));
        for line in render_error(&style, info, outcome) {
            eprintln!("{line}");
        }
    } else {
        let style = Style::new(opts.no_color, atty::is(Stream::Stdout));
        for line in render_error(&style, info, outcome) {
            println!("{line}");
        }
    }
    Ok(code)
}

fn render_error(style: &Style, info: CommandInfo, outcome: &ExecutionOutcome) -> Vec<String> {
    let mut lines = vec![
        style.error_header(&format!("vend {}  {}", info.name, outcome.message)),
        String::new(),
        "Why:".to_string(),
    ];
    for reason in collect_why_bullets(&outcome.details, &outcome.message) {
        lines.push(format!("  • {reason}"));
    }
    if let Some(output) = outcome.details.get("output").and_then(Value::as_str) {
        let output = output.trim_end();
        if !output.is_empty() {
            lines.push(String::new());
            for line in output.lines() {
                lines.push(style.dimmed(&format!("    {line}")));
            }
        }
    }
    lines.push(String::new());
    lines.push("Fix:".to_string());
    for fix in collect_fix_bullets(&outcome.details) {
        lines.push(style.fix_bullet(&format!("  • {fix}")));
    }
    lines
}

fn hint_from_details(details: &Value) -> Option<&str> {
    details
        .as_object()
        .and_then(|map| map.get("hint"))
        .and_then(Value::as_str)
}

fn is_passthrough(details: &Value) -> bool {
    details
        .as_object()
        .and_then(|map| map.get("passthrough"))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn reason_display(reason: &str) -> Option<&'static str> {
    match reason {
        "missing_manifest" => Some("No vend.toml in the target directory"),
        "target_directory" => Some("The target directory could not be entered"),
        "working_directory" => Some("The working directory could not be read"),
        "enter_command_not_found" => Some("The enter command is not on PATH"),
        "empty_enter_command" => Some("The enter command is empty"),
        "no_shell" => Some("SHELL is not set"),
        "fetch_failed" => Some("The toolchain could not fetch the dependency"),
        "toolchain_unavailable" => Some("The Go toolchain could not be started"),
        "unpinnable" => Some("The dependency has no repository to pin against"),
        "unsupported_source" => Some("The dependency's source kind is not supported"),
        "invalid_manifest" => Some("vend.toml could not be parsed"),
        "unreadable_manifest" => Some("vend.toml could not be read"),
        "invalid_enter_command" => Some("The configured enter command is not a string"),
        _ => None,
    }
}

fn collect_why_bullets(details: &Value, fallback: &str) -> Vec<String> {
    let mut bullets = Vec::new();
    if let Some(reason) = details.get("reason").and_then(Value::as_str) {
        push_unique(
            &mut bullets,
            reason_display(reason).unwrap_or(reason).to_string(),
        );
    }
    if let Some(dir) = details.get("project_root").and_then(Value::as_str) {
        push_unique(&mut bullets, format!("Directory: {dir}"));
    }
    if let Some(error) = details.get("error").and_then(Value::as_str) {
        push_unique(&mut bullets, error.to_string());
    }
    if let Some(issues) = details.get("issues").and_then(Value::as_array) {
        for issue in issues.iter().filter_map(Value::as_str) {
            push_unique(&mut bullets, issue.to_string());
        }
    }
    if bullets.is_empty() {
        push_unique(&mut bullets, fallback.to_string());
    }
    bullets
}

fn collect_fix_bullets(details: &Value) -> Vec<String> {
    let mut fixes = Vec::new();
    if let Some(hint) = hint_from_details(details) {
        push_unique(&mut fixes, hint.to_string());
    }
    if fixes.is_empty() {
        fixes.push("Re-run with --help for usage or inspect the output above.".to_string());
    }
    fixes
}

fn push_unique(vec: &mut Vec<String>, text: impl Into<String>) {
    let entry = text.into();
    if entry.trim().is_empty() {
        return;
    }
    if !vec.iter().any(|existing| existing == &entry) {
        vec.push(entry);
    }
}
