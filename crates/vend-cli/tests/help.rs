use assert_cmd::cargo::cargo_bin_cmd;

fn help_output(args: &[&str]) -> String {
    let assert = cargo_bin_cmd!("vend").args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 help")
}

#[test]
fn top_level_help_groups_commands() {
    let output = help_output(&["--help"]);
    for command in ["enter", "leave", "path", "get", "update", "pin"] {
        assert!(
            output.contains(&format!("  {command} ")),
            "top-level help missing {command}: {output}"
        );
    }
}

#[test]
fn enter_help_mentions_usage_and_override() {
    let output = help_output(&["enter", "--help"]);
    assert!(
        output.contains("Start a sandbox shell for the project and wait for it to exit."),
        "enter help missing about: {output}"
    );
    assert!(output.contains("vend enter [DIR]"), "usage missing: {output}");
    assert!(
        output.contains("enter-command"),
        "enter help should mention the override: {output}"
    );
}

#[test]
fn get_requires_a_name() {
    cargo_bin_cmd!("vend").args(["get"]).assert().failure();
}
