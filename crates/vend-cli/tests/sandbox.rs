use std::fs;

mod common;

use common::{env_value, parse_json, project, read_env_dump, stderr, stdout, vend};

#[test]
fn path_prints_workspace_under_cwd() {
    let (_temp, root) = project("");
    let assert = vend(&root).arg("path").assert().success();
    assert_eq!(
        stdout(&assert).trim_end(),
        root.join("_vendor").display().to_string()
    );
}

#[test]
fn quiet_path_still_prints_workspace() {
    let (_temp, root) = project("");
    let assert = vend(&root).args(["-q", "path"]).assert().success();
    assert_eq!(
        stdout(&assert).trim_end(),
        root.join("_vendor").display().to_string()
    );
}

#[test]
fn quiet_leave_prints_nothing() {
    let (_temp, root) = project("");
    let assert = vend(&root).args(["-q", "leave"]).assert().success();
    assert!(stdout(&assert).is_empty());
}

#[test]
fn quiet_errors_go_to_stderr() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().canonicalize().expect("canonical");
    let assert = vend(&root)
        .env("SHELL", "/bin/sh")
        .args(["-q", "enter"])
        .assert()
        .code(1);
    assert!(stdout(&assert).is_empty());
    let err = stderr(&assert);
    assert!(err.contains("vend.toml is missing"), "{err}");
    assert!(err.contains(&root.display().to_string()), "{err}");
    assert!(err.contains("Fix:"), "{err}");
}

#[test]
fn leave_outside_a_sandbox_only_reports() {
    let (_temp, root) = project("");
    let assert = vend(&root).arg("leave").assert().success();
    let out = stdout(&assert);
    assert!(out.contains("not currently inside a sandbox"), "{out}");
    assert!(
        !root.join("_vendor").exists(),
        "leave must not touch the workspace"
    );
}

#[test]
fn leave_inside_a_sandbox_explains_exit() {
    let (_temp, root) = project("");
    let assert = vend(&root)
        .env("VEND_ACTIVE", "1")
        .args(["--json", "leave"])
        .assert()
        .success();
    let payload = parse_json(&assert);
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["details"]["active"], true);
}

#[test]
fn enter_inside_a_sandbox_is_stopped() {
    let (_temp, root) = project("");
    let assert = vend(&root)
        .env("VEND_ACTIVE", "1")
        .env("SHELL", "/nonexistent/shell")
        .arg("enter")
        .assert()
        .code(0);
    let out = stdout(&assert);
    assert!(out.contains("already inside a sandbox"), "{out}");
    assert!(
        stderr(&assert).contains("already inside a vend sandbox"),
        "warning should be logged"
    );
}

#[test]
fn enter_without_manifest_names_the_directory() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().canonicalize().expect("canonical");
    let assert = vend(&root)
        .env("SHELL", "/bin/sh")
        .arg("enter")
        .assert()
        .code(1);
    let out = stdout(&assert);
    assert!(out.contains("vend.toml is missing"), "{out}");
    assert!(out.contains(&root.display().to_string()), "{out}");
}

#[test]
fn enter_rejects_non_string_enter_command() {
    let (_temp, root) = project("[tool.vend]\nenter-command = 42\n");
    let assert = vend(&root)
        .env("SHELL", "/bin/sh")
        .args(["--json", "enter"])
        .assert()
        .code(1);
    let payload = parse_json(&assert);
    assert_eq!(payload["details"]["reason"], "invalid_enter_command");
}

#[cfg(unix)]
#[test]
fn enter_runs_shell_with_sandbox_environment() {
    let (_temp, root) = project("");
    let dump = root.join("env.txt");
    let shell = common::write_script(&root, "fake-shell", "env > \"$VEND_TEST_DUMP\"\nexit 3");

    let assert = vend(&root)
        .env("SHELL", &shell)
        .env("VEND_TEST_DUMP", &dump)
        .env("PATH", "/usr/bin:/bin")
        .arg("enter")
        .assert()
        .code(0);
    assert!(
        stderr(&assert).contains("entering a new sandbox shell"),
        "banner missing"
    );
    assert!(stdout(&assert).contains("exited sandbox shell"));

    let vars = read_env_dump(&dump);
    let workspace = root.join("_vendor").display().to_string();
    assert_eq!(env_value(&vars, "VEND_ACTIVE"), Some("1"));
    assert_eq!(env_value(&vars, "GOPATH"), Some(workspace.as_str()));
    assert_eq!(env_value(&vars, "VEND_GOPATH"), Some(workspace.as_str()));
    let path = env_value(&vars, "PATH").expect("PATH");
    assert!(path.starts_with("/usr/bin:/bin:"), "{path}");
    assert!(path.ends_with("_vendor/bin"), "{path}");
    assert_eq!(
        env_value(&vars, "VEND_MANIFEST"),
        Some(root.join("vend.toml").display().to_string().as_str())
    );
}

#[cfg(unix)]
#[test]
fn enter_reports_child_exit_code_in_json() {
    let (_temp, root) = project("");
    let shell = common::write_script(&root, "fake-shell", "exit 5");
    let assert = vend(&root)
        .env("SHELL", &shell)
        .args(["--json", "enter"])
        .assert()
        .success();
    let payload = parse_json(&assert);
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["details"]["exit_code"], 5);
    assert_eq!(payload["details"]["custom_command"], false);
}

#[cfg(unix)]
#[test]
fn enter_command_from_manifest_replaces_shell() {
    let (_temp, root) = project("");
    let marker = root.join("ran.txt");
    let script = common::write_script(&root, "custom-enter", "echo \"$@\" > \"$VEND_TEST_MARKER\"");
    fs::write(
        root.join("vend.toml"),
        format!(
            "[tool.vend]\nenter-command = \"{} --login\"\n",
            script.display()
        ),
    )
    .expect("manifest");

    let assert = vend(&root)
        .env("SHELL", "/nonexistent/shell")
        .env("VEND_TEST_MARKER", &marker)
        .arg("enter")
        .assert()
        .success();
    assert!(
        stderr(&assert).contains("Running custom 'vend enter'"),
        "custom banner missing"
    );
    assert_eq!(fs::read_to_string(&marker).expect("marker").trim(), "--login");
}

#[cfg(unix)]
#[test]
fn enter_switches_into_target_directory() {
    let (_temp, root) = project("");
    let outside = tempfile::tempdir().expect("outside");
    let shell = common::write_script(&root, "fake-shell", "pwd > \"$VEND_TEST_PWD\"");
    let pwd = root.join("pwd.txt");

    vend(outside.path())
        .env("SHELL", &shell)
        .env("VEND_TEST_PWD", &pwd)
        .args(["enter"])
        .arg(&root)
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&pwd).expect("pwd").trim(),
        root.display().to_string()
    );
}
