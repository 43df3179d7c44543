mod common;

use common::{parse_json, project, stdout, vend};

#[cfg(unix)]
#[test]
fn source_less_packages_count_as_fetched() {
    let (_temp, root) = project("");
    let go = common::write_script(
        &root,
        "go",
        "echo \"package $3: no buildable Go source files in /gopath/src/$3\" >&2\nexit 1",
    );
    let assert = vend(&root)
        .env("VEND_GO", &go)
        .args(["get", "example.com/docs"])
        .assert()
        .success();
    assert!(stdout(&assert).contains("fetched 1 dependency"));
}

#[cfg(unix)]
#[test]
fn update_passes_the_refresh_flag() {
    let (_temp, root) = project("");
    let log = root.join("calls.txt");
    let go = common::write_script(&root, "go", "echo \"$@\" >> \"$VEND_TEST_LOG\"");
    let assert = vend(&root)
        .env("VEND_GO", &go)
        .env("VEND_TEST_LOG", &log)
        .args(["--json", "update", "golang.org/x/text", "golang.org/x/net"])
        .assert()
        .success();
    let payload = parse_json(&assert);
    assert_eq!(payload["details"]["dependencies"].as_array().unwrap().len(), 2);

    let calls = std::fs::read_to_string(&log).expect("call log");
    let calls: Vec<&str> = calls.lines().collect();
    assert_eq!(
        calls,
        ["get -d -u golang.org/x/text", "get -d -u golang.org/x/net"]
    );
}

#[cfg(unix)]
#[test]
fn other_fetch_failures_exit_with_failure() {
    let (_temp, root) = project("");
    let go = common::write_script(
        &root,
        "go",
        "echo \"package $3: unrecognized import path\" >&2\nexit 1",
    );
    let assert = vend(&root)
        .env("VEND_GO", &go)
        .args(["--json", "get", "bad.example/pkg"])
        .assert()
        .code(2);
    let payload = parse_json(&assert);
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["details"]["reason"], "fetch_failed");
    assert_eq!(payload["details"]["dependency"], "bad.example/pkg");
    assert!(payload["details"]["output"]
        .as_str()
        .unwrap()
        .contains("unrecognized import path"));
}

#[test]
fn missing_toolchain_is_a_user_error() {
    let (_temp, root) = project("");
    let assert = vend(&root)
        .env("VEND_GO", "/nonexistent/vend-test/go")
        .args(["--json", "get", "golang.org/x/text"])
        .assert()
        .code(1);
    let payload = parse_json(&assert);
    assert_eq!(payload["details"]["reason"], "toolchain_unavailable");
}

#[test]
fn pin_without_repository_is_refused() {
    let (_temp, root) = project("");
    let assert = vend(&root)
        .args(["pin", "golang.org/x/text"])
        .assert()
        .code(1);
    let out = stdout(&assert);
    assert!(out.contains("golang.org/x/text"), "{out}");
    assert!(out.contains("cannot be pinned"), "{out}");
}
