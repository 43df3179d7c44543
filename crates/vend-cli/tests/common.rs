#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::assert::Assert;
use serde_json::Value;
use tempfile::TempDir;

/// Environment a developer shell may carry that would change vend's behavior.
pub const SCRUBBED_ENV: &[&str] = &["VEND_ACTIVE", "VEND_ENTER_COMMAND", "VEND_GO", "VEND_LOG"];

pub fn vend(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("vend");
    cmd.current_dir(dir);
    for key in SCRUBBED_ENV {
        cmd.env_remove(key);
    }
    cmd
}

/// A temp project holding `vend.toml` with the given body.
pub fn project(manifest: &str) -> (TempDir, PathBuf) {
    let temp = tempfile::Builder::new()
        .prefix("vend-project")
        .tempdir()
        .expect("tempdir");
    let root = temp.path().canonicalize().expect("canonical root");
    fs::write(root.join("vend.toml"), manifest).expect("write manifest");
    (temp, root)
}

/// Writes an executable shell script into `dir` and returns its path.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    let mut perms = fs::metadata(&path).expect("script metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod script");
    path
}

pub fn stdout(assert: &Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout")
}

pub fn stderr(assert: &Assert) -> String {
    String::from_utf8(assert.get_output().stderr.clone()).expect("utf8 stderr")
}

pub fn parse_json(assert: &Assert) -> Value {
    serde_json::from_slice(&assert.get_output().stdout).expect("json envelope")
}

/// Parses `env` output written by a fake shell into key/value pairs.
pub fn read_env_dump(path: &Path) -> Vec<(String, String)> {
    fs::read_to_string(path)
        .expect("env dump")
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn env_value<'a>(vars: &'a [(String, String)], key: &str) -> Option<&'a str> {
    vars.iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
