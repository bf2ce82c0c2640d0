//! End-to-end tests driving the torto binary

#![cfg(unix)]

mod common;

use common::Sandbox;
use predicates::prelude::*;

#[test]
fn test_hello_world_end_to_end() {
    let sandbox = Sandbox::new()
        .global("vars:\n  GREETING: hi\n")
        .local("targets:\n  hello: [\"echo $GREETING $NAME\"]\n");

    sandbox
        .torto()
        .args(["hello", "NAME=world"])
        .assert()
        .success()
        .stdout("hi world\n");
}

#[test]
fn test_missing_target() {
    let sandbox = Sandbox::new().local("targets:\n  hello: [\"echo hi\"]\n");

    sandbox
        .torto()
        .arg("NAME=world")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("target missing"));
}

#[test]
fn test_unknown_target() {
    let sandbox = Sandbox::new().local("targets:\n  hello: [\"echo hi\"]\n");

    sandbox
        .torto()
        .arg("deploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("target deploy does not exist"));
}

#[test]
fn test_no_config_files() {
    let sandbox = Sandbox::new();

    sandbox
        .torto()
        .arg("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("torto.yml not found"));
}

#[test]
fn test_failure_stops_target() {
    let sandbox = Sandbox::new()
        .local("targets:\n  t:\n    - \"echo broken >&2; exit 1\"\n    - \"echo second\"\n");

    sandbox
        .torto()
        .arg("t")
        .assert()
        .failure()
        .stdout(predicate::str::contains("second").not())
        .stderr(predicate::str::contains(
            "t: error executing 'echo broken >&2; exit 1': broken\n",
        ));
}

#[test]
fn test_force_continues() {
    let sandbox = Sandbox::new()
        .local("targets:\n  t:\n    - \"exit 1\"\n    - \"echo second\"\n");

    sandbox
        .torto()
        .args(["-f", "t"])
        .assert()
        .success()
        .stdout("second\n")
        .stderr(predicate::str::contains("exit status 1"));
}

#[test]
fn test_debug_prints_instead_of_running() {
    let sandbox = Sandbox::new()
        .local("targets:\n  mk: [\"touch $FILE\"]\n");

    sandbox
        .torto()
        .args(["--debug", "mk", "FILE=made"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sh -c touch made"))
        .stdout(predicate::str::contains("resolved_target: mk"));

    assert!(!sandbox.project().join("made").exists());
}

#[test]
fn test_caller_overrides_file_variable() {
    let sandbox = Sandbox::new()
        .global("vars:\n  X: \"1\"\n")
        .local("vars:\n  X: \"2\"\ntargets:\n  show: [\"echo $X\"]\n");

    sandbox.torto().arg("show").assert().success().stdout("2\n");
    sandbox
        .torto()
        .args(["show", "X=3"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_local_target_replaces_global() {
    let sandbox = Sandbox::new()
        .global("targets:\n  build: [\"echo a\"]\n")
        .local("targets:\n  build: [\"echo b\"]\n");

    sandbox.torto().arg("build").assert().success().stdout("b\n");
}

#[test]
fn test_global_only() {
    let sandbox = Sandbox::new().global("targets:\n  up: [\"echo from home\"]\n");

    sandbox
        .torto()
        .arg("up")
        .assert()
        .success()
        .stdout("from home\n");
}

#[test]
fn test_malformed_global_is_ignored_with_warning() {
    let sandbox = Sandbox::new()
        .global("targets: [oops\n")
        .local("targets:\n  t: [\"echo ok\"]\n");

    sandbox
        .torto()
        .arg("t")
        .assert()
        .success()
        .stdout("ok\n")
        .stderr(predicate::str::contains(
            "[WARN] Ignoring global config: failed to parse",
        ));
}

#[test]
fn test_missing_global_is_silent() {
    let sandbox = Sandbox::new().local("targets:\n  t: [\"echo ok\"]\n");

    sandbox
        .torto()
        .arg("t")
        .assert()
        .success()
        .stdout("ok\n")
        .stderr("");
}

#[test]
fn test_missing_global_is_logged_when_verbose() {
    let sandbox = Sandbox::new().local("targets:\n  t: [\"echo ok\"]\n");

    sandbox
        .torto()
        .args(["-v", "t"])
        .assert()
        .success()
        .stdout("ok\n")
        .stderr(predicate::str::contains("[DEBUG] No global config:"));
}

#[test]
fn test_cmd_variable_collects_free_text() {
    let sandbox = Sandbox::new().local("targets:\n  say: [\"echo got $CMD\"]\n");

    sandbox
        .torto()
        .args(["say", "a", "LOUD=yes", "b", "c"])
        .assert()
        .success()
        .stdout("got a b c\n");
}

#[test]
fn test_bin_variable_points_at_executable() {
    let sandbox = Sandbox::new().local("targets:\n  where: [\"echo $BIN\"]\n");

    sandbox
        .torto()
        .arg("where")
        .assert()
        .success()
        .stdout(predicate::str::contains("torto"));
}

#[test]
fn test_self_referential_variable_is_reported() {
    let sandbox = Sandbox::new()
        .local("vars:\n  LOOP: \"x$LOOP\"\ntargets:\n  t: [\"echo $LOOP\"]\n");

    sandbox
        .torto()
        .arg("t")
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum depth"));
}

#[test]
fn test_custom_config_paths() {
    let sandbox = Sandbox::new();
    let (_dir, config) = common::create_test_config("other.yml", "targets:\n  x: [\"echo custom\"]\n");

    sandbox
        .torto()
        .arg("--config")
        .arg(&config)
        .arg("x")
        .assert()
        .success()
        .stdout("custom\n");
}

#[test]
fn test_list_targets() {
    let sandbox = Sandbox::new()
        .global("targets:\n  zeta: [\"true\"]\n  alpha: [\"true\"]\n")
        .local("targets:\n  mid: [\"true\"]\n");

    sandbox
        .torto()
        .arg("--list")
        .assert()
        .success()
        .stdout("alpha\nmid\nzeta\n");
}

#[test]
fn test_completions() {
    let sandbox = Sandbox::new();

    sandbox
        .torto()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("torto"));
}
