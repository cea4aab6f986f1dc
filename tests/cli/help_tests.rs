/// Integration tests for CLI help and version output
use predicates::prelude::*;

use crate::common::{cmd, TestContext};

#[test]
fn test_help_flag() {
    let ctx = TestContext::default();
    cmd(&ctx)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sourcemap-annotate"))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--tabulate"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_version_flag() {
    let ctx = TestContext::default();
    cmd(&ctx)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_arguments() {
    let ctx = TestContext::default();
    cmd(&ctx)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}
