/// Integration tests for fatal error handling
use predicates::prelude::*;

use crate::common::{cmd, TestContext, SAMPLE_SOURCE};

#[test]
fn test_missing_source_map_file() {
    let ctx = TestContext::default();
    let source = ctx.create_file("prog.teal", SAMPLE_SOURCE).unwrap();
    cmd(&ctx)
        .arg("missing.json")
        .arg(&source)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read source map"));
}

#[test]
fn test_missing_source_file() {
    let ctx = TestContext::default();
    let map = ctx.create_source_map("prog.map.json", "AAAA").unwrap();
    cmd(&ctx)
        .arg(&map)
        .arg("missing.teal")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read source file"));
    assert!(!ctx.temp_path().join("missing_annotated.teal").exists());
}

#[test]
fn test_missing_mapping_key() {
    let ctx = TestContext::default();
    let map = ctx
        .create_file("prog.map.json", r#"{"mappings": "AAAA"}"#)
        .unwrap();
    let source = ctx.create_file("prog.teal", SAMPLE_SOURCE).unwrap();
    cmd(&ctx)
        .arg(&map)
        .arg(&source)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing key \"mapping\""));
    assert!(!ctx.temp_path().join("prog_annotated.teal").exists());
}

#[test]
fn test_invalid_json() {
    let ctx = TestContext::default();
    let map = ctx.create_file("prog.map.json", "{mapping:").unwrap();
    let source = ctx.create_file("prog.teal", SAMPLE_SOURCE).unwrap();
    cmd(&ctx)
        .arg(&map)
        .arg(&source)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid source map JSON"));
}

#[test]
fn test_malformed_tokens_are_not_fatal() {
    let ctx = TestContext::default();
    let map = ctx.create_source_map("prog.map.json", "AAAA;A*AA;g;AACA").unwrap();
    let source = ctx.create_file("prog.teal", "a\nb\n").unwrap();
    cmd(&ctx).arg(&map).arg(&source).assert().success();
    assert_eq!(
        ctx.read("prog_annotated.teal"),
        "a   // PC: [0]\nb   // PC: [3]\n"
    );
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let ctx = TestContext::default();
    ctx.create_file(".sourcemap-annotate.toml", "[output\nnaming =")
        .unwrap();
    let map = ctx.create_source_map("prog.map.json", "AAAA").unwrap();
    let source = ctx.create_file("prog.teal", "int 1\n").unwrap();
    cmd(&ctx).arg(&map).arg(&source).assert().success();
    assert_eq!(ctx.read("prog_annotated.teal"), "int 1   // PC: [0]\n");
}
