// crates/engine/tests/build_pipeline.rs
//
// End-to-end pipeline tests with a stub toolchain: shell scripts standing
// in for the compiler and linker, so the staleness gate and the
// compile-link-rename-remove sequence are exercised for real.
#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use gorun_engine::{build_and_run, EngineError, ToolchainConfig, ToolchainConfigBuilder};

fn write_script(path: &Path, body: &str) {
    std::fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).unwrap();
}

/// Stub toolchain rooted in `dir`: the compiler touches `<stem>.8`, the
/// linker drops an executable `8.out` next to its input.
fn stub_toolchain(dir: &Path, source: &Path) -> ToolchainConfig {
    let compiler = dir.join("stub-compiler");
    write_script(&compiler, "touch \"${1%.go}.8\"");

    let linker = dir.join("stub-linker");
    let out = dir.join("8.out");
    write_script(
        &linker,
        &format!(
            "printf '#!/bin/sh\\nexit 0\\n' > \"{out}\"\nchmod +x \"{out}\"",
            out = out.display()
        ),
    );

    ToolchainConfigBuilder::default()
        .source(source)
        .compiler(compiler.to_string_lossy().into_owned())
        .linker(linker.to_string_lossy().into_owned())
        .linker_output(out)
        .build()
        .unwrap()
}

#[test]
fn stale_source_triggers_rebuild_then_runs() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("x.go");
    std::fs::write(&source, b"package main").unwrap();

    let config = stub_toolchain(dir.path(), &source);
    let status = build_and_run(&config).unwrap();
    assert!(status.success());

    // Artifact was produced and renamed; intermediate was cleaned up.
    assert!(dir.path().join("x.go.exe").exists());
    assert!(!dir.path().join("x.8").exists());
    assert!(!dir.path().join("8.out").exists());
}

#[test]
fn fresh_artifact_skips_the_toolchain() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("x.go");
    std::fs::write(&source, b"package main").unwrap();

    // Artifact pushed clearly past the source's timestamp.
    let artifact = dir.path().join("x.go.exe");
    write_script(&artifact, "exit 0");
    let f = std::fs::OpenOptions::new().append(true).open(&artifact).unwrap();
    f.set_modified(std::time::SystemTime::now() + std::time::Duration::from_secs(5))
        .unwrap();
    drop(f);

    // A toolchain that cannot run proves it was never invoked.
    let config = ToolchainConfigBuilder::default()
        .source(&source)
        .compiler("compiler-that-does-not-exist")
        .linker("linker-that-does-not-exist")
        .build()
        .unwrap();

    let status = build_and_run(&config).unwrap();
    assert!(status.success());
}

#[test]
fn child_exit_code_is_surfaced() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("x.go");
    std::fs::write(&source, b"package main").unwrap();

    let artifact = dir.path().join("x.go.exe");
    write_script(&artifact, "exit 3");

    let config = ToolchainConfigBuilder::default()
        .source(&source)
        .compiler("compiler-that-does-not-exist")
        .linker("linker-that-does-not-exist")
        .build()
        .unwrap();

    let status = build_and_run(&config).unwrap();
    assert_eq!(status.code(), Some(3));
}

#[test]
fn missing_source_is_fatal_before_any_toolchain_call() {
    let dir = tempfile::tempdir().unwrap();
    let config = ToolchainConfigBuilder::default()
        .source(dir.path().join("absent.go"))
        .compiler("compiler-that-does-not-exist")
        .linker("linker-that-does-not-exist")
        .build()
        .unwrap();

    let err = build_and_run(&config).unwrap_err();
    match err {
        EngineError::SourceNotFound { path } => {
            assert!(path.to_string_lossy().contains("absent.go"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failing_compiler_aborts_the_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("x.go");
    std::fs::write(&source, b"package main").unwrap();

    let compiler = dir.path().join("stub-compiler");
    write_script(&compiler, "exit 1");

    let config = ToolchainConfigBuilder::default()
        .source(&source)
        .compiler(compiler.to_string_lossy().into_owned())
        .linker("linker-that-must-not-run")
        .build()
        .unwrap();

    let err = build_and_run(&config).unwrap_err();
    assert!(matches!(err, EngineError::ToolchainFailed { .. }));
    assert!(!dir.path().join("x.go.exe").exists());
}

#[test]
fn suffix_is_appended_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("bare.go");
    std::fs::write(&source, b"package main").unwrap();

    // Configured without the .go suffix; the plan normalizes it.
    let config = stub_toolchain(dir.path(), &dir.path().join("bare"));
    let status = build_and_run(&config).unwrap();
    assert!(status.success());
    assert!(dir.path().join("bare.go.exe").exists());
}
