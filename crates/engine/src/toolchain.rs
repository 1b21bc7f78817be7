//! Blocking toolchain and artifact execution.
//!
//! Children inherit the caller's standard streams; each step is a single
//! spawn-and-wait returning the exit status, with spawn failures kept
//! separate from non-zero exits.

use std::path::Path;
use std::process::{Command, ExitStatus};

use gorun_shared_kernel::path::explicit_invocation;

use crate::config::ToolchainConfig;
use crate::error::{EngineError, Result};
use crate::naming::BuildPlan;

/// Resolve `program` via the lookup path, run it to completion and demand
/// a zero exit.
///
/// # Errors
///
/// `Spawn` when the program cannot be launched, `ToolchainFailed` when it
/// exits non-zero.
fn run_checked(program: &str, arg: &Path) -> Result<()> {
    let status = Command::new(program)
        .arg(arg)
        .status()
        .map_err(|e| EngineError::Spawn {
            command: program.to_string(),
            source: e,
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(EngineError::ToolchainFailed {
            command: program.to_string(),
            status,
        })
    }
}

/// Compile, link, rename the fixed linker output to the artifact name and
/// drop the intermediate.
///
/// # Errors
///
/// Any failing step aborts immediately; no cleanup of earlier steps is
/// attempted.
pub fn rebuild(config: &ToolchainConfig, plan: &BuildPlan) -> Result<()> {
    run_checked(&config.compiler, &plan.source)?;
    run_checked(&config.linker, &plan.intermediate)?;

    std::fs::rename(&config.linker_output, &plan.artifact).map_err(|e| EngineError::Rename {
        from: config.linker_output.clone(),
        to: plan.artifact.clone(),
        source: e,
    })?;
    std::fs::remove_file(&plan.intermediate).map_err(|e| EngineError::Remove {
        path: plan.intermediate.clone(),
        source: e,
    })?;
    Ok(())
}

/// Launch the artifact by explicit path with no arguments, block until it
/// exits and hand back its exit status.
///
/// # Errors
///
/// `Spawn` when the artifact cannot be launched.
pub fn execute_artifact(artifact: &Path) -> Result<ExitStatus> {
    let invocation = explicit_invocation(artifact);
    Command::new(&invocation)
        .status()
        .map_err(|e| EngineError::Spawn {
            command: invocation.to_string_lossy().into_owned(),
            source: e,
        })
}
