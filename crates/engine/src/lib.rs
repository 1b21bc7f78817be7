// crates/engine/src/lib.rs

pub mod config;
pub mod error;
pub mod filesystem;
pub mod mover;
pub mod naming;
pub mod selection;
pub mod staleness;
pub mod toolchain;

pub use crate::config::{MoveConfig, MoveConfigBuilder, ToolchainConfig, ToolchainConfigBuilder};
pub use crate::error::{EngineError, Result};

use std::process::ExitStatus;

/// Run the build-and-run pipeline for one source file.
///
/// Rebuilds the artifact when the source is newer (or the artifact is
/// missing), then executes the artifact and blocks until it exits.
///
/// # Errors
///
/// Any failure along the pipeline is fatal: a missing or unreadable source,
/// a failing toolchain step, or an artifact that cannot be launched.
pub fn build_and_run(config: &ToolchainConfig) -> Result<ExitStatus> {
    let plan = naming::BuildPlan::for_source(config);

    if !plan.source.exists() {
        return Err(EngineError::SourceNotFound {
            path: plan.source.clone(),
        });
    }

    if staleness::needs_rebuild(&plan.source, &plan.artifact)? {
        toolchain::rebuild(config, &plan)?;
    }

    toolchain::execute_artifact(&plan.artifact)
}

/// Run the latest-download move pipeline.
///
/// Snapshots the source directory, picks the most recently modified entry
/// (sentinels excluded) and renames it into the destination directory.
///
/// # Errors
///
/// Fatal on an unreadable source directory, an empty listing after
/// exclusion, or a same-named file already present in the destination.
pub fn move_latest(config: &MoveConfig) -> Result<mover::MoveReport> {
    let entries = filesystem::list_dir(&config.source_dir)?;
    let chosen = selection::select_most_recent(&entries, &config.excluded, &config.source_dir)?;
    mover::move_entry(chosen, &config.dest_dir)
}
