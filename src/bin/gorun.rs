// src/bin/gorun.rs
use std::process::ExitCode;

use gorun_engine::ToolchainConfig;
use gorun_utils::args::{self, GorunArgs};

fn main() -> ExitCode {
    let args = match args::parse_or_exit::<GorunArgs>() {
        Ok(args) => args,
        Err(code) => return code,
    };
    let config = ToolchainConfig::from(args);

    match gorun_engine::build_and_run(&config) {
        Ok(status) => child_exit_code(status),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Propagate the artifact's own exit code; signal-terminated children
/// (no code) map to failure.
fn child_exit_code(status: std::process::ExitStatus) -> ExitCode {
    if status.success() {
        return ExitCode::SUCCESS;
    }
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .map_or(ExitCode::FAILURE, ExitCode::from)
}
