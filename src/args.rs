// src/args.rs
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueHint};

/// Parse arguments, treating usage errors as fatal (exit code 1) like any
/// other failure; `--help` and `--version` still print to stdout and exit
/// zero.
///
/// # Errors
///
/// The `Err` carries the exit code after clap has already printed its
/// message to the appropriate stream.
pub fn parse_or_exit<A: Parser>() -> Result<A, ExitCode> {
    A::try_parse().map_err(|e| {
        let fatal = e.use_stderr();
        let _ = e.print();
        if fatal {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

/// Arguments for `gorun`, the staleness-gated build-and-run wrapper.
#[derive(Parser, Debug)]
#[command(
    name = "gorun",
    version = crate::VERSION,
    about = "Compile a Go source file when it is newer than its binary, then run it"
)]
pub struct GorunArgs {
    /// Source file; the .go suffix is appended when missing
    #[arg(value_hint = ValueHint::FilePath)]
    pub source: PathBuf,

    /// Compiler resolved via the lookup path
    #[arg(long, default_value = "8g")]
    pub compiler: String,

    /// Linker resolved via the lookup path
    #[arg(long, default_value = "8l")]
    pub linker: String,
}

/// Arguments for `mv-ldown`, the latest-download mover.
#[derive(Parser, Debug)]
#[command(
    name = "mv-ldown",
    version = crate::VERSION,
    about = "Move the most recently modified file from ~/Downloads into the current directory"
)]
pub struct MvLdownArgs {
    /// Directory to pull from instead of ~/Downloads
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub from: Option<PathBuf>,
}
