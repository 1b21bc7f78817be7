// src/bin/mv_ldown.rs
use std::process::ExitCode;

use gorun_engine::MoveConfig;
use gorun_utils::args::{self, MvLdownArgs};

fn main() -> ExitCode {
    let args = match args::parse_or_exit::<MvLdownArgs>() {
        Ok(args) => args,
        Err(code) => return code,
    };
    let config = MoveConfig::from(args);

    match gorun_engine::move_latest(&config) {
        Ok(report) => {
            println!("{}", report.confirmation());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
