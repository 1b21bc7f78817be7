// src/config.rs
use gorun_engine::{MoveConfig, MoveConfigBuilder, ToolchainConfig, ToolchainConfigBuilder};

use crate::args::{GorunArgs, MvLdownArgs};

impl From<GorunArgs> for ToolchainConfig {
    fn from(args: GorunArgs) -> Self {
        ToolchainConfigBuilder::default()
            .source(args.source)
            .compiler(args.compiler)
            .linker(args.linker)
            .build()
            .unwrap_or_else(|_| unreachable!("all required toolchain fields are set"))
    }
}

impl From<MvLdownArgs> for MoveConfig {
    fn from(args: MvLdownArgs) -> Self {
        let mut builder = MoveConfigBuilder::default();
        if let Some(from) = args.from {
            builder.source_dir(from);
        }
        builder
            .build()
            .unwrap_or_else(|_| unreachable!("all MoveConfig fields carry defaults"))
    }
}
