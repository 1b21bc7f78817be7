// src/lib.rs

pub mod args;
pub mod config;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
