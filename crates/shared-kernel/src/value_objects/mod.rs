// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_info;
pub mod file_meta;

pub use file_info::{FileName, FilePath, ModificationTime};
pub use file_meta::FileMeta;
