// crates/shared-kernel/src/lib.rs

pub mod path;
pub mod value_objects;

pub use value_objects::{FileMeta, FileName, FilePath, ModificationTime};
