use derive_builder::Builder;
use std::path::PathBuf;

/// Toolchain layout for the build-and-run pipeline.
///
/// The defaults mirror the classic Go toolchain: `8g` compiles `FOO.go`
/// into `FOO.8`, `8l` links that into a fixed `8.out`, which is then
/// renamed to `FOO.go.exe`. Every name is injectable so the pipeline can
/// be pointed at a different toolchain (and exercised in tests).
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ToolchainConfig {
    /// Source file as given on the command line; the suffix is appended
    /// during plan derivation when missing.
    pub source: PathBuf,
    #[builder(default = "\"8g\".to_string()")]
    pub compiler: String,
    #[builder(default = "\"8l\".to_string()")]
    pub linker: String,
    /// Fixed-name output the linker always produces.
    #[builder(default = "PathBuf::from(\"8.out\")")]
    pub linker_output: PathBuf,
    #[builder(default = "\"go\".to_string()")]
    pub source_suffix: String,
    #[builder(default = "\"exe\".to_string()")]
    pub artifact_suffix: String,
    #[builder(default = "\"8\".to_string()")]
    pub intermediate_suffix: String,
}

/// Source/destination layout for the latest-download move pipeline.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct MoveConfig {
    /// Directory scanned for the most recent entry.
    #[builder(default = "default_downloads_dir()")]
    pub source_dir: PathBuf,
    /// Directory the entry is renamed into.
    #[builder(default = "PathBuf::from(\".\")")]
    pub dest_dir: PathBuf,
    /// Sentinel names that are never selectable.
    #[builder(default = "vec![\".DS_Store\".to_string()]")]
    pub excluded: Vec<String>,
}

impl Default for MoveConfig {
    fn default() -> Self {
        MoveConfigBuilder::default()
            .build()
            .unwrap_or_else(|_| unreachable!("all MoveConfig fields carry defaults"))
    }
}

fn default_downloads_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Downloads")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolchain_defaults_follow_go_layout() {
        let config = ToolchainConfigBuilder::default()
            .source("prog.go")
            .build()
            .unwrap();
        assert_eq!(config.compiler, "8g");
        assert_eq!(config.linker, "8l");
        assert_eq!(config.linker_output, PathBuf::from("8.out"));
        assert_eq!(config.source_suffix, "go");
        assert_eq!(config.artifact_suffix, "exe");
        assert_eq!(config.intermediate_suffix, "8");
    }

    #[test]
    fn move_defaults_point_at_downloads() {
        let config = MoveConfig::default();
        assert!(config.source_dir.ends_with("Downloads"));
        assert_eq!(config.dest_dir, PathBuf::from("."));
        assert_eq!(config.excluded, vec![".DS_Store".to_string()]);
    }
}
