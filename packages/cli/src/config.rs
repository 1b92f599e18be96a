use std::path::{Path, PathBuf};

/// Directory holding the token documents, relative to the working directory.
pub const TOKENS_DIR: &str = "src/tokens";

/// Generated stylesheet, relative to the working directory.
pub const OUTPUT_FILE: &str = "theme.css";

/// Where a run reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tokens_dir: PathBuf,
    pub output_file: PathBuf,
}

impl Config {
    /// Fixed locations resolved against `cwd`
    pub fn resolve(cwd: &Path) -> Self {
        Self {
            tokens_dir: cwd.join(TOKENS_DIR),
            output_file: cwd.join(OUTPUT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_config() {
        let config = Config::resolve(Path::new("/work/design-system"));
        assert_eq!(config.tokens_dir, PathBuf::from("/work/design-system/src/tokens"));
        assert_eq!(config.output_file, PathBuf::from("/work/design-system/theme.css"));
    }
}
