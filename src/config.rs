use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Switches that shape a conversion run
///
/// May be loaded from a TOML file such as:
///
/// ```toml
/// keep_files = true
/// dry_run = false
/// quiet = false
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertFlags {
    /// Leave `info.json` and the legacy difficulty files in place after writing
    pub keep_files: bool,
    /// Compute everything but write and delete nothing
    pub dry_run: bool,
    /// Suppress progress and error log lines
    pub quiet: bool,
}

impl ConvertFlags {
    /// Load flags from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config '{}'", path.display()))?;
        let flags: ConvertFlags = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config '{}'", path.display()))?;
        Ok(flags)
    }

    /// Combine two flag sets; a switch is on if either side turns it on
    pub fn merge(self, other: ConvertFlags) -> Self {
        Self {
            keep_files: self.keep_files || other.keep_files,
            dry_run: self.dry_run || other.dry_run,
            quiet: self.quiet || other.quiet,
        }
    }

    /// Whether superseded source files should be removed after writing
    pub fn deletes_sources(&self) -> bool {
        !self.keep_files && !self.dry_run
    }
}
