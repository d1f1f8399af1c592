use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::{Result, StripError};

/// Batch configuration: which animations to build and how outputs are named.
/// Key notes:
///   - `only` is an exact-name set; `exclude` holds glob patterns applied after it
///   - `prefix` is prepended verbatim to every output file name
///   - `manifest` enables the Content.mgcb update after all strips are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Prefix for output file names (e.g. `player_` -> `player_idle.png`).
    #[serde(default)]
    pub prefix: String,
    /// Restrict processing to these animation names. `None` or an empty set processes all.
    #[serde(default)]
    pub only: Option<BTreeSet<String>>,
    /// Glob patterns on animation names to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Frame/strip file extension, matched case-insensitively.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Manifest file to append build entries to.
    #[serde(default)]
    pub manifest: Option<PathBuf>,
    /// Composite and report, but write neither strips nor manifest.
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            only: None,
            exclude: Vec::new(),
            extension: default_extension(),
            manifest: None,
            dry_run: false,
        }
    }
}

impl BatchConfig {
    /// Validates the configuration.
    ///
    /// Returns an error if:
    /// - The prefix contains a path separator (outputs must stay in the output dir)
    /// - The extension is empty or not a lossless format we can write
    /// - An exclude pattern is not a valid glob
    pub fn validate(&self) -> Result<()> {
        if self.prefix.contains(['/', '\\']) {
            return Err(StripError::InvalidConfig(format!(
                "prefix must not contain path separators: {:?}",
                self.prefix
            )));
        }
        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() {
            return Err(StripError::InvalidConfig("extension is empty".into()));
        }
        if !ext.eq_ignore_ascii_case("png") {
            return Err(StripError::InvalidConfig(format!(
                "unsupported extension {:?}: only png strips are written",
                self.extension
            )));
        }
        self.exclude_set()?;
        Ok(())
    }

    /// Extension without a leading dot, lower-cased.
    pub fn normalized_extension(&self) -> String {
        self.extension.trim_start_matches('.').to_ascii_lowercase()
    }

    /// Output file name for an animation: `<prefix><name>.<ext>`.
    pub fn output_name(&self, animation: &str) -> String {
        format!("{}{}.{}", self.prefix, animation, self.normalized_extension())
    }

    /// Returns true if the animation passes the `only` set and `exclude` globs.
    pub fn selects(&self, animation: &str, exclude: Option<&GlobSet>) -> bool {
        // an empty `only` set selects everything
        if let Some(only) = &self.only {
            if !only.is_empty() && !only.contains(animation) {
                return false;
            }
        }
        if let Some(ex) = exclude {
            if ex.is_match(animation) {
                return false;
            }
        }
        true
    }

    /// Compiles `exclude` into a matcher; `None` when no patterns are set.
    pub fn exclude_set(&self) -> Result<Option<GlobSet>> {
        if self.exclude.is_empty() {
            return Ok(None);
        }
        let mut b = GlobSetBuilder::new();
        for pat in &self.exclude {
            let glob = Glob::new(pat)
                .map_err(|e| StripError::InvalidConfig(format!("exclude {pat:?}: {e}")))?;
            b.add(glob);
        }
        let set = b
            .build()
            .map_err(|e| StripError::InvalidConfig(format!("exclude set: {e}")))?;
        Ok(Some(set))
    }
}

/// Parses a comma-separated `only` list (`"idle, run,dash"`), dropping empty names.
pub fn parse_only_list(s: &str) -> BTreeSet<String> {
    s.split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

fn default_extension() -> String {
    "png".into()
}

/// Builder for `BatchConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct BatchConfigBuilder {
    cfg: BatchConfig,
}

impl BatchConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: BatchConfig::default(),
        }
    }
    pub fn prefix(mut self, v: impl Into<String>) -> Self {
        self.cfg.prefix = v.into();
        self
    }
    pub fn only<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        self.cfg.only = if set.is_empty() { None } else { Some(set) };
        self
    }
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.cfg.exclude.push(pattern.into());
        self
    }
    pub fn extension(mut self, v: impl Into<String>) -> Self {
        self.cfg.extension = v.into();
        self
    }
    pub fn manifest(mut self, v: Option<PathBuf>) -> Self {
        self.cfg.manifest = v;
        self
    }
    pub fn dry_run(mut self, v: bool) -> Self {
        self.cfg.dry_run = v;
        self
    }
    pub fn build(self) -> BatchConfig {
        self.cfg
    }
}

impl BatchConfig {
    /// Create a fluent builder for `BatchConfig`.
    pub fn builder() -> BatchConfigBuilder {
        BatchConfigBuilder::new()
    }
}
