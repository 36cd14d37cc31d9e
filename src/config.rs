use crate::core::{Result, SrcskipError};
use std::env;

/// Configuration for the source filter tool
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the source tree to scan
    pub source_root: String,
    /// Path to the exclusion rules file (built-in list when absent)
    pub rules_path: Option<String>,
    /// Whether to show progress during operations
    pub show_progress: bool,
    /// Require pattern matches to align to path-segment boundaries
    pub segment_match: bool,
    /// Also report excluded files
    pub show_excluded: bool,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct ConfigBuilder {
    source_root: Option<String>,
    rules_path: Option<String>,
    show_progress: bool,
    segment_match: bool,
    show_excluded: bool,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_root(mut self, root: Option<&str>) -> Self {
        if let Some(r) = root {
            if !r.trim().is_empty() {
                self.source_root = Some(r.to_string());
            }
        }
        self
    }

    pub fn rules_path(mut self, path: Option<&str>, try_env: bool) -> Self {
        if let Some(p) = path {
            if !p.trim().is_empty() {
                self.rules_path = Some(p.to_string());
                return self;
            }
        }
        if try_env {
            if let Ok(env_path) = env::var("SRCSKIP_RULES") {
                let trimmed = env_path.trim();
                if !trimmed.is_empty() {
                    self.rules_path = Some(trimmed.to_string());
                }
            }
        }
        self
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn segment_match(mut self, segment: bool) -> Self {
        self.segment_match = segment;
        self
    }

    pub fn show_excluded(mut self, show: bool) -> Self {
        self.show_excluded = show;
        self
    }

    pub fn build(self) -> Result<Config> {
        let source_root = self
            .source_root
            .ok_or_else(|| SrcskipError::config("Source root must be set"))?
            .trim()
            .to_string();
        if source_root.is_empty() {
            return Err(SrcskipError::config("Source root cannot be empty"));
        }
        Ok(Config {
            source_root,
            rules_path: self.rules_path,
            show_progress: self.show_progress,
            segment_match: self.segment_match,
            show_excluded: self.show_excluded,
        })
    }
}
