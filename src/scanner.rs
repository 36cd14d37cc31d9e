use crate::filter::{Decision, ExclusionFilter, normalize_path};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Status of a candidate node for callback reporting
#[derive(Debug, Clone)]
pub enum ScanStatus {
    /// File was added to the compilation set
    Added,
    /// File was excluded by an exclusion rule
    Excluded,
    /// Directory entry could not be read
    Unreadable(String),
}

/// Walks a source root and applies an exclusion filter to every file.
///
/// The filter is injected into the traversal rather than registered on a
/// process-wide hook, so there is no ordering ambiguity between callbacks.
pub struct SourceScanner {
    root: PathBuf,
}

impl SourceScanner {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Compute the normalized forward-slash path of an entry relative to the
    /// source root
    fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        Some(normalize_path(&relative.to_string_lossy()))
    }

    /// Traverse the source root and collect the compilation set.
    ///
    /// Every file is reported through `on_path` with its decision; the
    /// returned vector holds the included relative paths in traversal
    /// order. Unreadable entries are reported and skipped, never fatal.
    pub fn scan<F>(&self, filter: &ExclusionFilter, mut on_path: F) -> Result<Vec<String>>
    where
        F: FnMut(&str, ScanStatus),
    {
        let metadata = std::fs::metadata(&self.root)
            .context(format!("Failed to read source root: {}", self.root.display()))?;
        if !metadata.is_dir() {
            anyhow::bail!("Source root is not a directory: {}", self.root.display());
        }

        let mut included = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    on_path("", ScanStatus::Unreadable(e.to_string()));
                    continue;
                }
            };

            // Only files are candidate nodes
            if entry.file_type().is_dir() {
                continue;
            }

            let Some(relative) = self.relative_path(entry.path()) else {
                continue;
            };

            match filter.decide(&relative) {
                Decision::Included => {
                    on_path(&relative, ScanStatus::Added);
                    included.push(relative);
                }
                Decision::Excluded => {
                    on_path(&relative, ScanStatus::Excluded);
                }
            }
        }

        Ok(included)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SubstringMatcher;
    use crate::rules::RuleSet;
    use std::fs;
    use tempfile::TempDir;

    fn write_tree(root: &Path, paths: &[&str]) {
        for path in paths {
            let full = root.join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(&full, "// test").unwrap();
        }
    }

    #[test]
    fn test_scan_applies_builtin_exclusions() {
        let temp_dir = TempDir::new().unwrap();
        write_tree(
            temp_dir.path(),
            &[
                "littlefs/lfs.c",
                "littlefs/bd/lfs_rambd.c",
                "littlefs/runners/test_runner.c",
                "srxecore/main.c",
                "srxecore/core.c",
                "u8g2/cppsrc/U8g2lib.cpp",
            ],
        );

        let filter = ExclusionFilter::new(&RuleSet::builtin(), Box::new(SubstringMatcher::new()));
        let scanner = SourceScanner::new(temp_dir.path());

        let mut excluded = Vec::new();
        let included = scanner
            .scan(&filter, |path, status| {
                if matches!(status, ScanStatus::Excluded) {
                    excluded.push(path.to_string());
                }
            })
            .unwrap();

        assert_eq!(
            included,
            vec!["littlefs/lfs.c", "srxecore/core.c", "u8g2/cppsrc/U8g2lib.cpp"]
        );
        assert_eq!(excluded.len(), 3);
        assert!(excluded.contains(&"littlefs/bd/lfs_rambd.c".to_string()));
        assert!(excluded.contains(&"littlefs/runners/test_runner.c".to_string()));
        assert!(excluded.contains(&"srxecore/main.c".to_string()));
    }

    #[test]
    fn test_scan_with_empty_rule_set_includes_everything() {
        let temp_dir = TempDir::new().unwrap();
        write_tree(temp_dir.path(), &["a.c", "sub/b.c"]);

        let rules = RuleSet::parse(&[]).unwrap();
        let filter = ExclusionFilter::new(&rules, Box::new(SubstringMatcher::new()));
        let scanner = SourceScanner::new(temp_dir.path());

        let included = scanner.scan(&filter, |_, _| {}).unwrap();
        assert_eq!(included, vec!["a.c", "sub/b.c"]);
    }

    #[test]
    fn test_scan_missing_root_fails() {
        let filter = ExclusionFilter::new(&RuleSet::builtin(), Box::new(SubstringMatcher::new()));
        let scanner = SourceScanner::new("/path/that/does/not/exist");

        assert!(scanner.scan(&filter, |_, _| {}).is_err());
    }

    #[test]
    fn test_scan_root_that_is_a_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("main.c");
        fs::write(&file, "int main(void) { return 0; }").unwrap();

        let filter = ExclusionFilter::new(&RuleSet::builtin(), Box::new(SubstringMatcher::new()));
        let scanner = SourceScanner::new(&file);

        assert!(scanner.scan(&filter, |_, _| {}).is_err());
    }
}
