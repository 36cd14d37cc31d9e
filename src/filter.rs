use crate::rules::RuleSet;

/// Outcome of evaluating a candidate path against the exclusion list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The file participates in the build
    Included,
    /// The file is dropped from the compilation set
    Excluded,
}

/// Trait for exclusion pattern matching strategies
pub trait PatternMatcher: Send + Sync {
    /// Check if a normalized relative path matches the pattern
    fn matches(&self, path: &str, pattern: &str) -> bool;

    /// Get a human-readable description of this matcher strategy
    fn description(&self) -> &'static str;
}

/// Plain substring containment, the original exclusion semantics.
///
/// Note that `"littlefs/bd"` also matches `"not-littlefs/bdx/file.c"`; use
/// [`SegmentMatcher`] when matches must align to path-segment boundaries.
pub struct SubstringMatcher;

impl SubstringMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SubstringMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for SubstringMatcher {
    fn matches(&self, path: &str, pattern: &str) -> bool {
        path.contains(pattern)
    }

    fn description(&self) -> &'static str {
        "Substring matcher (pattern anywhere in the path)"
    }
}

/// Substring containment restricted to `/` boundaries
pub struct SegmentMatcher;

impl SegmentMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SegmentMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for SegmentMatcher {
    fn matches(&self, path: &str, pattern: &str) -> bool {
        if path == pattern {
            return true;
        }
        if let Some(rest) = path.strip_prefix(pattern) {
            if rest.starts_with('/') {
                return true;
            }
        }
        if let Some(rest) = path.strip_suffix(pattern) {
            if rest.ends_with('/') {
                return true;
            }
        }
        path.contains(&format!("/{}/", pattern))
    }

    fn description(&self) -> &'static str {
        "Segment matcher (pattern aligned to path-segment boundaries)"
    }
}

/// Normalize a path string to forward-slash separators
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// The exclusion predicate: an immutable ordered pattern list plus a
/// matching strategy.
///
/// `decide` is a pure function of the path; it holds no cross-invocation
/// state and never fails.
pub struct ExclusionFilter {
    patterns: Vec<String>,
    matcher: Box<dyn PatternMatcher>,
}

impl ExclusionFilter {
    /// Create a filter from the enabled rules of a rule set
    pub fn new(rules: &RuleSet, matcher: Box<dyn PatternMatcher>) -> Self {
        Self {
            patterns: rules.enabled_patterns(),
            matcher,
        }
    }

    /// Decide whether a relative path participates in the build.
    ///
    /// The path is normalized to forward slashes before matching. Patterns
    /// are tried in order and the first hit short-circuits; an empty path
    /// matches nothing and is included.
    pub fn decide(&self, path: &str) -> Decision {
        let normalized = normalize_path(path);
        for pattern in &self.patterns {
            if self.matcher.matches(&normalized, pattern) {
                return Decision::Excluded;
            }
        }
        Decision::Included
    }

    /// Get the active patterns in evaluation order
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Get information about the current matcher
    pub fn matcher_info(&self) -> &'static str {
        self.matcher.description()
    }
}
