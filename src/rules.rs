use crate::core::{Result, SrcskipError};

/// A single exclusion rule: a path-substring pattern with an on/off toggle.
///
/// Disabled rules are carried through listing output but never match; they
/// replace the commented-out entries of an inline configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRule {
    pub pattern: String,
    pub enabled: bool,
}

impl ExclusionRule {
    pub fn enabled<S: Into<String>>(pattern: S) -> Self {
        Self {
            pattern: pattern.into(),
            enabled: true,
        }
    }

    pub fn disabled<S: Into<String>>(pattern: S) -> Self {
        Self {
            pattern: pattern.into(),
            enabled: false,
        }
    }
}

/// An ordered exclusion list, fixed once constructed
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<ExclusionRule>,
}

impl RuleSet {
    /// The built-in default list for the firmware tree
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                ExclusionRule::enabled("littlefs/bd"),
                ExclusionRule::enabled("littlefs/runners"),
                ExclusionRule::enabled("srxecore/main.c"),
                ExclusionRule::enabled("srxecore/smoketest.h"),
                ExclusionRule::disabled("u8g2/cppsrc"),
                ExclusionRule::disabled("u8g2/sys"),
                ExclusionRule::disabled("u8g2/tools"),
            ],
        }
    }

    /// Parse a rule set from the raw lines of a rules file.
    ///
    /// Lines are trimmed and blank lines are skipped here, not by the
    /// reader, so reported line numbers match the file. A line starting
    /// with `#` is a disabled rule; the remainder is its pattern. A `#`
    /// line whose remainder trims to nothing is a plain comment and is
    /// skipped, as is any rule whose pattern trims to the empty string (an
    /// empty pattern would match every path). Patterns must use forward
    /// slashes; a backslash can never match a normalized path.
    pub fn parse(lines: &[String]) -> Result<Self> {
        let mut rules = Vec::new();

        for (index, raw) in lines.iter().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let (text, enabled) = match line.strip_prefix('#') {
                Some(rest) => (rest.trim(), false),
                None => (line, true),
            };

            if text.is_empty() {
                continue;
            }

            if text.contains('\\') {
                return Err(SrcskipError::rules(
                    format!("pattern '{}' must use forward slashes", text),
                    Some(index + 1),
                ));
            }

            rules.push(ExclusionRule {
                pattern: text.to_string(),
                enabled,
            });
        }

        Ok(Self { rules })
    }

    /// All rules in declaration order, disabled ones included
    pub fn rules(&self) -> &[ExclusionRule] {
        &self.rules
    }

    /// The patterns that actually participate in matching, in order
    pub fn enabled_patterns(&self) -> Vec<String> {
        self.rules
            .iter()
            .filter(|rule| rule.enabled)
            .map(|rule| rule.pattern.clone())
            .collect()
    }

    pub fn enabled_count(&self) -> usize {
        self.rules.iter().filter(|rule| rule.enabled).count()
    }

    pub fn disabled_count(&self) -> usize {
        self.rules.iter().filter(|rule| !rule.enabled).count()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
