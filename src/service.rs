use crate::{
    config::Config,
    filter::{ExclusionFilter, PatternMatcher, SegmentMatcher, SubstringMatcher},
    input::RuleReader,
    rules::RuleSet,
    scanner::{ScanStatus, SourceScanner},
};
use anyhow::Result;

/// Summary of a completed filter run
#[derive(Debug, Clone, Default)]
pub struct FilterReport {
    pub included: Vec<String>,
    pub excluded: Vec<String>,
    pub unreadable_count: usize,
}

/// Main service that loads the exclusion rules, scans the source tree and
/// emits the compilation set
pub struct FilterService {
    reader: Option<Box<dyn RuleReader>>,
    config: Config,
}

impl FilterService {
    /// Create a new filter service. Without a reader the built-in rule list
    /// is used.
    pub fn new(reader: Option<Box<dyn RuleReader>>, config: Config) -> Self {
        Self { reader, config }
    }

    /// Load the rule set from the configured source
    pub async fn load_rules(&self) -> crate::core::Result<RuleSet> {
        match &self.reader {
            Some(reader) => {
                let lines = reader.read_lines().await?;
                RuleSet::parse(&lines)
            }
            None => Ok(RuleSet::builtin()),
        }
    }

    fn matcher(&self) -> Box<dyn PatternMatcher> {
        if self.config.segment_match {
            Box::new(SegmentMatcher::new())
        } else {
            Box::new(SubstringMatcher::new())
        }
    }

    /// Run the complete filter pass and return the report
    pub async fn run(&self) -> Result<FilterReport> {
        let rules = self.load_rules().await?;

        if self.config.show_progress {
            println!(
                "📝 Loaded {} exclusion rules ({} active, {} disabled).",
                rules.rules().len(),
                rules.enabled_count(),
                rules.disabled_count()
            );
            if rules.is_empty() {
                println!("No exclusion rules configured. Every file will be included.");
            }
        }

        let filter = ExclusionFilter::new(&rules, self.matcher());

        if self.config.show_progress {
            println!(
                "Scanning {} ({})...",
                self.config.source_root,
                filter.matcher_info()
            );
        }

        let scanner = SourceScanner::new(self.config.source_root.as_str());

        let mut report = FilterReport::default();

        report.included = scanner.scan(&filter, |path, status| match status {
            ScanStatus::Added => {}
            ScanStatus::Excluded => {
                report.excluded.push(path.to_string());
            }
            ScanStatus::Unreadable(message) => {
                report.unreadable_count += 1;
                eprintln!("Warning: Failed to read directory entry: {}", message);
            }
        })?;

        // Excluded files go to stderr so the compilation set on stdout
        // stays machine-readable
        if self.config.show_excluded {
            for path in &report.excluded {
                eprintln!("🚫 {}", path);
            }
        }

        // The compilation set is the program's output
        for path in &report.included {
            println!("{}", path);
        }

        if self.config.show_progress {
            println!(
                "✅ Selected {} of {} files for compilation.",
                report.included.len(),
                report.included.len() + report.excluded.len()
            );
        }

        Ok(report)
    }
}
