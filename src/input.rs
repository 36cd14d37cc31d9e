use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::{self, BufRead};

/// Trait for reading raw exclusion rule lines
#[async_trait]
pub trait RuleReader: Send + Sync {
    /// Read the lines of the rule source as-is, blank lines included, so
    /// rule diagnostics can reference file line numbers
    async fn read_lines(&self) -> Result<Vec<String>>;
}

/// Reader that reads rules from a file
pub struct FileRuleReader {
    file_path: String,
}

impl FileRuleReader {
    pub fn new(file_path: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
        }
    }
}

#[async_trait]
impl RuleReader for FileRuleReader {
    async fn read_lines(&self) -> Result<Vec<String>> {
        let content = tokio::fs::read_to_string(&self.file_path)
            .await
            .context(format!("Failed to read rules file: {}", self.file_path))?;

        let lines = content.lines().map(|line| line.to_string()).collect();

        Ok(lines)
    }
}

/// Reader that reads rules from standard input
pub struct StdinRuleReader;

impl StdinRuleReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinRuleReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RuleReader for StdinRuleReader {
    async fn read_lines(&self) -> Result<Vec<String>> {
        let stdin = io::stdin();
        let mut lines = Vec::new();

        for line in stdin.lock().lines() {
            let line = line.context("Failed to read line from stdin")?;
            lines.push(line);
        }

        Ok(lines)
    }
}

/// Reader that takes rule lines from a vector (useful for testing)
pub struct VecRuleReader {
    lines: Vec<String>,
}

impl VecRuleReader {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

#[async_trait]
impl RuleReader for VecRuleReader {
    async fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}
