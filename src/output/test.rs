//! Test output implementation for verifying engine output in tests.
//!
//! Captures all output as structured data for easy assertions.

use super::{Output, OutputConfig};

/// A single output entry captured during testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEntry {
    Info(String),
    Success(String),
    Warning(String),
    Error(String),
    Debug(String),
    Step(String),
    Result(String),
    ListItem(String),
    Raw(String),
}

/// Test output implementation that captures all output for assertions.
///
/// # Example
///
/// ```ignore
/// let mut output = TestOutput::new();
/// some_operation(&mut output)?;
///
/// assert!(output.has_warning("skipping"));
/// assert!(!output.has_errors());
/// ```
#[derive(Debug, Default)]
pub struct TestOutput {
    config: OutputConfig,
    entries: Vec<OutputEntry>,
}

impl TestOutput {
    /// Create a new test output with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured entries, in emission order.
    pub fn entries(&self) -> &[OutputEntry] {
        &self.entries
    }

    /// Whether any warning containing `needle` was emitted.
    pub fn has_warning(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| match e {
            OutputEntry::Warning(msg) => msg.contains(needle),
            _ => false,
        })
    }

    /// Whether any info message containing `needle` was emitted.
    pub fn has_info(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| match e {
            OutputEntry::Info(msg) => msg.contains(needle),
            _ => false,
        })
    }

    /// Whether any error was emitted.
    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, OutputEntry::Error(_)))
    }

    /// All captured warnings.
    pub fn warnings(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                OutputEntry::Warning(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Output for TestOutput {
    fn info(&mut self, msg: &str) {
        self.entries.push(OutputEntry::Info(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.entries.push(OutputEntry::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.entries.push(OutputEntry::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.entries.push(OutputEntry::Error(msg.to_string()));
    }

    fn debug(&mut self, msg: &str) {
        self.entries.push(OutputEntry::Debug(msg.to_string()));
    }

    fn step(&mut self, msg: &str) {
        self.entries.push(OutputEntry::Step(msg.to_string()));
    }

    fn result(&mut self, msg: &str) {
        self.entries.push(OutputEntry::Result(msg.to_string()));
    }

    fn list_item(&mut self, item: &str) {
        self.entries.push(OutputEntry::ListItem(item.to_string()));
    }

    fn raw(&mut self, content: &str) {
        self.entries.push(OutputEntry::Raw(content.to_string()));
    }

    fn is_quiet(&self) -> bool {
        self.config.quiet
    }

    fn is_verbose(&self) -> bool {
        self.config.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_in_order() {
        let mut output = TestOutput::new();
        output.info("one");
        output.warning("two");
        output.result("three");

        assert_eq!(
            output.entries(),
            &[
                OutputEntry::Info("one".into()),
                OutputEntry::Warning("two".into()),
                OutputEntry::Result("three".into()),
            ]
        );
        assert!(output.has_warning("two"));
        assert!(!output.has_errors());
    }
}
