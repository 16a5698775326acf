//! Output abstraction layer for separating IO from engine logic.
//!
//! Engine operations accept `&mut dyn Output` and report every non-fatal
//! notice through it instead of printing directly. This keeps the engine
//! free of a concrete frontend dependency: the CLI renders messages to the
//! terminal, tests capture them as structured entries.

mod cli;
mod test;

pub use cli::CliOutput;
pub use test::{OutputEntry, TestOutput};

/// Configuration for output behavior.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Suppress most output when true.
    pub quiet: bool,
    /// Enable debug/verbose output when true.
    pub verbose: bool,
}

impl OutputConfig {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }
}

/// Trait for abstracting output operations.
///
/// Implementors should respect `quiet` and `verbose` modes where
/// appropriate: warnings and errors are always shown, steps only in
/// verbose mode.
pub trait Output {
    /// Display an informational message. Respects quiet mode.
    fn info(&mut self, msg: &str);

    /// Display a success message. Respects quiet mode.
    fn success(&mut self, msg: &str);

    /// Display a warning to stderr. Always shown.
    fn warning(&mut self, msg: &str);

    /// Display an error to stderr. Always shown.
    fn error(&mut self, msg: &str);

    /// Display a debug message. Only shown in verbose mode.
    fn debug(&mut self, msg: &str);

    /// Display an intermediate step message. Only shown in verbose mode.
    fn step(&mut self, msg: &str);

    /// Display the final result of a command. Shown unless quiet.
    fn result(&mut self, msg: &str);

    /// Display a list item. Renders as " - item". Respects quiet mode.
    fn list_item(&mut self, item: &str);

    /// Output raw, unformatted content (machine-readable output).
    /// Not affected by quiet mode.
    fn raw(&mut self, content: &str);

    fn is_quiet(&self) -> bool;

    fn is_verbose(&self) -> bool;
}
