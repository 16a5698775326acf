//! Core orchestration logic.
//!
//! These modules hold the engine's contracts: repository discovery,
//! worktree listing/lifecycle, and the session directory context. They
//! report through [`crate::output::Output`] and never print directly.

pub mod context;
pub mod repo;
pub mod worktree;

/// Outcome of a lifecycle operation that can partially succeed.
///
/// Hard failures are `Err(EngineError)`; `Degraded` means the primary
/// effect happened but an auxiliary step did not (e.g. the worktree was
/// created but the workspace config copy failed). Callers decide whether
/// a degraded outcome needs follow-up instead of fishing it out of logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every step completed.
    Ok,
    /// The primary effect completed; the warning describes what did not.
    Degraded(String),
}

impl Outcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }
}
