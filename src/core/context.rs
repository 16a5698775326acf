//! Session directory context.
//!
//! Tracks the logical "current repository path" that relative operations
//! run against. This is an explicit value owned by the calling session,
//! not the process-wide working directory: every git invocation receives
//! the resolved path directly, so two sessions in one process cannot
//! trample each other's location.

use std::path::{Path, PathBuf};

/// An ordered stack of path segments over a fixed root.
#[derive(Debug, Clone)]
pub struct DirectoryContext {
    root: PathBuf,
    segments: Vec<String>,
}

impl DirectoryContext {
    /// Create a context anchored at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            segments: Vec::new(),
        }
    }

    /// Descend into `segment`. Mutation is always explicit; nothing in the
    /// engine pushes or pops on the caller's behalf except where documented.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Ascend `n` levels. Popping past the root stops at the root.
    pub fn pop(&mut self, n: usize) {
        let keep = self.segments.len().saturating_sub(n);
        self.segments.truncate(keep);
    }

    /// The resolved current path: root joined with every segment.
    pub fn current(&self) -> PathBuf {
        let mut path = self.root.clone();
        for segment in &self.segments {
            path.push(segment);
        }
        path
    }

    /// The anchoring root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// How many segments deep the context currently is.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_current() {
        let mut ctx = DirectoryContext::new("/repos");
        assert_eq!(ctx.current(), PathBuf::from("/repos"));

        ctx.push("proj");
        ctx.push("feature");
        assert_eq!(ctx.current(), PathBuf::from("/repos/proj/feature"));
        assert_eq!(ctx.depth(), 2);

        ctx.pop(1);
        assert_eq!(ctx.current(), PathBuf::from("/repos/proj"));
    }

    #[test]
    fn test_pop_past_root_stops_at_root() {
        let mut ctx = DirectoryContext::new("/repos");
        ctx.push("proj");
        ctx.pop(5);
        assert_eq!(ctx.current(), PathBuf::from("/repos"));
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn test_nested_branch_ascent() {
        // A worktree for branch `feature/x` lives two segments deep.
        let mut ctx = DirectoryContext::new("/repos/proj");
        ctx.push("feature");
        ctx.push("x");

        let branch = "feature/x";
        let levels = branch.split('/').count();
        ctx.pop(levels);
        assert_eq!(ctx.current(), PathBuf::from("/repos/proj"));
    }
}
