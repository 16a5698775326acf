use crate::error::EngineError;
use std::fs;
use std::path::Path;

/// Validate a new branch name before handing it to git.
///
/// The UI validates first; the engine re-checks because the constraint is
/// a hard invariant, not a presentation nicety. Nested names such as
/// `feature/x` are allowed and produce nested worktree directories.
pub fn validate_branch_name(branch_name: &str) -> Result<(), EngineError> {
    if branch_name.is_empty() {
        return Err(EngineError::Validation(
            "branch name cannot be empty".to_string(),
        ));
    }

    if branch_name.chars().any(char::is_whitespace) {
        return Err(EngineError::Validation(format!(
            "branch name cannot contain whitespace: '{branch_name}'"
        )));
    }

    // Path traversal: the branch name becomes a directory path next to
    // the canonical checkout.
    if branch_name.contains("..") {
        return Err(EngineError::Validation(format!(
            "branch name cannot contain '..': '{branch_name}'"
        )));
    }

    if branch_name.starts_with('/') || branch_name.ends_with('/') {
        return Err(EngineError::Validation(format!(
            "branch name cannot start or end with '/': '{branch_name}'"
        )));
    }

    if branch_name.chars().any(char::is_control) {
        return Err(EngineError::Validation(
            "branch name contains control characters".to_string(),
        ));
    }

    Ok(())
}

/// Copy `src` to `dst` byte-for-byte.
pub fn copy_file(src: &Path, dst: &Path) -> Result<(), EngineError> {
    fs::copy(src, dst)?;
    Ok(())
}
