//! Local storage probing and bootstrap.
//!
//! Limited to existence checks and directory creation. Verification never
//! deletes or rewrites files it finds, so re-runs against the same data root
//! are idempotent.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Create `path` and any missing ancestors. Failure is fatal to the caller:
/// without writable storage no later step can produce valid results.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("create directory {}", path.display()))
}

/// Pure existence check, used for directories and manifest/voice files alike.
pub fn path_exists(path: &Path) -> bool {
    path.exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_creates_missing_ancestors() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("cg").join("eng").join("USA");
        assert!(!path_exists(&nested));
        ensure_dir(&nested).unwrap();
        assert!(path_exists(&nested));
        // Idempotent on an existing tree.
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn ensure_dir_fails_when_ancestor_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("cg");
        std::fs::write(&blocker, b"not a directory").unwrap();
        assert!(ensure_dir(&blocker.join("eng")).is_err());
    }
}
