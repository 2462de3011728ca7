//! Path and directory management.

use std::path::Path;

use crate::error::Result;

/// Ensure the parent directory of `path` exists, creating it if necessary.
pub async fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            tokio::fs::create_dir_all(parent).await?;
            tracing::debug!("Created directory {}", parent.display());
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_nested_parent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/output.json");

        tokio_test::block_on(ensure_parent_dir(&target)).unwrap();
        assert!(dir.path().join("a/b").is_dir());
    }

    #[test]
    fn test_bare_file_name() {
        tokio_test::block_on(ensure_parent_dir(Path::new("output.json"))).unwrap();
    }
}
