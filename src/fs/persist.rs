//! Writing the JSON document.

use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::fs::paths::ensure_parent_dir;

/// Serialize `document` as two-space indented JSON and write it to `path`.
///
/// The file is written in one operation and replaces any previous content.
pub async fn save_document<T: Serialize + ?Sized>(document: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(document)?;

    ensure_parent_dir(path).await.map_err(|e| match e {
        Error::Io(source) => Error::Persist {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })?;

    tokio::fs::write(path, json)
        .await
        .map_err(|source| Error::Persist {
            path: path.display().to_string(),
            source,
        })?;

    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
