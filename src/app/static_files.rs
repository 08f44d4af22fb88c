//! Static file serving from the document root.

use anyhow::Context;
use std::path::{Path, PathBuf};

pub const HTML_CONTENT_TYPE: &str = "text/html";
pub const CSS_CONTENT_TYPE: &str = "text/css";

/// Content type by path prefix: stylesheets live under `/css`, everything
/// else is served as HTML.
pub fn content_type_for(path: &str) -> &'static str {
    if path.starts_with("/css") {
        CSS_CONTENT_TYPE
    } else {
        HTML_CONTENT_TYPE
    }
}

/// Reads the file at `path` under `root`, whole.
///
/// The request path's leading slash is stripped before joining so the
/// lookup stays relative to the root, and paths carrying a `..` segment are
/// rejected outright. A missing file surfaces as an error; no fallback page
/// exists at this layer.
pub async fn load(root: &Path, path: &str) -> anyhow::Result<Vec<u8>> {
    if path.split('/').any(|segment| segment == "..") {
        anyhow::bail!("rejected path traversal in {path:?}");
    }

    let full = resolve(root, path);
    let bytes = tokio::fs::read(&full)
        .await
        .with_context(|| format!("reading static file {}", full.display()))?;

    Ok(bytes)
}

fn resolve(root: &Path, path: &str) -> PathBuf {
    root.join(path.trim_start_matches('/'))
}
