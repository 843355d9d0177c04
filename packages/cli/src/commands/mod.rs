pub mod analyze;
pub mod export;
pub mod import;
pub mod init;
pub mod lint;
pub mod projects;
pub mod search;

pub use analyze::{analyze, AnalyzeArgs};
pub use export::{export, ExportArgs};
pub use import::{import, ImportArgs};
pub use init::{init, InitArgs};
pub use lint::{lint, LintArgs};
pub use projects::{projects, ProjectsArgs};
pub use search::{search, SearchArgs};

use anyhow::{anyhow, Result};
use screenplay_document::import::import as import_content;
use screenplay_document::{Document, ImportKind};
use screenplay_workspace::Project;
use std::fs;
use std::path::Path;

/// Largest file the import boundary accepts
pub const MAX_IMPORT_BYTES: u64 = 50 * 1024 * 1024;

/// Read a script file, picking the import kind from its extension.
///
/// JSON files may hold either a serialized document or a saved project.
pub fn load_document(path: &Path) -> Result<Document> {
    let size = fs::metadata(path)
        .map_err(|e| anyhow!("Cannot read {}: {}", path.display(), e))?
        .len();
    if size > MAX_IMPORT_BYTES {
        return Err(anyhow!(
            "{} is {} MB, the limit is {} MB",
            path.display(),
            size / (1024 * 1024),
            MAX_IMPORT_BYTES / (1024 * 1024)
        ));
    }

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let kind = ImportKind::from_extension(extension)?;
    let content = fs::read_to_string(path)?;

    if kind == ImportKind::Serialized {
        if let Ok(project) = serde_json::from_str::<Project>(&content) {
            return Ok(project.document()?);
        }
    }

    Ok(import_content(&content, kind)?)
}
