use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Indentation width used by [`export`].
pub const DEFAULT_INDENT: usize = 4;

/// Extension appended when a save path has none.
pub const DEFAULT_EXTENSION: &str = "json";

/// The document written by an export: `{"metadata": "<text>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub metadata: String,
}

impl ExportDocument {
    pub fn new(metadata: impl Into<String>) -> Self {
        Self {
            metadata: metadata.into(),
        }
    }

    /// Serialize as pretty JSON with `indent` spaces per level.
    pub fn to_json(&self, indent: usize) -> Result<Vec<u8>> {
        let indent = " ".repeat(indent);
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser).map_err(std::io::Error::from)?;
        Ok(buf)
    }
}

/// Write `metadata_text` verbatim under the `"metadata"` key to `dest`,
/// indented by [`DEFAULT_INDENT`] spaces.
///
/// # Example
///
/// ```rust,no_run
/// use image_inspector::export::export;
/// use std::path::Path;
///
/// export("Filename: photo.png\n", Path::new("out.json"))?;
/// # Ok::<(), image_inspector::Error>(())
/// ```
pub fn export(metadata_text: &str, dest: &Path) -> Result<()> {
    export_with_indent(metadata_text, dest, DEFAULT_INDENT)
}

/// Like [`export`] with a custom indentation width.
///
/// Any existing file at `dest` is replaced. The document is fully serialized
/// before the file is opened, so a destination that cannot be created is left
/// untouched; a failure part-way through the write itself (e.g. disk full)
/// may leave a truncated file behind, and is reported as
/// [`Error::Write`](crate::Error::Write).
pub fn export_with_indent(metadata_text: &str, dest: &Path, indent: usize) -> Result<()> {
    let bytes = ExportDocument::new(metadata_text).to_json(indent)?;
    std::fs::write(dest, bytes)?;
    log::info!("Metadata exported to {}", dest.display());
    Ok(())
}

/// Append `.json` to a path chosen without an extension.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}
