//! Image inspection: decode a file, derive its [`ImageRecord`] and a
//! bounded-size [`Thumbnail`] for display.
//!
//! - [`inspect`] — inspect with the default 400×400 preview box
//! - [`inspect_within`] — inspect with a caller-chosen preview box
//!
//! Inspection reads the file and nothing else; the caller decides what to do
//! with the returned [`Inspection`].

mod record;
mod thumbnail;

pub use record::{ImageRecord, TIMESTAMP_FORMAT, color_mode_name, format_name};
pub use thumbnail::{DEFAULT_BOUNDS, Thumbnail, fit_within};

use chrono::Local;
use image::{ImageError, ImageReader};
use std::path::Path;

use crate::error::Result;

/// Extensions offered by the open dialog.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// The outcome of a successful inspection.
#[derive(Debug, Clone)]
pub struct Inspection {
    pub record: ImageRecord,
    pub thumbnail: Thumbnail,
}

/// Check if a file has one of the [`SUPPORTED_EXTENSIONS`].
///
/// This is only the selection-time filter; whether the file actually decodes
/// is decided by [`inspect`].
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Inspect an image, fitting its thumbnail into [`DEFAULT_BOUNDS`].
///
/// # Example
///
/// ```rust,no_run
/// use image_inspector::inspect::inspect;
/// use std::path::Path;
///
/// let inspection = inspect(Path::new("photo.png"))?;
/// print!("{}", inspection.record.display_text());
/// # Ok::<(), image_inspector::Error>(())
/// ```
pub fn inspect(path: &Path) -> Result<Inspection> {
    inspect_within(path, DEFAULT_BOUNDS)
}

/// Inspect an image, fitting its thumbnail into `bounds` (width, height).
///
/// The format is detected from the file contents, not the extension. Any
/// failure to open or decode the file is reported as
/// [`Error::Decode`](crate::Error::Decode) and no record is produced.
pub fn inspect_within(path: &Path, bounds: (u32, u32)) -> Result<Inspection> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(ImageError::IoError)?;
    let format = reader.format();
    let decoded = reader.decode()?;

    let record = ImageRecord {
        filename: path
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string()),
        width: decoded.width(),
        height: decoded.height(),
        format: format.map(format_name).unwrap_or_default(),
        color_mode: color_mode_name(decoded.color()),
        inspected_at: Local::now(),
    };

    log::info!(
        "Inspected {}: {} {} {}",
        record.filename,
        record.size(),
        record.format,
        record.color_mode
    );

    Ok(Inspection {
        thumbnail: Thumbnail::from_image(decoded, bounds),
        record,
    })
}
