//! # image-inspector
//!
//! Open an image, preview it as a bounded thumbnail, read its basic metadata
//! (filename, dimensions, format, color mode, inspection time) and export that
//! metadata as a small JSON document.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use image_inspector::export::export;
//! use image_inspector::inspect::inspect;
//! use std::path::Path;
//!
//! fn main() -> image_inspector::Result<()> {
//!     let inspection = inspect(Path::new("photo.png"))?;
//!     let text = inspection.record.display_text();
//!     print!("{text}");
//!
//!     println!(
//!         "Preview: {}x{}",
//!         inspection.thumbnail.width(),
//!         inspection.thumbnail.height()
//!     );
//!
//!     export(&text, Path::new("photo.json"))?;
//!     Ok(())
//! }
//! ```
//!
//! The exported file wraps the displayed text verbatim:
//!
//! ```json
//! {
//!     "metadata": "Filename: photo.png\nSize: 800x600\nFormat: PNG\nMode: RGB\nTimestamp: 2024-01-01 12:00:00\n"
//! }
//! ```
//!
//! ## Supported Formats
//!
//! | Format | Extensions |
//! |--------|------------|
//! | PNG | `.png` |
//! | JPEG | `.jpg`, `.jpeg` |
//! | GIF | `.gif` |
//! | BMP | `.bmp` |
//!
//! ## Modules
//!
//! - [`inspect`] — decoding, [`ImageRecord`](inspect::ImageRecord) and thumbnails
//! - [`export`] — the `{"metadata": ...}` JSON export
//! - [`notify`] — user-facing success/error messages
//! - [`config`] — configuration loading/saving
//! - [`error`] — the crate's error type

pub mod config;
pub mod error;
pub mod export;
pub mod inspect;
pub mod notify;

pub use error::{Error, Result};
