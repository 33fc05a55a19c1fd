use chrono::{DateTime, Local};
use image::{ColorType, ImageFormat};
use serde::{Serialize, Serializer};

/// Format used for the inspection timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Basic metadata for one inspected image.
///
/// A record only exists for an image that decoded successfully: every field is
/// filled in at once by [`inspect`](super::inspect), and a failed inspection
/// yields no record at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageRecord {
    /// Final path component of the inspected file.
    pub filename: String,
    /// Original decoded width (not the thumbnail width).
    pub width: u32,
    /// Original decoded height (not the thumbnail height).
    pub height: u32,
    /// Decoder-reported container format, e.g. `PNG`.
    pub format: String,
    /// Decoder-reported pixel layout, e.g. `RGB`.
    pub color_mode: String,
    /// Wall-clock time of the inspection.
    #[serde(serialize_with = "serialize_timestamp")]
    pub inspected_at: DateTime<Local>,
}

impl ImageRecord {
    /// `"WxH"` using the original dimensions.
    pub fn size(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    pub fn timestamp(&self) -> String {
        self.inspected_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// The `(label, value)` pairs shown to the user, in display order.
    pub fn fields(&self) -> [(&'static str, String); 5] {
        [
            ("Filename", self.filename.clone()),
            ("Size", self.size()),
            ("Format", self.format.clone()),
            ("Mode", self.color_mode.clone()),
            ("Timestamp", self.timestamp()),
        ]
    }

    /// One `"Key: Value"` line per field, each newline-terminated.
    ///
    /// This is the text placed in the metadata panel and, unchanged, the
    /// payload of an export.
    pub fn display_text(&self) -> String {
        self.fields()
            .iter()
            .map(|(key, value)| format!("{key}: {value}\n"))
            .collect()
    }
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Local>, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&ts.format(TIMESTAMP_FORMAT))
}

/// Upper-case name for a decoded container format.
pub fn format_name(format: ImageFormat) -> String {
    match format {
        ImageFormat::Png => "PNG".to_string(),
        ImageFormat::Jpeg => "JPEG".to_string(),
        ImageFormat::Gif => "GIF".to_string(),
        ImageFormat::Bmp => "BMP".to_string(),
        other => format!("{other:?}").to_uppercase(),
    }
}

/// Conventional mode name for a decoded pixel layout.
pub fn color_mode_name(color: ColorType) -> String {
    match color {
        ColorType::L8 => "L".to_string(),
        ColorType::La8 => "LA".to_string(),
        ColorType::Rgb8 => "RGB".to_string(),
        ColorType::Rgba8 => "RGBA".to_string(),
        ColorType::L16 => "I;16".to_string(),
        ColorType::La16 => "LA;16".to_string(),
        ColorType::Rgb16 => "RGB;16".to_string(),
        ColorType::Rgba16 => "RGBA;16".to_string(),
        ColorType::Rgb32F => "RGB;F32".to_string(),
        ColorType::Rgba32F => "RGBA;F32".to_string(),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> ImageRecord {
        ImageRecord {
            filename: "photo.png".into(),
            width: 800,
            height: 600,
            format: "PNG".into(),
            color_mode: "RGB".into(),
            inspected_at: Local.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn display_text_lists_every_field() {
        assert_eq!(
            sample().display_text(),
            "Filename: photo.png\nSize: 800x600\nFormat: PNG\nMode: RGB\nTimestamp: 2024-01-01 12:00:00\n"
        );
    }

    #[test]
    fn serializes_with_formatted_timestamp() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["filename"], "photo.png");
        assert_eq!(value["width"], 800);
        assert_eq!(value["color_mode"], "RGB");
        assert_eq!(value["inspected_at"], "2024-01-01 12:00:00");
    }

    #[test]
    fn format_names() {
        assert_eq!(format_name(ImageFormat::Png), "PNG");
        assert_eq!(format_name(ImageFormat::Jpeg), "JPEG");
        assert_eq!(format_name(ImageFormat::Gif), "GIF");
        assert_eq!(format_name(ImageFormat::Bmp), "BMP");
        assert_eq!(format_name(ImageFormat::WebP), "WEBP");
    }

    #[test]
    fn color_mode_names() {
        assert_eq!(color_mode_name(ColorType::L8), "L");
        assert_eq!(color_mode_name(ColorType::La8), "LA");
        assert_eq!(color_mode_name(ColorType::Rgb8), "RGB");
        assert_eq!(color_mode_name(ColorType::Rgba8), "RGBA");
        assert_eq!(color_mode_name(ColorType::L16), "I;16");
    }
}
