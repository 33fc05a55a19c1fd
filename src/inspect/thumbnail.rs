use image::DynamicImage;

/// Default bounding box for the preview, in pixels (width, height).
pub const DEFAULT_BOUNDS: (u32, u32) = (400, 400);

/// Calculate the size of an image scaled to fit inside `bounds`.
///
/// The scale factor is `min(max_w / w, max_h / h)`, capped at `1.0` so small
/// images are never enlarged. Results are rounded to whole pixels and never
/// drop below one pixel on either axis.
///
/// # Examples
///
/// ```
/// use image_inspector::inspect::fit_within;
///
/// assert_eq!(fit_within((800, 600), (400, 400)), (400, 300));
/// assert_eq!(fit_within((120, 80), (400, 400)), (120, 80));
/// ```
pub fn fit_within(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (max_w, max_h) = bounds;

    if src_w == 0 || src_h == 0 {
        return source;
    }

    let scale = (max_w as f64 / src_w as f64)
        .min(max_h as f64 / src_h as f64)
        .min(1.0);

    let w = ((src_w as f64 * scale).round() as u32).max(1);
    let h = ((src_h as f64 * scale).round() as u32).max(1);
    (w, h)
}

/// A preview bitmap derived from a decoded image, bounded by the display box.
///
/// Each inspection produces a fresh thumbnail; it is never updated in place.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    image: DynamicImage,
}

impl Thumbnail {
    /// Scale `image` down to fit `bounds`. Images already inside the box are
    /// kept at their original size.
    pub fn from_image(image: DynamicImage, bounds: (u32, u32)) -> Self {
        let source = (image.width(), image.height());
        let (w, h) = fit_within(source, bounds);

        if (w, h) == source {
            return Self { image };
        }

        log::debug!("Thumbnail {}x{} -> {w}x{h}", source.0, source.1);
        Self {
            image: image.thumbnail_exact(w, h),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// RGBA8 pixels in row-major order, ready for upload as a texture.
    pub fn to_rgba_pixels(&self) -> Vec<u8> {
        self.image.to_rgba8().into_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    // ── fit_within ───────────────────────────────────────────────────

    #[test]
    fn landscape_is_limited_by_width() {
        assert_eq!(fit_within((800, 600), (400, 400)), (400, 300));
    }

    #[test]
    fn portrait_is_limited_by_height() {
        assert_eq!(fit_within((600, 800), (400, 400)), (300, 400));
    }

    #[test]
    fn small_images_are_not_upscaled() {
        assert_eq!(fit_within((100, 50), (400, 400)), (100, 50));
        assert_eq!(fit_within((400, 400), (400, 400)), (400, 400));
        assert_eq!(fit_within((1, 1), (400, 400)), (1, 1));
    }

    #[test]
    fn one_oversized_axis_triggers_scaling() {
        assert_eq!(fit_within((401, 3), (400, 400)), (400, 3));
        assert_eq!(fit_within((200, 1000), (400, 400)), (80, 400));
    }

    #[test]
    fn extreme_aspect_never_collapses_to_zero() {
        assert_eq!(fit_within((4000, 1), (400, 400)), (400, 1));
    }

    #[test]
    fn non_square_bounds() {
        assert_eq!(fit_within((1000, 1000), (400, 200)), (200, 200));
    }

    #[test]
    fn aspect_ratio_is_preserved_within_rounding() {
        for &(w, h) in &[(1920, 1080), (1234, 567), (3000, 4000), (999, 401)] {
            let (tw, th) = fit_within((w, h), DEFAULT_BOUNDS);
            assert_eq!(tw.max(th), 400, "{w}x{h}");
            let expected = h as f64 * tw as f64 / w as f64;
            assert!((th as f64 - expected).abs() <= 1.0, "{w}x{h} -> {tw}x{th}");
        }
    }

    // ── Thumbnail ────────────────────────────────────────────────────

    #[test]
    fn thumbnail_downscales_large_image() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(800, 600));
        let thumb = Thumbnail::from_image(img, DEFAULT_BOUNDS);
        assert_eq!((thumb.width(), thumb.height()), (400, 300));
        assert_eq!(thumb.to_rgba_pixels().len(), 400 * 300 * 4);
    }

    #[test]
    fn thumbnail_keeps_small_image() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(64, 32));
        let thumb = Thumbnail::from_image(img, DEFAULT_BOUNDS);
        assert_eq!((thumb.width(), thumb.height()), (64, 32));
    }
}
