//! Cover art scaled to a fixed box

use anyhow::Result;
use image::{imageops::FilterType, DynamicImage};
use std::path::Path;

/// Target size for `(orig_w, orig_h)` in a `width`×`height` box.
///
/// With `fill` the image is stretched to the box, otherwise the aspect
/// ratio is kept and the image fits inside.
pub fn fit_size(orig: (u32, u32), target: (u32, u32), fill: bool) -> (u32, u32) {
    let (orig_w, orig_h) = orig;
    if fill || orig_w == 0 || orig_h == 0 {
        return target;
    }
    let (width, height) = target;
    let scale = (width as f64 / orig_w as f64).min(height as f64 / orig_h as f64);
    ((orig_w as f64 * scale) as u32, (orig_h as f64 * scale) as u32)
}

/// Image holder with a requested display size
#[derive(Debug, Clone)]
pub struct ScalableImage {
    size: (u32, u32),
    image: Option<DynamicImage>,
}

impl ScalableImage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            image: None,
        }
    }

    pub fn set_image_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Scaled image currently shown
    pub fn image(&self) -> Option<&DynamicImage> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, path: impl AsRef<Path>, fill: bool) -> Result<()> {
        let img = image::open(path)?;
        self.set_image_pixbuf(&img, fill);
        Ok(())
    }

    /// Empty data leaves the current image untouched.
    pub fn set_image_data(&mut self, data: &[u8], fill: bool) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }
        let img = image::load_from_memory(data)?;
        self.set_image_pixbuf(&img, fill);
        Ok(())
    }

    pub fn set_image_pixbuf(&mut self, img: &DynamicImage, fill: bool) {
        let (width, height) = fit_size((img.width(), img.height()), self.size, fill);
        // Triangle = interpolation bilinéaire
        self.image = Some(img.resize_exact(width.max(1), height.max(1), FilterType::Triangle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_keeps_ratio() {
        assert_eq!(fit_size((400, 200), (100, 100), false), (100, 50));
        assert_eq!(fit_size((200, 400), (100, 100), false), (50, 100));
        assert_eq!(fit_size((400, 200), (100, 100), true), (100, 100));
    }

    #[test]
    fn test_scaled_pixbuf() {
        let mut widget = ScalableImage::new(64, 64);
        let img = DynamicImage::new_rgba8(256, 128);
        widget.set_image_pixbuf(&img, false);

        let shown = widget.image().unwrap();
        assert_eq!((shown.width(), shown.height()), (64, 32));
    }

    #[test]
    fn test_empty_data_is_ignored() {
        let mut widget = ScalableImage::new(64, 64);
        widget.set_image_data(&[], false).unwrap();
        assert!(widget.image().is_none());
        assert!(widget.set_image_data(b"not an image", false).is_err());
    }
}
