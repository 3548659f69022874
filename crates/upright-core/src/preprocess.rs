//! Image preprocessing for the orientation classifier.

use image::DynamicImage;
use ndarray::Array4;
use tracing::debug;

/// Default classifier input edge length in pixels.
pub const DEFAULT_INPUT_SIZE: u32 = 150;

/// Normalizes an arbitrary input image into the classifier's fixed tensor
/// shape.
#[derive(Debug, Clone)]
pub struct ImagePreprocessor {
    /// Target edge length; the model consumes square inputs.
    target_size: u32,
}

impl ImagePreprocessor {
    /// Create a preprocessor with the default 150x150 target.
    pub fn new() -> Self {
        Self {
            target_size: DEFAULT_INPUT_SIZE,
        }
    }

    /// Set the target edge length.
    pub fn with_target_size(mut self, size: u32) -> Self {
        self.target_size = size;
        self
    }

    /// Preprocess an image into an NHWC tensor of shape
    /// `(1, target, target, 3)` with values scaled to `[0, 1]`.
    ///
    /// Any non-RGB mode is converted to RGB first. The resize does not
    /// preserve aspect ratio: non-square inputs are stretched, matching the
    /// transform the model was trained with.
    pub fn prepare(&self, image: &DynamicImage) -> Array4<f32> {
        let size = self.target_size;
        debug!(
            "Preprocessing {}x{} image to {}x{}",
            image.width(),
            image.height(),
            size,
            size
        );

        let resized = image.resize_exact(size, size, image::imageops::FilterType::CatmullRom);
        let rgb = resized.to_rgb8();

        let mut tensor = Array4::<f32>::zeros((1, size as usize, size as usize, 3));
        for (x, y, pixel) in rgb.enumerate_pixels() {
            for c in 0..3 {
                tensor[[0, y as usize, x as usize, c]] = pixel[c] as f32 / 255.0;
            }
        }

        tensor
    }
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::new()
    }
}
