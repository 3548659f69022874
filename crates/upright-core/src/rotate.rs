//! Rotation correction back to upright.

use image::DynamicImage;
use tracing::debug;

use crate::orientation::Orientation;

/// Rotate an image back to upright given its detected orientation.
///
/// The detected label is the clockwise rotation applied to the original, so
/// the correction rotates counter-clockwise by the same amount. Right-angle
/// rotations swap the canvas dimensions; nothing is clipped or padded.
pub fn correct_orientation(image: &DynamicImage, detected: Orientation) -> DynamicImage {
    debug!("Correcting orientation: {}", detected);

    match detected {
        Orientation::Deg0 => image.clone(),
        Orientation::Deg90 => image.rotate270(),
        Orientation::Deg180 => image.rotate180(),
        Orientation::Deg270 => image.rotate90(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use pretty_assertions::assert_eq;

    fn marked_image() -> DynamicImage {
        // 3x2 image with a unique corner marker so rotations are observable
        let mut raw = RgbImage::from_pixel(3, 2, Rgb([0, 0, 0]));
        raw.put_pixel(0, 0, Rgb([255, 0, 0]));
        raw.put_pixel(2, 1, Rgb([0, 0, 255]));
        DynamicImage::ImageRgb8(raw)
    }

    #[test]
    fn zero_degrees_is_identity() {
        let image = marked_image();
        let corrected = correct_orientation(&image, Orientation::Deg0);
        assert_eq!(image.to_rgb8().as_raw(), corrected.to_rgb8().as_raw());
    }

    #[test]
    fn correction_swaps_dimensions_for_quarter_turns() {
        let image = marked_image();
        let corrected = correct_orientation(&image, Orientation::Deg90);
        assert_eq!((corrected.width(), corrected.height()), (2, 3));

        let corrected = correct_orientation(&image, Orientation::Deg180);
        assert_eq!((corrected.width(), corrected.height()), (3, 2));
    }

    #[test]
    fn correction_inverts_the_detected_rotation() {
        let image = marked_image();

        // rotate90() is a clockwise quarter turn, i.e. the detected label
        let cases = [
            (image.clone(), Orientation::Deg0),
            (image.rotate90(), Orientation::Deg90),
            (image.rotate180(), Orientation::Deg180),
            (image.rotate270(), Orientation::Deg270),
        ];

        for (rotated, detected) in cases {
            let corrected = correct_orientation(&rotated, detected);
            assert_eq!(
                image.to_rgb8().as_raw(),
                corrected.to_rgb8().as_raw(),
                "round-trip failed for {}",
                detected
            );
        }
    }
}
