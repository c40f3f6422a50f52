//! Caller-supplied sample transforms.
//!
//! The dataset performs no augmentation of its own; a transform attached via
//! [`FantasticBeastsDataset::with_transform`](crate::FantasticBeastsDataset::with_transform)
//! is the single hook for reshaping, cropping, or augmenting samples.

use image::{GrayImage, RgbImage};

/// A transform applied to each freshly retrieved (image, mask) pair.
///
/// The transform receives the image after RGB decoding and the mask after
/// binarization. Its two return values replace both buffers verbatim;
/// nothing is re-decoded or re-binarized afterwards, so a transform that
/// writes non-binary mask values produces exactly those values in the
/// sample. Implementations may change the dimensions of either buffer.
pub trait SampleTransform: Send + Sync {
    /// Apply the transform, returning the replacement image and mask.
    fn apply(&self, image: RgbImage, mask: GrayImage) -> (RgbImage, GrayImage);
}

impl<F> SampleTransform for F
where
    F: Fn(RgbImage, GrayImage) -> (RgbImage, GrayImage) + Send + Sync,
{
    fn apply(&self, image: RgbImage, mask: GrayImage) -> (RgbImage, GrayImage) {
        self(image, mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    #[test]
    fn test_closure_transform() {
        let transform = |image: RgbImage, mut mask: GrayImage| {
            for px in mask.iter_mut() {
                *px = 9;
            }
            (image, mask)
        };

        let image = RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]));
        let mask = GrayImage::from_pixel(2, 2, Luma([1]));
        let (out_image, out_mask) = transform.apply(image, mask);

        assert_eq!(out_image.dimensions(), (2, 2));
        assert!(out_mask.iter().all(|&px| px == 9));
    }

    struct Shrink;

    impl SampleTransform for Shrink {
        fn apply(&self, _image: RgbImage, _mask: GrayImage) -> (RgbImage, GrayImage) {
            (
                RgbImage::from_pixel(1, 1, Rgb([0, 0, 0])),
                GrayImage::from_pixel(1, 1, Luma([0])),
            )
        }
    }

    #[test]
    fn test_transform_may_change_dimensions() {
        let image = RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]));
        let mask = GrayImage::from_pixel(4, 4, Luma([1]));
        let (out_image, out_mask) = Shrink.apply(image, mask);

        assert_eq!(out_image.dimensions(), (1, 1));
        assert_eq!(out_mask.dimensions(), (1, 1));
    }
}
