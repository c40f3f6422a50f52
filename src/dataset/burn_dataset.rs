//! Burn Dataset Integration
//!
//! Implements `burn_dataset::Dataset` so the adapter can be handed straight
//! to a Burn `DataLoader`. The trait's `get` is infallible-by-`Option`, so
//! failed retrievals (decode errors, unknown categories) surface as `None`;
//! use the inherent [`FantasticBeastsDataset::get`] when the error matters.
//!
//! The adapter is immutable after construction and `Send + Sync`, so it can
//! be shared read-only across data-loading workers without extra locking.

use burn_dataset::Dataset;

use crate::dataset::loader::{BeastSample, FantasticBeastsDataset};

impl Dataset<BeastSample> for FantasticBeastsDataset {
    fn get(&self, index: usize) -> Option<BeastSample> {
        FantasticBeastsDataset::get(self, index).ok()
    }

    fn len(&self) -> usize {
        FantasticBeastsDataset::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Rgb, RgbImage};
    use std::fs;
    use tempfile::TempDir;

    fn fixture(dir: &TempDir) -> FantasticBeastsDataset {
        let image_root = dir.path().join("images");
        let mask_root = dir.path().join("masks");
        fs::create_dir_all(image_root.join("Doxy")).unwrap();
        fs::create_dir_all(mask_root.join("Doxy")).unwrap();

        RgbImage::from_pixel(2, 2, Rgb([5, 5, 5]))
            .save(image_root.join("Doxy").join("Doxy_001.png"))
            .unwrap();
        GrayImage::from_raw(2, 2, vec![0, 255, 0, 1])
            .unwrap()
            .save(mask_root.join("Doxy").join("Doxy_001.png"))
            .unwrap();

        let attrs = dir.path().join("attributes.json");
        fs::write(&attrs, r#"{"Doxy": {"venomous": true}}"#).unwrap();

        FantasticBeastsDataset::new(&image_root, &mask_root, &attrs).unwrap()
    }

    #[test]
    fn test_dataset_trait_get_and_len() {
        let dir = TempDir::new().unwrap();
        let dataset = fixture(&dir);

        assert_eq!(Dataset::len(&dataset), 1);

        let sample = Dataset::get(&dataset, 0).expect("sample should load");
        assert_eq!(sample.mask.as_raw().as_slice(), &[0u8, 1, 0, 1][..]);
    }

    #[test]
    fn test_dataset_trait_out_of_range_is_none() {
        let dir = TempDir::new().unwrap();
        let dataset = fixture(&dir);

        assert!(Dataset::get(&dataset, 1).is_none());
    }
}
