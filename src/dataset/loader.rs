//! Fantastic Beasts dataset loader.
//!
//! This module handles the one-time filesystem scan that pairs creature
//! images with their segmentation masks, and the per-index decode path that
//! produces (image, mask, attribute) samples.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, RgbImage};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::dataset::attributes::AttributeTable;
use crate::dataset::transform::SampleTransform;
use crate::dataset::{category_index, category_token, CATEGORIES};
use crate::utils::error::{FantasticBeastsError, Result};

/// A single dataset sample.
#[derive(Debug, Clone)]
pub struct BeastSample {
    /// RGB image, H×W×3 with 8 bits per channel.
    pub image: RgbImage,
    /// Single-channel mask, H×W, with values restricted to {0, 1} unless a
    /// transform rewrote it.
    pub mask: GrayImage,
    /// Attribute payload stored under this sample's category.
    pub attributes: Value,
}

/// Indexed (image, mask, attribute) dataset over two parallel directory trees.
///
/// Construction scans `<image_root>/<Category>/` and `<mask_root>/<Category>/`
/// for every name in [`CATEGORIES`], canonicalizes each entry, and sorts each
/// root's combined list lexicographically by absolute path string. Images and
/// masks are paired purely by that sort order, so `image[i]` corresponds to
/// `mask[i]` only if the two trees enumerate in exact 1:1 correspondence.
///
/// The dataset is immutable after construction and safe to share across
/// threads; every retrieval independently opens and decodes its own files.
pub struct FantasticBeastsDataset {
    image_paths: Vec<PathBuf>,
    mask_paths: Vec<PathBuf>,
    attributes: AttributeTable,
    transform: Option<Box<dyn SampleTransform>>,
}

impl fmt::Debug for FantasticBeastsDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FantasticBeastsDataset")
            .field("len", &self.image_paths.len())
            .field("attributes", &self.attributes.len())
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

impl FantasticBeastsDataset {
    /// Create a dataset from the image root, mask root, and attribute file.
    ///
    /// Fails with [`FantasticBeastsError::Config`] if the attribute JSON is
    /// missing or malformed, and with [`FantasticBeastsError::CountMismatch`]
    /// if the two trees index a different number of entries — that signals a
    /// corrupted or out-of-sync dataset on disk and no usable adapter exists.
    ///
    /// Categories missing from a root, or present but empty, contribute zero
    /// entries and are not an error.
    pub fn new(
        image_root: impl AsRef<Path>,
        mask_root: impl AsRef<Path>,
        attributes_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let attributes = AttributeTable::from_path(attributes_path)?;

        info!("Indexing images under {:?}", image_root.as_ref());
        let image_paths = index_category_tree(image_root.as_ref())?;
        info!("Indexing masks under {:?}", mask_root.as_ref());
        let mask_paths = index_category_tree(mask_root.as_ref())?;

        if image_paths.len() != mask_paths.len() {
            return Err(FantasticBeastsError::CountMismatch {
                images: image_paths.len(),
                masks: mask_paths.len(),
            });
        }

        info!("Indexed {} image/mask pairs", image_paths.len());

        Ok(Self {
            image_paths,
            mask_paths,
            attributes,
            transform: None,
        })
    }

    /// Attach a transform applied to every retrieved sample.
    pub fn with_transform(mut self, transform: impl SampleTransform + 'static) -> Self {
        self.transform = Some(Box::new(transform));
        self
    }

    /// Number of indexed samples.
    pub fn len(&self) -> usize {
        self.image_paths.len()
    }

    /// Whether the dataset holds no samples.
    pub fn is_empty(&self) -> bool {
        self.image_paths.is_empty()
    }

    /// Indexed image paths, in retrieval order.
    pub fn image_paths(&self) -> &[PathBuf] {
        &self.image_paths
    }

    /// Indexed mask paths, in retrieval order.
    pub fn mask_paths(&self) -> &[PathBuf] {
        &self.mask_paths
    }

    /// Retrieve the sample at `index`.
    ///
    /// Both files are opened and decoded on every call; nothing is cached.
    /// The mask is binarized in place (every nonzero pixel becomes 1), the
    /// category is derived from the image filename's prefix before the first
    /// underscore, and the transform — if any — runs last.
    pub fn get(&self, index: usize) -> Result<BeastSample> {
        let (image_path, mask_path) =
            match (self.image_paths.get(index), self.mask_paths.get(index)) {
                (Some(image), Some(mask)) => (image, mask),
                _ => {
                    return Err(FantasticBeastsError::IndexOutOfRange {
                        index,
                        len: self.len(),
                    })
                }
            };

        let image = read_image(image_path)?;
        let mask = read_mask(mask_path)?;

        let token = category_token(image_path).ok_or_else(|| {
            FantasticBeastsError::UnknownCategory(image_path.display().to_string())
        })?;
        let attributes = self.attributes.get(token)?.clone();

        let (image, mask) = match &self.transform {
            Some(transform) => transform.apply(image, mask),
            None => (image, mask),
        };

        Ok(BeastSample {
            image,
            mask,
            attributes,
        })
    }

    /// Iterate over all samples in index order.
    pub fn iter(&self) -> impl Iterator<Item = Result<BeastSample>> + '_ {
        (0..self.len()).map(move |index| self.get(index))
    }

    /// Per-category sample counts over the image index.
    pub fn stats(&self) -> DatasetStats {
        let mut category_counts = vec![0usize; CATEGORIES.len()];
        for path in &self.image_paths {
            let category = path
                .parent()
                .and_then(|dir| dir.file_name())
                .and_then(|name| name.to_str());
            if let Some(idx) = category.and_then(category_index) {
                category_counts[idx] += 1;
            }
        }

        DatasetStats {
            total_samples: self.image_paths.len(),
            category_counts,
        }
    }
}

/// Enumerate every entry directly under `<root>/<category>/` for each known
/// category, canonicalize it, and sort the combined list by absolute path
/// string (byte-wise comparison). No extension filtering is applied: pairing
/// relies on both trees holding the same entries, not on file types.
fn index_category_tree(root: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for category in CATEGORIES {
        let dir = root.join(category);
        if !dir.is_dir() {
            debug!("Category directory {:?} missing, skipping", dir);
            continue;
        }
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            paths.push(fs::canonicalize(entry.path())?);
        }
    }

    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(paths)
}

fn read_image(path: &Path) -> Result<RgbImage> {
    let image = image::open(path)
        .map_err(|e| FantasticBeastsError::ImageDecode(path.to_path_buf(), e.to_string()))?;
    Ok(image.to_rgb8())
}

/// Decode a mask and collapse every nonzero pixel value to exactly 1.
///
/// This is lossy when the source mask encodes multiple instance or class IDs;
/// all of them end up as the single foreground label.
fn read_mask(path: &Path) -> Result<GrayImage> {
    let mut mask = image::open(path)
        .map_err(|e| FantasticBeastsError::ImageDecode(path.to_path_buf(), e.to_string()))?
        .to_luma8();

    for px in mask.iter_mut() {
        *px = u8::from(*px > 0);
    }

    Ok(mask)
}

/// Per-category statistics about the indexed samples.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetStats {
    /// Total number of indexed samples.
    pub total_samples: usize,
    /// Sample counts aligned with [`CATEGORIES`].
    pub category_counts: Vec<usize>,
}

impl DatasetStats {
    /// Print statistics to the console.
    pub fn print(&self) {
        println!("\nDataset statistics:");
        println!("  Total samples: {}", self.total_samples);
        println!();

        for (name, count) in CATEGORIES.iter().zip(&self.category_counts) {
            let bar_len = if self.total_samples > 0 {
                (*count as f32 / self.total_samples as f32 * 40.0) as usize
            } else {
                0
            };
            let bar: String = "█".repeat(bar_len);
            println!("  {:14} {:>5} {}", name, count, bar);
        }
    }
}
