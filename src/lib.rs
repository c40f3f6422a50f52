//! # Fantastic Beasts Dataset
//!
//! A Rust library for indexing and loading the Fantastic Beasts segmentation
//! dataset: category-organized creature images, a parallel directory tree of
//! segmentation masks, and a JSON table of per-category attributes.
//!
//! The adapter performs a one-time filesystem scan at construction, then
//! serves `(image, mask, attributes)` samples by integer index. Masks are
//! binarized on load (every nonzero pixel becomes 1), and an optional
//! caller-supplied transform runs on each freshly decoded pair.
//!
//! ## Modules
//!
//! - `dataset`: path indexing, attribute table, sample retrieval, transforms
//! - `utils`: error types and logging helpers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fantastic_beasts::FantasticBeastsDataset;
//!
//! let dataset = FantasticBeastsDataset::new("images", "masks", "attributes.json")?;
//! for sample in dataset.iter() {
//!     let sample = sample?;
//!     println!("{}x{}: {}", sample.image.width(), sample.image.height(), sample.attributes);
//! }
//! ```

pub mod dataset;
pub mod utils;

// Re-export commonly used items for convenience
pub use dataset::attributes::AttributeTable;
pub use dataset::loader::{BeastSample, DatasetStats, FantasticBeastsDataset};
pub use dataset::transform::SampleTransform;
pub use dataset::{category_index, category_name, category_token, CATEGORIES};
pub use utils::error::{FantasticBeastsError, Result};

/// Number of creature categories in the dataset
pub const NUM_CATEGORIES: usize = 20;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
