//! Dataset module for Fantastic Beasts data handling
//!
//! This module provides functionality for:
//! - Indexing the parallel image and mask directory trees
//! - Loading the per-category attribute table from JSON
//! - Retrieving (image, mask, attribute) samples by index
//!
//! ## Directory Layout
//!
//! Both roots hold one subdirectory per creature category:
//!
//! ```text
//! images/                     masks/
//! ├── Augurey/                ├── Augurey/
//! │   ├── Augurey_001.png     │   ├── Augurey_001.png
//! │   └── Augurey_002.png     │   └── Augurey_002.png
//! ├── Billywig/               ├── Billywig/
//! │   └── ...                 │   └── ...
//! └── ...                     └── ...
//! ```
//!
//! Images and masks are paired by the lexicographic sort order of their
//! absolute paths across the whole tree, not by matching filename stems, so
//! the two trees must enumerate in exact 1:1 correspondence.

pub mod attributes;
#[cfg(feature = "burn")]
pub mod burn_dataset;
pub mod loader;
pub mod transform;

// Re-export main types for convenience
pub use attributes::AttributeTable;
pub use loader::{BeastSample, DatasetStats, FantasticBeastsDataset};
pub use transform::SampleTransform;

use std::path::Path;

/// Creature categories, in index order (20 total).
///
/// The list doubles as the set of expected subdirectory names under both
/// roots and the valid keys of the attribute table. Image filenames start
/// with `<Category>_` so the category can be recovered from the filename
/// alone at retrieval time.
pub const CATEGORIES: [&str; 20] = [
    "Augurey",
    "Billywig",
    "Chupacabra",
    "Diricawl",
    "Doxy",
    "Erumpent",
    "Fwooper",
    "Graphorn",
    "Grindylow",
    "Kappa",
    "Leucrotta",
    "Matagot",
    "Mooncalf",
    "Murtlap",
    "Nundu",
    "Occamy",
    "Runespoor",
    "Swoopingevil",
    "Thunderbird",
    "Zouwu",
];

/// Get the category name for a given index
pub fn category_name(index: usize) -> Option<&'static str> {
    CATEGORIES.get(index).copied()
}

/// Get the index for a given category name
pub fn category_index(name: &str) -> Option<usize> {
    CATEGORIES.iter().position(|&c| c == name)
}

/// Derive the category token from a sample path: the final path component,
/// truncated at the first underscore (e.g. `Billywig_003.png` → `Billywig`).
///
/// Returns `None` if the path has no filename or the filename is not UTF-8.
/// A filename without an underscore yields the whole filename, which then
/// fails the attribute lookup downstream.
pub fn category_token(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.split('_').next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_name() {
        assert_eq!(category_name(0), Some("Augurey"));
        assert_eq!(category_name(19), Some("Zouwu"));
        assert_eq!(category_name(20), None);
    }

    #[test]
    fn test_category_index() {
        assert_eq!(category_index("Augurey"), Some(0));
        assert_eq!(category_index("Billywig"), Some(1));
        assert_eq!(category_index("Zouwu"), Some(19));
        assert_eq!(category_index("Hippogriff"), None);
    }

    #[test]
    fn test_category_token_strips_suffix() {
        let path = Path::new("/data/images/Billywig/Billywig_003.png");
        assert_eq!(category_token(path), Some("Billywig"));
    }

    #[test]
    fn test_category_token_ignores_directories() {
        // The token comes from the filename, not the directory it lives in.
        let path = Path::new("/data/images/Kappa/Mooncalf_010.png");
        assert_eq!(category_token(path), Some("Mooncalf"));
    }

    #[test]
    fn test_category_token_without_underscore() {
        let path = Path::new("beast.png");
        assert_eq!(category_token(path), Some("beast.png"));
    }

    #[test]
    fn test_category_token_no_filename() {
        assert_eq!(category_token(Path::new("/")), None);
    }

    #[test]
    fn test_categories_are_sorted_and_unique() {
        let mut sorted = CATEGORIES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), CATEGORIES.len());
        assert_eq!(sorted.as_slice(), &CATEGORIES);
    }
}
