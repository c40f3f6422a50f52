//! Error Handling Module
//!
//! Defines the error taxonomy for dataset construction and retrieval.
//! Uses thiserror for ergonomic error definitions.
//!
//! Errors are propagated to the caller; nothing is retried, logged
//! internally, or recovered. A failed retrieval leaves the dataset usable
//! for other indices, except [`FantasticBeastsError::CountMismatch`], which
//! aborts construction outright.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for Fantastic Beasts dataset operations
#[derive(Error, Debug)]
pub enum FantasticBeastsError {
    /// Attribute JSON missing, unreadable, malformed, or not an object
    #[error("Configuration error: {0}")]
    Config(String),

    /// Image and mask trees index a different number of entries. Fatal:
    /// the dataset on disk is corrupted or out of sync.
    #[error("Indexed {images} images but {masks} masks; image and mask trees are out of sync")]
    CountMismatch { images: usize, masks: usize },

    /// An image or mask file could not be decoded by the codec
    #[error("Failed to decode image at '{0}': {1}")]
    ImageDecode(PathBuf, String),

    /// Retrieval index outside the valid range
    #[error("Sample index {index} out of range for dataset of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Category token derived from a filename is not in the attribute table
    #[error("Category '{0}' not present in the attribute table")]
    UnknownCategory(String),

    /// IO error during directory enumeration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for Fantastic Beasts dataset operations
pub type Result<T> = std::result::Result<T, FantasticBeastsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FantasticBeastsError::Config("bad attribute file".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad attribute file");

        let err = FantasticBeastsError::CountMismatch {
            images: 4,
            masks: 5,
        };
        assert!(err.to_string().contains("4 images"));
        assert!(err.to_string().contains("5 masks"));
    }

    #[test]
    fn test_decode_error_names_the_file() {
        let err = FantasticBeastsError::ImageDecode(
            PathBuf::from("/data/masks/Doxy/Doxy_004.png"),
            "unsupported format".to_string(),
        );
        assert!(err.to_string().contains("Doxy_004.png"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FantasticBeastsError = io_err.into();
        assert!(matches!(err, FantasticBeastsError::Io(_)));
    }
}
