//! The errors produced by the asset jobs.
use std::{io, path::PathBuf};

use category_word_lists::Difficulty;
use thiserror::Error;

/// An asset job hit an error.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AssetError {
    /// The image every job starts from isn't there.
    #[error("source image not found: {}", .0.display())]
    SourceMissing(PathBuf),
    /// Reading or writing a file failed.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        /// The file or directory being accessed.
        path: PathBuf,
        /// What went wrong.
        source: io::Error,
    },
    /// [`image`] couldn't decode, encode, or process an image.
    #[error(transparent)]
    Image(#[from] ImageError),
    /// An icon's file name asks for a size far beyond the source image.
    #[error("icon size {size}px is larger than the {max}px limit")]
    IconTooLarge {
        /// The size worked out from the file name.
        size: u32,
        /// The largest size that will be generated.
        max: u32,
    },
    /// No pixel in the image was bright enough to be part of the logo.
    #[error("no logo found: every pixel is darker than {threshold}")]
    NoForeground {
        /// The brightness threshold that was used.
        threshold: u8,
    },
    /// The category couldn't be found in the word-list document.
    #[error(transparent)]
    CategoryNotFound(#[from] CategoryNotFoundError),
    /// The word-list document isn't the expected shape.
    #[error(transparent)]
    InvalidDocument(#[from] InvalidDocumentError),
    /// The replacement entries broke the word-list rules.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AssetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AssetError::Io {
            path: path.into(),
            source,
        }
    }
}

// New-typed errors to not have 3rd party errors in public API
/// [`image`] failed on a file.
#[derive(Debug, Error)]
#[error("image error in {}: {inner}", .path.display())]
pub struct ImageError {
    pub(crate) path: PathBuf,
    pub(crate) inner: image::ImageError,
}

/// The words array of a category couldn't be located.
#[derive(Debug, Error)]
#[error("could not locate the words of category \"{category}\"")]
pub struct CategoryNotFoundError {
    pub(crate) category: String,
}

impl CategoryNotFoundError {
    /// The category that was looked for.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }
}

/// The word-list document (or the result of editing it) didn't parse as the
/// expected JSON shape.
#[derive(Debug, Error)]
#[error("{} is not a valid word-list document: {inner}", .path.display())]
pub struct InvalidDocumentError {
    pub(crate) path: PathBuf,
    pub(crate) inner: serde_json::Error,
}

/// The replacement entries for a category broke one of the rules checked
/// before a word list is written.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A tier doesn't have the required number of entries.
    #[error("{locale}: {tier} must be {expected} items, got {actual}")]
    TierCount {
        /// The locale of the offending word list.
        locale: String,
        /// The offending tier.
        tier: Difficulty,
        /// How many entries every tier must have.
        expected: usize,
        /// How many entries the tier has.
        actual: usize,
    },
    /// Texts appear more than once in the category.
    #[error("{locale}: duplicates across difficulties: {duplicates:?}")]
    Duplicates {
        /// The locale of the offending word list.
        locale: String,
        /// The repeated texts, in order of first appearance (at most 20).
        duplicates: Vec<String>,
    },
}
