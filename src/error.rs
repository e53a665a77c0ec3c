//! Error types for loading the catalog and the config
//!
//! Nothing in the gallery controller itself can fail; only the edges that
//! touch the filesystem do.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the image catalog or the config file
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The file could not be read at all
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The catalog file is not a valid JSON list of image records
    #[error("invalid catalog {}: {source}", .path.display())]
    CatalogFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The config file is not valid JSON for `Config`
    #[error("invalid config {}: {source}", .path.display())]
    ConfigFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two catalog records share the same id
    #[error("duplicate image id {0} in catalog")]
    DuplicateImageId(u32),

    /// A record is tagged with the synthetic "all" category
    #[error("image {0} is tagged with the reserved category \"all\"")]
    ReservedCategory(u32),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
