use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::data::{Category, ImageRecord};
use crate::error::{GalleryError, Result};

/// Catalog bundled into the binary, used when no catalog file is configured
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Shown wherever a record has an empty source
const PLACEHOLDER_IMAGE: &str = "placeholder.png";

/// Where the catalog records came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    BuiltIn,
    File(PathBuf),
    InMemory,
}

/// The Catalog holds the static, ordered list of gallery images.
/// It is validated once on load and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    images: Vec<ImageRecord>,
    source: CatalogSource,
}

impl Catalog {
    /// Load the catalog embedded in the binary
    pub fn builtin() -> Result<Self> {
        let images = serde_json::from_str(BUILTIN_CATALOG).map_err(|source| {
            GalleryError::CatalogFormat {
                path: PathBuf::from("<builtin>"),
                source,
            }
        })?;

        Self::validated(images, CatalogSource::BuiltIn)
    }

    /// Load a catalog from a JSON file (an array of image records)
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| GalleryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let images = serde_json::from_str(&json).map_err(|source| GalleryError::CatalogFormat {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::validated(images, CatalogSource::File(path.to_path_buf()))?;
        log::info!("📁 Catalog loaded from {} ({} images)", path.display(), catalog.image_count());

        Ok(catalog)
    }

    /// Build a catalog from records already in memory
    #[cfg(test)]
    pub fn from_records(images: Vec<ImageRecord>) -> Result<Self> {
        Self::validated(images, CatalogSource::InMemory)
    }

    /// An empty catalog, the last resort when nothing else loads
    pub fn empty() -> Self {
        Self {
            images: Vec::new(),
            source: CatalogSource::InMemory,
        }
    }

    /// Reject duplicate ids and records tagged with the synthetic "all" category
    fn validated(images: Vec<ImageRecord>, source: CatalogSource) -> Result<Self> {
        let mut seen = HashSet::with_capacity(images.len());

        for image in &images {
            if image.category == Category::All {
                return Err(GalleryError::ReservedCategory(image.id));
            }
            if !seen.insert(image.id) {
                return Err(GalleryError::DuplicateImageId(image.id));
            }
        }

        Ok(Self { images, source })
    }

    /// All records, in catalog order
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    /// Get a count of images in the catalog
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Number of records flagged as hiding a mascot
    pub fn mascot_count(&self) -> usize {
        self.images.iter().filter(|image| image.has_mascot).count()
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Records whose image file is missing under `asset_root`.
    /// The gallery still shows them (as blank tiles); this is only for logging.
    pub fn missing_files(&self, asset_root: &Path) -> Vec<&ImageRecord> {
        let missing: Vec<&ImageRecord> = self
            .images
            .iter()
            .filter(|image| !resolve_asset(asset_root, &image.src).exists())
            .collect();

        if !missing.is_empty() {
            log::warn!(
                "⚠️  {} catalog images not found under {}",
                missing.len(),
                asset_root.display()
            );
        }

        missing
    }
}

/// Map a catalog source such as "/gallery/team-1.jpg" onto the asset root.
/// Empty sources resolve to the placeholder image.
pub fn resolve_asset(asset_root: &Path, src: &str) -> PathBuf {
    let relative = src.trim_start_matches('/');
    if relative.is_empty() {
        return asset_root.join(PLACEHOLDER_IMAGE);
    }
    asset_root.join(relative)
}
