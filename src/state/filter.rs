//! Category filtering over the catalog

use super::data::{Category, ImageRecord};

/// Records tagged with `category`, in catalog order.
/// `Category::All` returns every record unchanged.
pub fn filter(images: &[ImageRecord], category: Category) -> Vec<&ImageRecord> {
    match category {
        Category::All => images.iter().collect(),
        _ => images.iter().filter(|image| image.category == category).collect(),
    }
}

/// Filter by a textual category key. Unknown keys match nothing.
pub fn filter_by_key<'a>(images: &'a [ImageRecord], key: &str) -> Vec<&'a ImageRecord> {
    match Category::from_key(key) {
        Some(category) => filter(images, category),
        None => {
            log::debug!("Unknown category key {:?}, nothing to show", key);
            Vec::new()
        }
    }
}
