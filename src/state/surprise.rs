//! Surprise popups: a burst of fake "error" windows showing random gallery images

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use super::data::ImageRecord;

/// How many popups one surprise produces (fewer if the catalog is smaller)
pub const POPUP_COUNT: usize = 12;

/// Top/left offsets are drawn from `0..POSITION_RANGE` percent so popups stay on screen
pub const POSITION_RANGE: u8 = 70;

/// Upper bound (exclusive) of the fake "System Error #CT..." code
pub const ERROR_CODE_RANGE: u16 = 1000;

/// Popup window titles
pub const EXCLAMATIONS: [&str; 5] = ["Oops!", "Oh no!", "Error!", "Wait what?", "Not again!"];

/// Where a popup's top-left corner sits, as percentages of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupPosition {
    pub top: u8,
    pub left: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupRecord {
    /// `popup-<unix millis>-<n>`
    pub id: String,
    /// Source of the sampled catalog image
    pub image_src: String,
    pub title: &'static str,
    pub position: PopupPosition,
    pub error_code: u16,
}

/// Sample up to `POPUP_COUNT` distinct catalog images and dress each up as a popup.
///
/// Draw order: the shuffle first, then per popup the title, the top offset,
/// the left offset and the error code. A seeded generator therefore always
/// yields the same batch.
pub fn generate_popups(
    images: &[ImageRecord],
    rng: &mut dyn RngCore,
    batch: i64,
) -> Vec<PopupRecord> {
    let mut sample: Vec<&ImageRecord> = images.iter().collect();
    sample.shuffle(rng);
    sample.truncate(POPUP_COUNT);

    sample
        .into_iter()
        .enumerate()
        .map(|(n, image)| {
            let title = EXCLAMATIONS[rng.random_range(0..EXCLAMATIONS.len())];
            let top = rng.random_range(0..POSITION_RANGE);
            let left = rng.random_range(0..POSITION_RANGE);
            let error_code = rng.random_range(0..ERROR_CODE_RANGE);

            PopupRecord {
                id: format!("popup-{}-{}", batch, n),
                image_src: image.src.clone(),
                title,
                position: PopupPosition { top, left },
                error_code,
            }
        })
        .collect()
}
