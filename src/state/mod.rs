/// State management module
///
/// This module handles all gallery state, independent of the UI toolkit:
/// - The static image catalog (catalog.rs)
/// - Shared data structures (data.rs)
/// - Category filtering (filter.rs)
/// - Lightbox navigation (lightbox.rs)
/// - The mascot hunt (mascot.rs)
/// - Surprise popup generation (surprise.rs)
/// - The controller tying it all together (gallery.rs)

pub mod catalog;
pub mod data;
pub mod filter;
pub mod gallery;
pub mod lightbox;
pub mod mascot;
pub mod surprise;
