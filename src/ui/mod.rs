/// UI layer
///
/// View functions that turn the gallery state into iced widgets:
/// - The page body: categories, controls and the thumbnail grid (grid.rs)
/// - The lightbox overlay and its key bindings (lightbox.rs)
/// - The surprise popup layer (popups.rs)
/// - Toast notifications (toast.rs)

pub mod grid;
pub mod lightbox;
pub mod popups;
pub mod toast;
