use super::catalog::Catalog;
use super::data::{Category, ImageRecord, NotificationSink};
use super::filter::{filter, filter_by_key};
use super::lightbox::{Lightbox, LightboxAction};
use super::mascot::MascotTracker;
use super::surprise::{generate_popups, PopupRecord};
use crate::audio::CUE_VOLUME;
use rand::RngCore;

/// Side effects the controller asks its host to carry out
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// Play the surprise audio cue at `volume`
    PlayCue { volume: f32 },
}

/// Startup options for the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryOptions {
    pub sound_enabled: bool,
    pub show_mascot_markers: bool,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            show_mascot_markers: false,
        }
    }
}

/// The gallery interaction controller.
///
/// Owns all view state: the active category and its filtered images, the
/// lightbox, the mascot count, the sound preference and the surprise popups.
/// It knows nothing about iced; the UI layer reads the accessors and calls
/// the action methods.
pub struct Gallery {
    catalog: Catalog,
    active_category: Category,
    /// Images in the grid, `filter(catalog, active_category)` for any known key
    filtered: Vec<ImageRecord>,
    lightbox: Lightbox,
    mascots: MascotTracker,
    sound_enabled: bool,
    popups: Vec<PopupRecord>,
    show_mascot_markers: bool,
    rng: Box<dyn RngCore>,
}

impl Gallery {
    pub fn new(catalog: Catalog, options: GalleryOptions, rng: Box<dyn RngCore>) -> Self {
        let filtered = catalog.images().to_vec();

        Self {
            catalog,
            active_category: Category::All,
            filtered,
            lightbox: Lightbox::Closed,
            mascots: MascotTracker::new(),
            sound_enabled: options.sound_enabled,
            popups: Vec::new(),
            show_mascot_markers: options.show_mascot_markers,
            rng,
        }
    }

    // ========== View data ==========

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn filtered_images(&self) -> &[ImageRecord] {
        &self.filtered
    }

    pub fn lightbox(&self) -> Lightbox {
        self.lightbox
    }

    /// The image the lightbox shows, if it is open and the index is valid
    pub fn current_image(&self) -> Option<&ImageRecord> {
        self.lightbox.current(&self.filtered)
    }

    pub fn mascots_found(&self) -> u32 {
        self.mascots.found()
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn popups(&self) -> &[PopupRecord] {
        &self.popups
    }

    pub fn shows_mascot_markers(&self) -> bool {
        self.show_mascot_markers
    }

    // ========== Actions ==========

    /// Switch category and re-derive the visible images
    pub fn select_category(&mut self, category: Category) {
        self.active_category = category;
        self.filtered = filter(self.catalog.images(), category)
            .into_iter()
            .cloned()
            .collect();
        self.lightbox.reconcile(self.filtered.len());

        log::debug!(
            "Category {} selected ({} images)",
            category.key(),
            self.filtered.len()
        );
    }

    /// Switch category by its textual key. An unknown key leaves the grid
    /// empty while the category bar keeps its current highlight.
    pub fn select_category_key(&mut self, key: &str) {
        if let Some(category) = Category::from_key(key) {
            self.active_category = category;
        }
        self.filtered = filter_by_key(self.catalog.images(), key)
            .into_iter()
            .cloned()
            .collect();
        self.lightbox.reconcile(self.filtered.len());
    }

    /// A thumbnail in the grid was clicked: count a mascot if it hides one,
    /// then open the lightbox on it
    pub fn click_thumbnail(&mut self, index: usize, sink: &mut dyn NotificationSink) {
        let has_mascot = match self.filtered.get(index) {
            Some(image) => image.has_mascot,
            None => return,
        };

        if has_mascot {
            self.find_mascot(sink);
        }
        self.open_lightbox(index);
    }

    pub fn open_lightbox(&mut self, index: usize) {
        self.lightbox.open(index, self.filtered.len());
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close();
    }

    pub fn next_image(&mut self) {
        self.lightbox.next(self.filtered.len());
    }

    pub fn previous_image(&mut self) {
        self.lightbox.previous(self.filtered.len());
    }

    /// Apply a lightbox button or key press
    pub fn apply_lightbox(&mut self, action: LightboxAction) {
        match action {
            LightboxAction::Next => self.next_image(),
            LightboxAction::Previous => self.previous_image(),
            LightboxAction::Close => self.close_lightbox(),
        }
    }

    pub fn find_mascot(&mut self, sink: &mut dyn NotificationSink) {
        let notification = self.mascots.find_mascot();
        sink.notify(notification);
    }

    /// Replace the popups with a fresh random batch; asks for the audio cue
    /// when sound is on
    pub fn trigger_surprise(&mut self) -> Effect {
        let batch = chrono::Utc::now().timestamp_millis();
        self.popups = generate_popups(self.catalog.images(), self.rng.as_mut(), batch);

        log::info!("💥 Surprise! {} popups", self.popups.len());

        if self.sound_enabled {
            Effect::PlayCue { volume: CUE_VOLUME }
        } else {
            Effect::None
        }
    }

    pub fn dismiss_popups(&mut self) {
        self.popups.clear();
    }

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
        log::debug!("Sound {}", if self.sound_enabled { "on" } else { "off" });
    }
}

impl std::fmt::Debug for Gallery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gallery")
            .field("active_category", &self.active_category)
            .field("filtered", &self.filtered.len())
            .field("lightbox", &self.lightbox)
            .field("mascots_found", &self.mascots.found())
            .field("sound_enabled", &self.sound_enabled)
            .field("popups", &self.popups.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{Notification, Severity};
    use crate::state::surprise::{POPUP_COUNT, POSITION_RANGE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(id: u32, category: Category, has_mascot: bool) -> ImageRecord {
        ImageRecord {
            id,
            src: format!("/gallery/{}.jpg", id),
            alt: String::new(),
            title: format!("Image {}", id),
            caption: None,
            category,
            height: None,
            meme_src: None,
            has_mascot,
        }
    }

    fn gallery(records: Vec<ImageRecord>) -> Gallery {
        Gallery::new(
            Catalog::from_records(records).unwrap(),
            GalleryOptions::default(),
            Box::new(StdRng::seed_from_u64(42)),
        )
    }

    fn four_records() -> Vec<ImageRecord> {
        vec![
            record(1, Category::Team, false),
            record(2, Category::Creative, false),
            record(3, Category::Office, false),
            record(4, Category::Team, false),
        ]
    }

    #[test]
    fn test_starts_on_all() {
        let gallery = gallery(four_records());

        assert_eq!(gallery.active_category(), Category::All);
        assert_eq!(gallery.filtered_images().len(), 4);
        assert!(!gallery.lightbox().is_open());
        assert_eq!(gallery.mascots_found(), 0);
        assert!(gallery.sound_enabled());
        assert!(gallery.popups().is_empty());
    }

    #[test]
    fn test_team_filter_then_next_wraps() {
        let mut gallery = gallery(four_records());
        let mut toasts: Vec<Notification> = Vec::new();

        gallery.select_category(Category::Team);
        let ids: Vec<u32> = gallery.filtered_images().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 4]);

        gallery.click_thumbnail(1, &mut toasts);
        assert_eq!(gallery.current_image().map(|i| i.id), Some(4));

        gallery.next_image();
        assert_eq!(gallery.lightbox(), Lightbox::Open { index: 0 });
        assert_eq!(gallery.current_image().map(|i| i.id), Some(1));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_keyboard_actions() {
        let mut gallery = gallery(four_records());
        gallery.open_lightbox(0);

        gallery.apply_lightbox(LightboxAction::Previous);
        assert_eq!(gallery.lightbox().index(), Some(3));

        gallery.apply_lightbox(LightboxAction::Next);
        assert_eq!(gallery.lightbox().index(), Some(0));

        gallery.apply_lightbox(LightboxAction::Close);
        assert!(!gallery.lightbox().is_open());
        assert_eq!(gallery.current_image(), None);
    }

    #[test]
    fn test_category_change_to_empty_closes_lightbox() {
        let mut gallery = gallery(four_records());
        gallery.open_lightbox(2);

        gallery.select_category(Category::Meme);

        assert!(gallery.filtered_images().is_empty());
        assert!(!gallery.lightbox().is_open());
        assert_eq!(gallery.current_image(), None);
    }

    #[test]
    fn test_category_change_clamps_open_lightbox() {
        let mut gallery = gallery(four_records());
        gallery.open_lightbox(3);

        gallery.select_category(Category::Team);

        assert_eq!(gallery.lightbox().index(), Some(1));
        assert_eq!(gallery.current_image().map(|i| i.id), Some(4));
    }

    #[test]
    fn test_click_out_of_range_is_ignored() {
        let mut gallery = gallery(four_records());
        let mut toasts: Vec<Notification> = Vec::new();

        gallery.click_thumbnail(9, &mut toasts);

        assert!(!gallery.lightbox().is_open());
    }

    #[test]
    fn test_start_category_by_key() {
        let mut gallery = gallery(vec![
            record(1, Category::Team, false),
            record(2, Category::Meme, false),
            record(3, Category::Team, false),
        ]);

        gallery.select_category_key("team");

        assert_eq!(gallery.active_category(), Category::Team);
        let ids: Vec<u32> = gallery.filtered_images().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_unknown_key_empties_grid_and_closes_lightbox() {
        let mut gallery = gallery(vec![record(1, Category::Team, false)]);
        let mut toasts: Vec<Notification> = Vec::new();
        gallery.click_thumbnail(0, &mut toasts);

        gallery.select_category_key("holiday");

        assert!(gallery.filtered_images().is_empty());
        assert_eq!(gallery.active_category(), Category::All);
        assert!(!gallery.lightbox().is_open());
    }

    #[test]
    fn test_three_mascots_unlock_badge_on_third_click() {
        let mut gallery = gallery(vec![
            record(1, Category::Game, true),
            record(2, Category::Team, false),
            record(3, Category::Office, true),
            record(4, Category::Game, true),
        ]);
        let mut toasts: Vec<Notification> = Vec::new();

        gallery.click_thumbnail(0, &mut toasts);
        gallery.click_thumbnail(1, &mut toasts);
        assert_eq!(toasts.len(), 1);

        gallery.click_thumbnail(2, &mut toasts);
        assert_eq!(toasts[1].severity, Severity::Info);

        gallery.click_thumbnail(3, &mut toasts);
        assert_eq!(gallery.mascots_found(), 3);
        let severities: Vec<Severity> = toasts.iter().map(|t| t.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Info, Severity::Info, Severity::Success]
        );
        assert_eq!(gallery.lightbox().index(), Some(3));
    }

    #[test]
    fn test_repeat_clicks_on_same_mascot_keep_counting() {
        let mut gallery = gallery(vec![record(1, Category::Game, true)]);
        let mut toasts: Vec<Notification> = Vec::new();

        for _ in 0..4 {
            gallery.click_thumbnail(0, &mut toasts);
        }

        assert_eq!(gallery.mascots_found(), 4);
        assert_eq!(toasts.len(), 4);
    }

    #[test]
    fn test_surprise_replaces_popups() {
        let records: Vec<ImageRecord> = (0..20).map(|id| record(id, Category::Work, false)).collect();
        let mut gallery = gallery(records);

        assert_eq!(gallery.trigger_surprise(), Effect::PlayCue { volume: CUE_VOLUME });
        assert_eq!(gallery.popups().len(), POPUP_COUNT);

        gallery.trigger_surprise();
        assert_eq!(gallery.popups().len(), POPUP_COUNT);
        for popup in gallery.popups() {
            assert!(popup.position.top < POSITION_RANGE);
            assert!(popup.position.left < POSITION_RANGE);
        }
    }

    #[test]
    fn test_surprise_ignores_filter_and_lightbox() {
        let mut gallery = gallery(four_records());
        gallery.select_category(Category::Office);
        gallery.open_lightbox(0);

        gallery.trigger_surprise();

        assert_eq!(gallery.popups().len(), 4);
        assert_eq!(gallery.lightbox().index(), Some(0));
        assert_eq!(gallery.active_category(), Category::Office);
    }

    #[test]
    fn test_muted_surprise_has_no_cue() {
        let mut gallery = gallery(four_records());

        gallery.toggle_sound();
        assert!(!gallery.sound_enabled());
        assert_eq!(gallery.trigger_surprise(), Effect::None);
        assert_eq!(gallery.popups().len(), 4);

        gallery.toggle_sound();
        assert_eq!(gallery.trigger_surprise(), Effect::PlayCue { volume: CUE_VOLUME });
    }

    #[test]
    fn test_toggle_sound_leaves_popups_alone() {
        let mut gallery = gallery(four_records());
        gallery.trigger_surprise();
        let before = gallery.popups().to_vec();

        gallery.toggle_sound();

        assert_eq!(gallery.popups(), before.as_slice());
    }

    #[test]
    fn test_dismiss_always_empties() {
        let mut gallery = gallery(four_records());

        gallery.dismiss_popups();
        assert!(gallery.popups().is_empty());

        gallery.trigger_surprise();
        gallery.dismiss_popups();
        assert!(gallery.popups().is_empty());
    }

    #[test]
    fn test_options_are_applied() {
        let gallery = Gallery::new(
            Catalog::empty(),
            GalleryOptions {
                sound_enabled: false,
                show_mascot_markers: true,
            },
            Box::new(StdRng::seed_from_u64(0)),
        );

        assert!(!gallery.sound_enabled());
        assert!(gallery.shows_mascot_markers());
        assert!(gallery.filtered_images().is_empty());
    }
}
