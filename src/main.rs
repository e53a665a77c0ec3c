use iced::widget::{column, scrollable, text, Stack};
use iced::{keyboard, time, Alignment, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::{Duration, Instant};

mod audio;
mod config;
mod error;
mod state;
mod ui;

use audio::CuePlayer;
use config::Config;
use state::catalog::{resolve_asset, Catalog};
use state::data::Category;
use state::gallery::{Effect, Gallery, GalleryOptions};
use state::lightbox::LightboxAction;
use ui::toast::Toasts;

/// How often visible toasts are checked for expiry
const TOAST_TICK: Duration = Duration::from_millis(500);

/// Overlays drawn above the page, bottom to top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Popups,
    Lightbox,
    Toasts,
}

/// Main application state
struct GalleryApp {
    /// Filtering, lightbox, mascot hunt and popups
    gallery: Gallery,
    /// Notifications currently on screen
    toasts: Toasts,
    /// Thumbnail under the cursor (image id)
    hovered: Option<u32>,
    /// Directory image sources are resolved against
    asset_root: PathBuf,
    /// Resolved path of the surprise sound
    audio_cue: PathBuf,
    /// Whether the surprise sound is still playing
    cue: CuePlayer,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User picked a category in the category bar
    SelectCategory(Category),
    /// User clicked the thumbnail at this index of the filtered list
    ThumbnailClicked(usize),
    /// Cursor entered / left a thumbnail (image id)
    ThumbnailEntered(u32),
    ThumbnailLeft(u32),
    /// Lightbox button or key press
    Lightbox(LightboxAction),
    /// User clicked "Click for a Surprise!"
    TriggerSurprise,
    /// User clicked "Okay Okay I Get It!"
    DismissPopups,
    /// User clicked the speaker icon
    ToggleSound,
    /// Background audio playback finished (or failed)
    CueFinished(Result<(), String>),
    /// User clicked a toast
    DismissToast(u64),
    /// Periodic tick used to expire toasts
    Tick(Instant),
}

impl GalleryApp {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|e| {
            log::warn!("⚠️  {}; using the default config", e);
            Config::default()
        });

        let catalog = load_catalog(&config);
        for image in catalog.missing_files(&config.asset_root) {
            log::debug!("   missing: {}", image.src);
        }

        log::info!(
            "🎨 CollegeTips Gallery initialized with {} images ({} mascots hidden, {:?} catalog)",
            catalog.image_count(),
            catalog.mascot_count(),
            catalog.source()
        );

        let options = GalleryOptions {
            sound_enabled: config.sound_enabled,
            show_mascot_markers: config.debug_show_mascot_markers,
        };
        let mut gallery = Gallery::new(catalog, options, Box::new(rand::rng()));
        if let Some(key) = &config.start_category {
            gallery.select_category_key(key);
        }
        let audio_cue = resolve_asset(&config.asset_root, &config.audio_cue);

        (
            GalleryApp {
                gallery,
                toasts: Toasts::default(),
                hovered: None,
                asset_root: config.asset_root,
                audio_cue,
                cue: CuePlayer::default(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectCategory(category) => {
                self.hovered = None;
                self.gallery.select_category(category);
            }
            Message::ThumbnailClicked(index) => {
                self.gallery.click_thumbnail(index, &mut self.toasts);
            }
            Message::ThumbnailEntered(id) => {
                self.hovered = Some(id);
            }
            Message::ThumbnailLeft(id) => {
                // Enter of the next card may arrive before exit of the previous one
                if self.hovered == Some(id) {
                    self.hovered = None;
                }
            }
            Message::Lightbox(action) => {
                self.gallery.apply_lightbox(action);
            }
            Message::TriggerSurprise => {
                let effect = self.gallery.trigger_surprise();
                return self.perform(effect);
            }
            Message::DismissPopups => {
                self.gallery.dismiss_popups();
            }
            Message::ToggleSound => {
                self.gallery.toggle_sound();
            }
            Message::CueFinished(result) => {
                self.cue.finish();
                if let Err(e) = result {
                    log::debug!("🔇 Audio cue skipped: {}", e);
                }
            }
            Message::DismissToast(id) => {
                self.toasts.dismiss(id);
            }
            Message::Tick(now) => {
                self.toasts.prune(now);
            }
        }

        Task::none()
    }

    /// Carry out a side effect requested by the gallery
    fn perform(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::PlayCue { .. } if !self.cue.try_start() => {
                log::debug!("🔇 Audio cue already playing, skipping");
                Task::none()
            }
            // Fire and forget: the result is only logged
            Effect::PlayCue { volume } => Task::perform(
                audio::play_cue(self.audio_cue.clone(), volume),
                Message::CueFinished,
            ),
        }
    }

    /// Event sources. Each one exists only while its state needs it; iced
    /// drops a subscription as soon as it is no longer returned here,
    /// including on shutdown.
    fn subscription(&self) -> Subscription<Message> {
        let keys = if self.gallery.lightbox().is_open() {
            keyboard::on_key_press(ui::lightbox::on_key_press)
        } else {
            Subscription::none()
        };

        let toasts = if self.toasts.is_empty() {
            Subscription::none()
        } else {
            time::every(TOAST_TICK).map(Message::Tick)
        };

        Subscription::batch([keys, toasts])
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text("CollegeTips Gallery").size(56),
            text("Dive into our chaotic world of creativity, teamwork, and the occasional office shenanigans! 🎉")
                .size(18),
        ]
        .spacing(12)
        .align_x(Alignment::Center);

        let mut page = column![
            header,
            ui::grid::category_bar(self.gallery.active_category()),
            ui::grid::surprise_controls(self.gallery.sound_enabled()),
        ]
        .spacing(24)
        .padding(32)
        .width(Length::Fill)
        .align_x(Alignment::Center);

        if self.gallery.mascots_found() > 0 {
            page = page.push(ui::grid::mascot_counter(
                self.gallery.mascots_found(),
                self.gallery.catalog().mascot_count(),
            ));
        }

        page = page.push(ui::grid::thumbnails(
            self.gallery.filtered_images(),
            self.hovered,
            self.gallery.shows_mascot_markers(),
            &self.asset_root,
        ));

        let page = scrollable(page).width(Length::Fill).height(Length::Fill);

        self.layers()
            .into_iter()
            .fold(
                Stack::new().width(Length::Fill).height(Length::Fill).push(page),
                |stack, layer| match layer {
                    Layer::Popups => {
                        stack.push(ui::popups::view(self.gallery.popups(), &self.asset_root))
                    }
                    Layer::Lightbox => match self.gallery.current_image() {
                        Some(image) => stack.push(ui::lightbox::view(image, &self.asset_root)),
                        None => stack,
                    },
                    Layer::Toasts => stack.push(ui::toast::view(&self.toasts)),
                },
            )
            .into()
    }

    /// Which overlays are visible. Both popups and the lightbox capture the
    /// mouse, so whatever sits below them can't be clicked through.
    fn layers(&self) -> Vec<Layer> {
        let mut layers = Vec::new();
        if !self.gallery.popups().is_empty() {
            layers.push(Layer::Popups);
        }
        // Only when the index still points at an image
        if self.gallery.current_image().is_some() {
            layers.push(Layer::Lightbox);
        }
        if !self.toasts.is_empty() {
            layers.push(Layer::Toasts);
        }
        layers
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Load the configured catalog, falling back to the built-in one
fn load_catalog(config: &Config) -> Catalog {
    if let Some(path) = &config.catalog_path {
        match Catalog::load(path) {
            Ok(catalog) => return catalog,
            Err(e) => log::error!("❌ {}; falling back to the built-in catalog", e),
        }
    }

    Catalog::builtin().unwrap_or_else(|e| {
        log::error!("❌ Built-in catalog failed to load: {}", e);
        Catalog::empty()
    })
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("collegetips_gallery=info,warn"),
    )
    .init();

    iced::application("CollegeTips Gallery", GalleryApp::update, GalleryApp::view)
        .theme(GalleryApp::theme)
        .subscription(GalleryApp::subscription)
        .window_size(iced::Size::new(1280.0, 860.0))
        .centered()
        .run_with(GalleryApp::new)
}
