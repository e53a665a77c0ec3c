//! Gallery page: category bar, surprise controls, mascot counter and the
//! thumbnail grid

use std::path::Path;

use iced::widget::image::{Handle, Image};
use iced::widget::tooltip::{self, Tooltip};
use iced::widget::{button, column, container, mouse_area, row, text, Stack};
use iced::{alignment, border, mouse, Color, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::state::catalog::resolve_asset;
use crate::state::data::{Category, ImageRecord, CATEGORIES};
use crate::Message;

/// Width of every thumbnail card
const THUMBNAIL_WIDTH: f32 = 260.0;

/// Height used when a record does not specify one
const DEFAULT_THUMBNAIL_HEIGHT: u16 = 240;

/// One button per category, the active one highlighted
pub fn category_bar(active: Category) -> Element<'static, Message> {
    let buttons: Vec<Element<'static, Message>> = CATEGORIES
        .into_iter()
        .map(|category| {
            let style = if category == active {
                button::primary
            } else {
                button::secondary
            };

            button(text(format!("{} {}", category.emoji(), category.display_name())))
                .on_press(Message::SelectCategory(category))
                .padding([8, 14])
                .style(style)
                .into()
        })
        .collect();

    Wrap::with_elements(buttons)
        .spacing(8.0)
        .line_spacing(8.0)
        .into()
}

/// The surprise button plus the sound toggle next to it
pub fn surprise_controls(sound_enabled: bool) -> Element<'static, Message> {
    let surprise = button(text("💥 Click for a Surprise!").size(18))
        .on_press(Message::TriggerSurprise)
        .padding([10, 24])
        .style(button::success);

    let (icon, hint) = if sound_enabled {
        ("🔊", "Mute sounds")
    } else {
        ("🔇", "Enable sounds")
    };
    let toggle = Tooltip::new(
        button(text(icon).size(20))
            .on_press(Message::ToggleSound)
            .style(button::text),
        text(hint).size(12),
        tooltip::Position::Bottom,
    );

    row![surprise, toggle]
        .spacing(8)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// "Mascots Found: N/M" pill
pub fn mascot_counter(found: u32, total: usize) -> Element<'static, Message> {
    container(text(format!("🦊 Mascots Found: {}/{}", found, total)).size(16))
        .padding([8, 16])
        .style(|_theme| container::Style {
            background: Some(Color::from_rgb8(0xfe, 0xf3, 0xc7).into()),
            text_color: Some(Color::from_rgb8(0x92, 0x40, 0x0e)),
            border: border::rounded(999.0),
            ..Default::default()
        })
        .into()
}

/// The thumbnail grid over the filtered images
pub fn thumbnails<'a>(
    images: &'a [ImageRecord],
    hovered: Option<u32>,
    show_mascot_markers: bool,
    asset_root: &Path,
) -> Element<'a, Message> {
    if images.is_empty() {
        return container(text("Nothing to see here... yet! 👀").size(18))
            .padding(40)
            .into();
    }

    let cards: Vec<Element<'a, Message>> = images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            thumbnail(
                index,
                image,
                hovered == Some(image.id),
                show_mascot_markers,
                asset_root,
            )
        })
        .collect();

    Wrap::with_elements(cards)
        .spacing(16.0)
        .line_spacing(16.0)
        .into()
}

/// Source to show for a thumbnail: meme images swap to their meme version on hover
fn thumbnail_source(image: &ImageRecord, hovered: bool) -> &str {
    match &image.meme_src {
        Some(meme) if hovered && image.category == Category::Meme => meme,
        _ => &image.src,
    }
}

fn thumbnail<'a>(
    index: usize,
    image: &'a ImageRecord,
    hovered: bool,
    show_mascot_marker: bool,
    asset_root: &Path,
) -> Element<'a, Message> {
    let height = image.height.unwrap_or(DEFAULT_THUMBNAIL_HEIGHT) as f32;
    let path = resolve_asset(asset_root, thumbnail_source(image, hovered));

    let picture = Image::new(Handle::from_path(path))
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover);

    let mut layers = Stack::new()
        .width(Length::Fixed(THUMBNAIL_WIDTH))
        .height(Length::Fixed(height))
        .push(picture);

    if hovered {
        let mut caption = column![text(&image.title).size(18)].spacing(4);
        if let Some(line) = &image.caption {
            caption = caption.push(text(line).size(14));
        }

        layers = layers.push(
            container(caption)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(14)
                .align_y(alignment::Vertical::Bottom)
                .style(|_theme| container::Style {
                    background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.4).into()),
                    text_color: Some(Color::WHITE),
                    ..Default::default()
                }),
        );
    }

    if show_mascot_marker && image.has_mascot {
        let marker = container(text("Mascot").size(11))
            .padding([3, 8])
            .style(|_theme| container::Style {
                background: Some(Color::from_rgb8(0xef, 0x44, 0x44).into()),
                text_color: Some(Color::WHITE),
                border: border::rounded(999.0),
                ..Default::default()
            });

        layers = layers.push(
            container(marker)
                .width(Length::Fill)
                .padding(8)
                .align_x(alignment::Horizontal::Right),
        );
    }

    let card = container(layers).style(|_theme| container::Style {
        border: border::rounded(12.0),
        ..Default::default()
    });

    mouse_area(card)
        .on_press(Message::ThumbnailClicked(index))
        .on_enter(Message::ThumbnailEntered(image.id))
        .on_exit(Message::ThumbnailLeft(image.id))
        .interaction(mouse::Interaction::Pointer)
        .into()
}
