//! Lightbox overlay and its keyboard bindings

use std::path::Path;

use iced::keyboard::{self, key::Named, Key};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, column, container, opaque, row, text, Space, Stack};
use iced::{alignment, Color, ContentFit, Element, Length};

use crate::state::catalog::resolve_asset;
use crate::state::data::ImageRecord;
use crate::state::lightbox::LightboxAction;
use crate::Message;

/// Map a key press to a lightbox action (Escape, Left, Right)
pub fn action_for_key(key: &Key) -> Option<LightboxAction> {
    match key {
        Key::Named(Named::Escape) => Some(LightboxAction::Close),
        Key::Named(Named::ArrowRight) => Some(LightboxAction::Next),
        Key::Named(Named::ArrowLeft) => Some(LightboxAction::Previous),
        _ => None,
    }
}

/// Handler for `keyboard::on_key_press`; only subscribed while the lightbox is open
pub fn on_key_press(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    action_for_key(&key).map(Message::Lightbox)
}

/// Full-window overlay showing `image`, capturing all mouse input underneath
pub fn view<'a>(image: &'a ImageRecord, asset_root: &Path) -> Element<'a, Message> {
    let picture = Image::new(Handle::from_path(resolve_asset(asset_root, &image.src)))
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Contain);

    let info = container(
        column![
            text(&image.title).size(24),
            text(image.caption.as_deref().unwrap_or_default()).size(16),
        ]
        .spacing(4),
    )
    .width(Length::Fill)
    .padding(16)
    .style(|_theme| container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.7).into()),
        text_color: Some(Color::WHITE),
        ..Default::default()
    });

    let viewer = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(picture)
        .push(
            container(info)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(alignment::Vertical::Bottom),
        );

    let nav = |label: &'static str, action: LightboxAction| {
        button(text(label).size(32))
            .on_press(Message::Lightbox(action))
            .style(button::text)
    };

    let top_bar = row![
        Space::with_width(Length::Fill),
        nav("✕", LightboxAction::Close)
    ];

    let middle = row![
        nav("‹", LightboxAction::Previous),
        container(viewer)
            .width(Length::Fill)
            .height(Length::Fill)
            .max_width(1024.0),
        nav("›", LightboxAction::Next),
    ]
    .spacing(16)
    .align_y(alignment::Vertical::Center);

    let backdrop = container(column![top_bar, middle].spacing(8))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(16)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.9).into()),
            text_color: Some(Color::WHITE),
            ..Default::default()
        });

    opaque(backdrop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            action_for_key(&Key::Named(Named::Escape)),
            Some(LightboxAction::Close)
        );
        assert_eq!(
            action_for_key(&Key::Named(Named::ArrowRight)),
            Some(LightboxAction::Next)
        );
        assert_eq!(
            action_for_key(&Key::Named(Named::ArrowLeft)),
            Some(LightboxAction::Previous)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(action_for_key(&Key::Named(Named::Enter)), None);
        assert_eq!(action_for_key(&Key::Character("a".into())), None);
    }
}
