//! Surprise popup layer
//! Fake "system error" windows scattered across the screen

use std::path::Path;

use iced::widget::image::{Handle, Image};
use iced::widget::{button, column, container, opaque, responsive, row, text, Space, Stack};
use iced::{alignment, border, Color, ContentFit, Element, Length, Padding, Size};

use crate::state::catalog::resolve_asset;
use crate::state::surprise::{PopupPosition, PopupRecord};
use crate::Message;

/// Width of each popup window
const POPUP_WIDTH: f32 = 256.0;

/// Pixel offset of a popup's top-left corner inside a window of `size`
pub fn anchor(position: PopupPosition, size: Size) -> (f32, f32) {
    let top = size.height * f32::from(position.top) / 100.0;
    let left = size.width * f32::from(position.left) / 100.0;
    (top, left)
}

/// All popups plus the "dismiss" button, sized to the window
pub fn view<'a>(popups: &'a [PopupRecord], asset_root: &'a Path) -> Element<'a, Message> {
    let scattered = responsive(move |size| {
        popups
            .iter()
            .fold(Stack::new().width(Length::Fill).height(Length::Fill), |stack, popup| {
                let (top, left) = anchor(popup.position, size);
                // Presses on a window must not reach the thumbnails beneath it
                stack.push(
                    container(opaque(window(popup, asset_root)))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .padding(Padding {
                            top,
                            left,
                            right: 0.0,
                            bottom: 0.0,
                        }),
                )
            })
            .into()
    });

    let dismiss = container(
        button(text("Okay Okay I Get It!").size(18))
            .on_press(Message::DismissPopups)
            .padding([10, 24])
            .style(button::danger),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(16)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Bottom);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scattered)
        .push(dismiss)
        .into()
}

/// One fake error window
fn window<'a>(popup: &'a PopupRecord, asset_root: &Path) -> Element<'a, Message> {
    let title_bar = container(
        row![
            text(popup.title).size(14),
            Space::with_width(Length::Fill),
            text("✕").size(14),
        ]
        .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .padding([4, 12])
    .style(|_theme| container::Style {
        background: Some(Color::from_rgb8(0x1d, 0x4e, 0xd8).into()),
        text_color: Some(Color::WHITE),
        ..Default::default()
    });

    let picture = Image::new(Handle::from_path(resolve_asset(asset_root, &popup.image_src)))
        .width(Length::Fill)
        .height(Length::Fixed(96.0))
        .content_fit(ContentFit::Cover);

    let body = column![
        row![
            text("⚠️").size(28),
            text(format!("System Error #CT{}", popup.error_code)).size(14),
        ]
        .spacing(8)
        .align_y(alignment::Vertical::Center),
        picture,
        text("This CollegeTips moment is too chaotic for your browser to handle!").size(12),
        container(button(text("OK").size(14)).style(button::secondary))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    ]
    .spacing(8)
    .padding(12);

    container(column![title_bar, body])
        .width(Length::Fixed(POPUP_WIDTH))
        .style(|_theme| container::Style {
            background: Some(Color::from_rgb8(0xf3, 0xf4, 0xf6).into()),
            text_color: Some(Color::BLACK),
            border: border::rounded(4.0)
                .width(2.0)
                .color(Color::from_rgb8(0xd1, 0xd5, 0xdb)),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_scales_with_window() {
        let position = PopupPosition { top: 50, left: 25 };

        assert_eq!(anchor(position, Size::new(800.0, 600.0)), (300.0, 200.0));
        assert_eq!(anchor(position, Size::new(0.0, 0.0)), (0.0, 0.0));
    }

    #[test]
    fn test_anchor_keeps_room_for_the_popup() {
        let position = PopupPosition { top: 69, left: 69 };
        let size = Size::new(1280.0, 800.0);

        let (top, left) = anchor(position, size);

        assert!(left + POPUP_WIDTH <= size.width);
        assert!(top < size.height);
    }
}
