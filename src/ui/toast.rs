//! Toast notifications
//! Stacked in the bottom-right corner, expiring after a few seconds or on click

use std::time::{Duration, Instant};

use iced::widget::{column, container, mouse_area, text, Column};
use iced::{alignment, border, Color, Element, Length};

use crate::state::data::{Notification, NotificationSink, Severity};
use crate::Message;

/// How long a toast stays on screen
pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    pub shown_at: Instant,
}

/// The visible toast stack, oldest first
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    /// Add a toast stamped with `now`
    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        self.items.push(Toast {
            id: self.next_id,
            notification,
            shown_at: now,
        });
        self.next_id += 1;
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    /// Drop every toast older than `TOAST_LIFETIME`
    pub fn prune(&mut self, now: Instant) {
        self.items
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < TOAST_LIFETIME);
    }
}

impl NotificationSink for Toasts {
    fn notify(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }
}

/// Overlay layer with the toast stack pinned to the bottom-right
pub fn view(toasts: &Toasts) -> Element<'_, Message> {
    let stack: Column<Message> = toasts
        .items()
        .iter()
        .fold(column![].spacing(10), |stack, toast| stack.push(card(toast)));

    container(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(24)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

fn card(toast: &Toast) -> Element<'_, Message> {
    let background = match toast.notification.severity {
        Severity::Info => Color::from_rgb8(0x31, 0x2e, 0x81),
        Severity::Success => Color::from_rgb8(0x15, 0x80, 0x3d),
    };

    let content = column![
        text(&toast.notification.title).size(16),
        text(&toast.notification.description).size(14),
    ]
    .spacing(4);

    let card = container(content)
        .width(Length::Fixed(320.0))
        .padding(12)
        .style(move |_theme| container::Style {
            background: Some(background.into()),
            text_color: Some(Color::WHITE),
            border: border::rounded(8.0),
            ..Default::default()
        });

    mouse_area(card)
        .on_press(Message::DismissToast(toast.id))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_assigns_increasing_ids() {
        let mut toasts = Toasts::default();

        toasts.notify(Notification::info("a", "first"));
        toasts.notify(Notification::success("b", "second"));

        let ids: Vec<u64> = toasts.items().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(toasts.items()[1].notification.severity, Severity::Success);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut toasts = Toasts::default();
        toasts.notify(Notification::info("a", "first"));
        toasts.notify(Notification::info("b", "second"));

        toasts.dismiss(0);

        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].notification.title, "b");
    }

    #[test]
    fn test_prune_expires_old_toasts() {
        let mut toasts = Toasts::default();
        let start = Instant::now();
        toasts.push_at(Notification::info("old", ""), start);
        toasts.push_at(Notification::info("new", ""), start + Duration::from_secs(3));

        toasts.prune(start + TOAST_LIFETIME);

        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].notification.title, "new");

        toasts.prune(start + Duration::from_secs(60));
        assert!(toasts.is_empty());
    }
}
