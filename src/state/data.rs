//! Shared data structures for the gallery state
//!
//! These types are what the catalog loader produces and what the
//! controller and the UI layer pass around.

use serde::{Deserialize, Serialize};

/// Gallery categories, including the synthetic `All` filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Matches every record; never used as a record's own tag
    #[default]
    All,
    Team,
    Creative,
    Work,
    Bts,
    Office,
    Meme,
    Game,
}

/// Every category in display order (the category bar renders these)
pub const CATEGORIES: [Category; 8] = [
    Category::All,
    Category::Team,
    Category::Creative,
    Category::Work,
    Category::Bts,
    Category::Office,
    Category::Meme,
    Category::Game,
];

impl Category {
    /// Stable textual key (same as the JSON tag)
    pub fn key(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Team => "team",
            Category::Creative => "creative",
            Category::Work => "work",
            Category::Bts => "bts",
            Category::Office => "office",
            Category::Meme => "meme",
            Category::Game => "game",
        }
    }

    /// Parse a textual key; unknown keys yield `None`
    pub fn from_key(key: &str) -> Option<Self> {
        CATEGORIES.into_iter().find(|category| category.key() == key)
    }

    /// Human readable name shown on the category bar
    pub fn display_name(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Team => "Team Vibes",
            Category::Creative => "Creative Campaigns",
            Category::Work => "Work Hard, Play Hard",
            Category::Bts => "Behind-The-Scenes",
            Category::Office => "Office Antics",
            Category::Meme => "Meme the Moment",
            Category::Game => "Find the Mascot",
        }
    }

    /// Decorative emoji shown next to the name
    pub fn emoji(self) -> &'static str {
        match self {
            Category::All => "🌟",
            Category::Team => "🤝",
            Category::Creative => "🎨",
            Category::Work => "🥳",
            Category::Bts => "🎥",
            Category::Office => "😂",
            Category::Meme => "🤣",
            Category::Game => "🕹️",
        }
    }
}

/// Represents a single image in the catalog
///
/// Field names follow the catalog JSON (`memeSrc`, `hasMascot`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    /// Unique catalog ID
    pub id: u32,
    /// Image source, relative to the asset root (e.g. "/gallery/team-1.jpg")
    pub src: String,
    /// Alternate text
    pub alt: String,
    /// Title shown on hover and in the lightbox
    pub title: String,
    /// Optional one-line caption
    #[serde(default)]
    pub caption: Option<String>,
    /// Category tag (never `All`)
    pub category: Category,
    /// Optional thumbnail height in pixels
    #[serde(default)]
    pub height: Option<u16>,
    /// Meme version swapped in on hover for the meme category
    #[serde(default)]
    pub meme_src: Option<String>,
    /// Whether a hidden mascot sits somewhere in this picture
    #[serde(default)]
    pub has_mascot: bool,
}

/// How loud a notification should look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
}

/// A toast-style message handed to a `NotificationSink`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Success,
        }
    }
}

/// Anything that can display notifications (the toast stack, or a `Vec` in tests)
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}
