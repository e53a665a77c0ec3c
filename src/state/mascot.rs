//! "Find the mascot" easter egg counter

use super::data::Notification;

/// Count at which the Foxy Finder badge unlocks
pub const BADGE_THRESHOLD: u32 = 3;

/// Counts mascot discoveries.
///
/// Every call to `find_mascot` counts, including repeat clicks on an image
/// that was already found. Capping, if wanted, is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MascotTracker {
    found: u32,
}

impl MascotTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn found(&self) -> u32 {
        self.found
    }

    /// Record one discovery and return the notification for the new count
    pub fn find_mascot(&mut self) -> Notification {
        self.found = self.found.saturating_add(1);
        log::info!("🦊 Mascot found ({} so far)", self.found);

        match self.found {
            1 => Notification::info(
                "Mascot Found! 🎉",
                "You found your first mascot! Keep looking for more!",
            ),
            BADGE_THRESHOLD => Notification::success(
                "Foxy Finder Badge unlocked! 🦊",
                "You've found all the hidden mascots! You're officially a Foxy Finder!",
            ),
            count => Notification::info(
                "Mascot Found! 🎉",
                format!("You've found {} mascots so far!", count),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Severity;

    #[test]
    fn test_first_mascot() {
        let mut tracker = MascotTracker::new();

        let notification = tracker.find_mascot();

        assert_eq!(tracker.found(), 1);
        assert_eq!(notification.severity, Severity::Info);
        assert!(notification.description.contains("first mascot"));
    }

    #[test]
    fn test_badge_on_third_only() {
        let mut tracker = MascotTracker::new();

        let notifications: Vec<Notification> = (0..5).map(|_| tracker.find_mascot()).collect();

        let badges: Vec<usize> = notifications
            .iter()
            .enumerate()
            .filter(|(_, n)| n.severity == Severity::Success)
            .map(|(i, _)| i + 1)
            .collect();
        assert_eq!(badges, vec![3]);
        assert_eq!(notifications[2].title, "Foxy Finder Badge unlocked! 🦊");
    }

    #[test]
    fn test_generic_counts() {
        let mut tracker = MascotTracker::new();
        tracker.find_mascot();

        let second = tracker.find_mascot();
        assert_eq!(second.description, "You've found 2 mascots so far!");

        tracker.find_mascot();
        let fourth = tracker.find_mascot();
        assert_eq!(fourth.description, "You've found 4 mascots so far!");
        assert_eq!(fourth.severity, Severity::Info);
    }

    #[test]
    fn test_no_internal_cap() {
        let mut tracker = MascotTracker::new();

        for _ in 0..10 {
            tracker.find_mascot();
        }

        assert_eq!(tracker.found(), 10);
    }
}
