//! Lightbox navigation state machine
//!
//! Two states: `Closed` and `Open { index }`. The index always points into
//! the filtered list the lightbox is browsing; callers pass that list's
//! length into every transition so the wrap-around math stays in one place.

/// Something the user can ask the lightbox to do (button or keyboard)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxAction {
    Next,
    Previous,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open { index: usize },
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    /// Current index, if open
    pub fn index(&self) -> Option<usize> {
        match *self {
            Lightbox::Open { index } => Some(index),
            Lightbox::Closed => None,
        }
    }

    /// Open at `index`. Ignored when `index` is outside a list of `len` items.
    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            log::debug!("Ignoring lightbox open at {} (only {} images)", index, len);
            return false;
        }
        *self = Lightbox::Open { index };
        true
    }

    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    /// Step forward, wrapping from the last image to the first
    pub fn next(&mut self, len: usize) {
        if let Lightbox::Open { index } = *self {
            if len == 0 {
                self.close();
                return;
            }
            *self = Lightbox::Open {
                index: (index + 1) % len,
            };
        }
    }

    /// Step back, wrapping from the first image to the last
    pub fn previous(&mut self, len: usize) {
        if let Lightbox::Open { index } = *self {
            if len == 0 {
                self.close();
                return;
            }
            *self = Lightbox::Open {
                index: (index % len + len - 1) % len,
            };
        }
    }

    /// Re-establish the index invariant after the underlying list changed.
    /// An empty list closes the lightbox; a shorter one clamps to its last image.
    pub fn reconcile(&mut self, len: usize) {
        if let Lightbox::Open { index } = *self {
            if len == 0 {
                log::debug!("Filtered list is empty, closing lightbox");
                self.close();
            } else if index >= len {
                *self = Lightbox::Open { index: len - 1 };
            }
        }
    }

    /// The image currently on screen, checked against the list bounds
    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.index().and_then(|index| items.get(index))
    }
}
