use crate::models::{ActivityPayload, GalleryItem};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Overlay {
    Activity,
    Image,
    Contact,
}

impl Overlay {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Image => "image",
            Self::Contact => "contact",
        }
    }
}

impl std::fmt::Display for Overlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Page scroll suspension shared by every overlay.
///
/// Each open overlay holds the lock once; scrolling comes back only when the
/// last holder lets go. Holders are kept in opening order so the most recent
/// one can be found for the escape key.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ScrollLock {
    holders: Vec<Overlay>,
}

impl ScrollLock {
    /// Re-acquiring moves the overlay to the top instead of counting twice.
    pub fn acquire(&mut self, overlay: Overlay) {
        self.holders.retain(|h| *h != overlay);
        self.holders.push(overlay);
    }

    pub fn release(&mut self, overlay: Overlay) {
        self.holders.retain(|h| *h != overlay);
    }

    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    pub fn top(&self) -> Option<Overlay> {
        self.holders.last().copied()
    }

    pub fn holders(&self) -> &[Overlay] {
        &self.holders
    }
}

/// The event that triggered a close, so it can be kept from bubbling to an
/// enclosing click handler.
pub trait EventPropagation {
    fn stop_propagation(&self);
}

/// Activity details popup. Visible exactly when an activity is selected.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ActivityModal {
    selected: Option<ActivityPayload>,
}

impl ActivityModal {
    pub fn open(&mut self, payload: ActivityPayload) {
        self.selected = Some(payload);
    }

    pub fn close(&mut self) -> Option<ActivityPayload> {
        self.selected.take()
    }

    pub fn selected(&self) -> Option<&ActivityPayload> {
        self.selected.as_ref()
    }

    pub fn show_modal(&self) -> bool {
        self.selected.is_some()
    }
}

/// Full-size viewer for one gallery image.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ImageViewer {
    selected: Option<GalleryItem>,
}

impl ImageViewer {
    pub fn open(&mut self, item: GalleryItem) {
        self.selected = Some(item);
    }

    pub fn close(&mut self) -> Option<GalleryItem> {
        self.selected.take()
    }

    pub fn selected(&self) -> Option<&GalleryItem> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}
