use crate::models::{ActivityPayload, ContactSettings, GalleryItem};
use crate::state::{
    Accordion, ActivityModal, ContactPopup, EventPropagation, ImageViewer, Overlay, ScrollLock,
};

/// Which overlays the escape key dismisses.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum EscapePolicy {
    /// Closes the most recently opened overlay, whatever its kind.
    #[default]
    TopmostOverlay,
    /// Closes the activity modal only; the image viewer and contact popup
    /// ignore the key.
    ActivityOnly,
}

/// Interaction state of the main layout: FAQ accordion and the three
/// overlays, which share one scroll lock.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MainLayoutState {
    faq: Accordion,
    activity: ActivityModal,
    image: ImageViewer,
    contact: ContactPopup,
    scroll_lock: ScrollLock,
    escape_policy: EscapePolicy,
}

impl MainLayoutState {
    pub fn new(escape_policy: EscapePolicy) -> Self {
        Self {
            escape_policy,
            ..Self::default()
        }
    }

    pub fn faq(&self) -> &Accordion {
        &self.faq
    }

    pub fn activity(&self) -> &ActivityModal {
        &self.activity
    }

    pub fn image(&self) -> &ImageViewer {
        &self.image
    }

    pub fn contact(&self) -> &ContactPopup {
        &self.contact
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    pub fn toggle_faq(&mut self, index: usize) {
        self.faq.toggle(index);
    }

    pub fn open_activity(&mut self, payload: ActivityPayload) {
        tracing::debug!(activity = %payload.title, "opening activity modal");
        self.activity.open(payload);
        self.scroll_lock.acquire(Overlay::Activity);
    }

    pub fn close_popup(&mut self) {
        self.activity.close();
        self.scroll_lock.release(Overlay::Activity);
    }

    /// Records interest in `activity` and dismisses the modal.
    pub fn apply_to(&mut self, activity: &ActivityPayload) {
        tracing::info!(activity = %activity.title, "application requested");
        self.close_popup();
    }

    pub fn open_image(&mut self, item: GalleryItem) {
        self.image.open(item);
        self.scroll_lock.acquire(Overlay::Image);
    }

    /// Closes the viewer without letting `event` reach the backdrop's own
    /// click handler.
    pub fn close_image<E>(&mut self, event: &E)
    where
        E: EventPropagation + ?Sized,
    {
        event.stop_propagation();
        self.dismiss_image();
    }

    pub fn open_contact(&mut self, context: &str, settings: &ContactSettings) {
        tracing::debug!(context, "opening contact popup");
        self.contact.open(context, settings);
        self.scroll_lock.acquire(Overlay::Contact);
    }

    pub fn close_contact(&mut self) {
        self.contact.close();
        self.scroll_lock.release(Overlay::Contact);
    }

    /// Handles the escape key. Returns the overlay that was closed, if any.
    pub fn on_escape(&mut self) -> Option<Overlay> {
        let target = match self.escape_policy {
            EscapePolicy::ActivityOnly => self.activity.show_modal().then_some(Overlay::Activity),
            EscapePolicy::TopmostOverlay => self.scroll_lock.top(),
        }?;

        match target {
            Overlay::Activity => self.close_popup(),
            Overlay::Image => self.dismiss_image(),
            Overlay::Contact => self.close_contact(),
        }
        tracing::debug!(overlay = %target, "closed by escape key");

        Some(target)
    }

    fn dismiss_image(&mut self) {
        self.image.close();
        self.scroll_lock.release(Overlay::Image);
    }
}
