//! Site content loading.
//!
//! Everything the main layout displays (hero slides, agenda, gallery, FAQ,
//! testimonials, activities and contact wording) lives in `content/site.toml`
//! rather than in the view code. The file is embedded at compile time so the
//! client has content without a round trip; the server can serve an override
//! read from disk.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::common::ContentError;
use crate::models::{
    ActivityPayload, AgendaItem, ContactSettings, FaqEntry, GalleryItem, HeroSlide, Testimonial,
};

const EMBEDDED_CONTENT: &str = include_str!("../../content/site.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteContent {
    pub contact: ContactSettings,
    pub hero: Vec<HeroSlide>,
    #[serde(default)]
    pub activities: Vec<ActivityPayload>,
    #[serde(default)]
    pub agenda: Vec<AgendaItem>,
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    pub testimonials: Vec<Testimonial>,
}

impl SiteContent {
    /// Content compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml_str(EMBEDDED_CONTENT)
    }

    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    /// Rejects content the layout cannot render.
    ///
    /// Day/month labels that disagree with an item's date are only logged.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.contact.whatsapp_number.trim().is_empty() {
            return Err(ContentError::EmptyContactChannel("whatsapp_number"));
        }
        if self.contact.email.trim().is_empty() {
            return Err(ContentError::EmptyContactChannel("email"));
        }
        // The carousels index into these modulo their length.
        if self.hero.is_empty() {
            return Err(ContentError::EmptySection("hero"));
        }
        if self.testimonials.is_empty() {
            return Err(ContentError::EmptySection("testimonials"));
        }

        let mut seen = HashSet::new();
        for item in &self.agenda {
            if !seen.insert(item.id.as_str()) {
                return Err(ContentError::DuplicateAgendaId(item.id.clone()));
            }
            if item.has_label_mismatch() {
                tracing::warn!(
                    id = %item.id,
                    date = %item.date,
                    day = %item.day_label(),
                    month = %item.month_label(),
                    "agenda labels disagree with the item date"
                );
            }
        }

        Ok(())
    }

    pub fn agenda_item(&self, id: &str) -> Option<&AgendaItem> {
        self.agenda.iter().find(|item| item.id == id)
    }

    /// Agenda items in chronological order.
    pub fn agenda_by_date(&self) -> Vec<&AgendaItem> {
        let mut items: Vec<&AgendaItem> = self.agenda.iter().collect();
        items.sort_by_key(|item| item.date);
        items
    }
}
