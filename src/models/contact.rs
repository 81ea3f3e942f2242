use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Title, message and mail subject shown for one contact context.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContactTemplate {
    pub title: String,
    pub message: String,
    pub subject: String,
}

/// Outbound contact channels and the per-context popup wording.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContactSettings {
    /// Messaging number, used verbatim in `https://wa.me/<number>`.
    pub whatsapp_number: String,
    pub email: String,
    /// Used for any context tag without its own entry.
    pub fallback: ContactTemplate,
    #[serde(default)]
    pub contexts: BTreeMap<String, ContactTemplate>,
}

impl ContactSettings {
    /// Exact lookup of a context tag, falling back to the generic template.
    pub fn template_for(&self, context: &str) -> &ContactTemplate {
        self.contexts.get(context).unwrap_or(&self.fallback)
    }
}
