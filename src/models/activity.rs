use serde::{Deserialize, Serialize};

/// An association activity presented in the projects section and opened in
/// the activity modal.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActivityPayload {
    pub title: String,
    pub description: String,
    pub image: String,
}
