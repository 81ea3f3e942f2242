use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub title: String,
    pub location: String,
    pub image: String,
}
