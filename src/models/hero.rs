use serde::{Deserialize, Serialize};

/// One slide of the hero carousel at the top of the main layout.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HeroSlide {
    pub title: String,
    pub subtitle: String,
    pub image: String,
}
