use std::path::PathBuf;
use std::sync::Arc;

use aras_web::content::SiteContent;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<SiteContent>,
    pub site_root: PathBuf,
}

impl AppState {
    pub fn new(content: SiteContent, site_root: PathBuf) -> Self {
        Self {
            content: Arc::new(content),
            site_root,
        }
    }

    pub fn index_html(&self) -> PathBuf {
        self.site_root.join("index.html")
    }
}
