use std::cell::Cell;
use std::time::Duration;

use aras_web::content::SiteContent;
use aras_web::services::Session;
use aras_web::state::{EventPropagation, IntervalScheduler};

/// Interval scheduler that only records what the carousel asks of it.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u32,
    pub active: Vec<u32>,
    pub scheduled: Vec<u32>,
    pub cancelled: Vec<u32>,
    pub refuse: bool,
}

impl ManualScheduler {
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }
}

impl IntervalScheduler for ManualScheduler {
    type Handle = u32;

    fn schedule(&mut self, _every: Duration) -> Option<u32> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        self.active.push(self.next_id);
        self.scheduled.push(self.next_id);
        Some(self.next_id)
    }

    fn cancel(&mut self, handle: u32) {
        self.active.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}

/// Stand-in for a DOM click event.
#[derive(Debug, Default)]
pub struct SyntheticClick {
    stopped: Cell<bool>,
}

impl SyntheticClick {
    pub fn propagation_stopped(&self) -> bool {
        self.stopped.get()
    }
}

impl EventPropagation for SyntheticClick {
    fn stop_propagation(&self) {
        self.stopped.set(true);
    }
}

pub fn anonymous() -> Session {
    Session::anonymous()
}

pub fn signed_in() -> Session {
    Session::from_token(Some("member-token".to_string()))
}

pub fn site_content() -> SiteContent {
    SiteContent::embedded().expect("embedded site content is valid")
}

pub const MINIMAL_CONTENT: &str = r#"
[contact]
whatsapp_number = "+10000000000"
email = "team@example.org"

[contact.fallback]
title = "Contact"
message = "Bonjour"
subject = "Contact"

[[hero]]
title = "Accueil"
subtitle = "Bienvenue"
image = "assets/hero.jpg"

[[agenda]]
id = "later"
date = "2025-09-01T18:00:00"
title_lines = ["Atelier"]
location = "Douala"

[[agenda]]
id = "sooner"
date = "2025-03-05T10:00:00"
title_lines = ["Rencontre"]
location = "Yaoundé"
tone = "nature-green"

[[testimonials]]
quote = "Merci"
author = "A."
"#;
