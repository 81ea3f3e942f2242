use crate::models::ContactSettings;

/// `https://wa.me/<number>?text=<message>`
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

/// `mailto:<address>?subject=<subject>&body=<message>`
pub fn mailto_link(address: &str, subject: &str, message: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(subject),
        urlencoding::encode(message)
    )
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ContactPopup {
    visible: bool,
    title: String,
    message: String,
    whatsapp_link: String,
    mailto_link: String,
}

impl ContactPopup {
    /// Replaces the whole popup with the wording for `context` and shows it.
    pub fn open(&mut self, context: &str, settings: &ContactSettings) {
        let template = settings.template_for(context);

        *self = Self {
            visible: true,
            title: template.title.clone(),
            message: template.message.clone(),
            whatsapp_link: whatsapp_link(&settings.whatsapp_number, &template.message),
            mailto_link: mailto_link(&settings.email, &template.subject, &template.message),
        };
    }

    /// Hides the popup; text and links are kept.
    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn whatsapp_link(&self) -> &str {
        &self.whatsapp_link
    }

    pub fn mailto_link(&self) -> &str {
        &self.mailto_link
    }
}
