#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct HeaderState {
    is_scrolled: bool,
    is_mobile_menu_open: bool,
}

impl HeaderState {
    /// Re-evaluated on every window scroll event.
    pub fn on_scroll(&mut self, offset_y: f64) {
        self.is_scrolled = offset_y > 0.0;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.is_mobile_menu_open = !self.is_mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.is_mobile_menu_open = false;
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.is_mobile_menu_open
    }
}
