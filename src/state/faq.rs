/// FAQ accordion: at most one entry expanded at a time.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Accordion {
    active: Option<usize>,
}

impl Accordion {
    /// Collapses `index` if it is the open entry, otherwise opens it and
    /// collapses whichever entry was open before.
    pub fn toggle(&mut self, index: usize) {
        self.active = if self.active == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}
