/// One accordion list. At most one of its questions is expanded at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<String>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_item(&self) -> Option<&str> {
        self.open.as_deref()
    }

    pub fn is_open(&self, item_id: &str) -> bool {
        self.open.as_deref() == Some(item_id)
    }

    /// Opens `item_id`, or closes it if it is already the open one. Returns the
    /// item that was collapsed, if any.
    pub fn toggle(&mut self, item_id: &str) -> Option<String> {
        if self.is_open(item_id) {
            self.open.take()
        } else {
            self.open.replace(item_id.to_string())
        }
    }
}
