//! Floor screens that show a car's status line.

/// Any kind of screen that can show a message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Screen {
    text: String,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
