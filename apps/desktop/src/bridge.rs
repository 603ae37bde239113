//! Clipboard adapter feeding `iced::clipboard::write`.
//!
//! The results view writes synchronously; the update loop drains the queued
//! text and turns it into `Task`s.

use reelnotes_core::{Clipboard, ServiceError};

#[derive(Debug, Default)]
pub struct PendingClipboard {
    pending: Vec<String>,
}

impl PendingClipboard {
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }
}

impl Clipboard for PendingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ServiceError> {
        self.pending.push(text.to_string());
        Ok(())
    }
}
