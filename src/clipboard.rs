// ABOUTME: Clipboard seam for copying command snippets
// Write failures are surfaced to the UI instead of being swallowed

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// Clipboard backend missing, denied, or the write itself failed
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Write capability for the system clipboard
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Real clipboard backed by arboard
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

/// Stand-in used when no clipboard backend could be created at startup.
/// Every write reports the original failure so the UI can show it.
pub struct UnavailableClipboard {
    reason: String,
}

impl UnavailableClipboard {
    pub fn new(error: &ClipboardError) -> Self {
        Self {
            reason: error.to_string(),
        }
    }
}

impl ClipboardSink for UnavailableClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_clipboard_always_fails() {
        let original = ClipboardError::Unavailable("no display".to_string());
        let mut clipboard = UnavailableClipboard::new(&original);

        let err = clipboard.set_text("vercel").unwrap_err();
        assert!(err.to_string().contains("no display"));
    }

    #[test]
    fn test_mock_sink_records_write() {
        let mut mock = MockClipboardSink::new();
        mock.expect_set_text()
            .withf(|text| text == "npm i -g vercel")
            .times(1)
            .returning(|_| Ok(()));

        assert!(mock.set_text("npm i -g vercel").is_ok());
    }
}
