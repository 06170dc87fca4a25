// scrub/src/utils/clipboard.rs
//! System clipboard access through `arboard`, behind the `clipboard` feature.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard is unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to read clipboard: {0}")]
    Read(String),
    #[error("Failed to write clipboard: {0}")]
    Write(String),
    #[error("Clipboard support is not compiled in; rebuild with the `clipboard` feature or use --stdin.")]
    NotSupported,
}

/// Reads the clipboard as text. A clipboard holding no text reads as `""`.
#[cfg(feature = "clipboard")]
pub fn read_clipboard() -> Result<String, ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    match clipboard.get_text() {
        Ok(text) => Ok(text),
        Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
        Err(e) => Err(ClipboardError::Read(e.to_string())),
    }
}

#[cfg(feature = "clipboard")]
pub fn write_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::Write(e.to_string()))
}

#[cfg(not(feature = "clipboard"))]
pub fn read_clipboard() -> Result<String, ClipboardError> {
    Err(ClipboardError::NotSupported)
}

#[cfg(not(feature = "clipboard"))]
pub fn write_clipboard(_text: &str) -> Result<(), ClipboardError> {
    Err(ClipboardError::NotSupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClipboardError::Read("boom".into()).to_string(),
            "Failed to read clipboard: boom"
        );
        assert!(ClipboardError::NotSupported.to_string().contains("--stdin"));
    }
}
