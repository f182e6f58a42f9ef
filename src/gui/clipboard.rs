//! Clipboard access for pasting URLs

use arboard::Clipboard;

/// Read text from the system clipboard, trimmed of surrounding whitespace
pub fn get_clipboard_text() -> Result<String, String> {
    let mut clipboard =
        Clipboard::new().map_err(|e| format!("Failed to access clipboard: {}", e))?;

    clipboard
        .get_text()
        .map(|text| text.trim().to_string())
        .map_err(|e| format!("Failed to read clipboard: {}", e))
}
