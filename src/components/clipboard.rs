//! System clipboard access for pastes into the digit slots.

/// Read text from the system clipboard.
///
/// Runs on the blocking pool since some platforms wait on the window system.
/// Failures are logged and reported as `None`.
pub async fn read_clipboard() -> Option<String> {
    let result = tokio::task::spawn_blocking(|| {
        arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text())
    })
    .await;

    match result {
        Ok(Ok(text)) => Some(text),
        Ok(Err(e)) => {
            tracing::warn!("Failed to read clipboard: {}", e);
            None
        }
        Err(e) => {
            tracing::warn!("Clipboard task failed: {}", e);
            None
        }
    }
}
