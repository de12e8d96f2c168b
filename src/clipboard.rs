use thiserror::Error;
use web_sys::window;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("No window")]
    NoWindow,
    #[error("Clipboard write failed (requires HTTPS + user gesture in many browsers)")]
    WriteFailed,
}

pub async fn copy_to_clipboard(text: String) -> Result<(), ClipboardError> {
    let w = window().ok_or(ClipboardError::NoWindow)?;
    let cb = w.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(cb.write_text(&text))
        .await
        .map_err(|_| ClipboardError::WriteFailed)?;
    Ok(())
}
