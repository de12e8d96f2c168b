//! Saving text as a download and reading user-picked files.

use gloo::console::log;
use gloo_file::callbacks::{read_as_text, FileReader};
use gloo_file::File;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Event, HtmlInputElement, Url};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FileSinkError {
    #[error("Could not create Blob")]
    Blob,
    #[error("Could not create object URL")]
    ObjectUrl,
    #[error("No document")]
    NoDocument,
    #[error("Could not create download link")]
    Link,
}

/// Offer `content` to the user as a file named `filename`.
pub fn download_file(filename: &str, mime: &str, content: &str) -> Result<(), FileSinkError> {
    let bag = BlobPropertyBag::new();
    bag.set_type(mime);

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));

    let blob = Blob::new_with_str_sequence_and_options(&parts, &bag)
        .map_err(|_| FileSinkError::Blob)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|_| FileSinkError::ObjectUrl)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(FileSinkError::NoDocument)?;
    let body = document.body().ok_or(FileSinkError::NoDocument)?;
    let a = document
        .create_element("a")
        .map_err(|_| FileSinkError::Link)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| FileSinkError::Link)?;

    a.set_href(&url);
    a.set_download(filename);
    a.style().set_property("display", "none").ok();

    body.append_child(&a).map_err(|_| FileSinkError::Link)?;
    a.click();
    body.remove_child(&a).ok();

    Url::revoke_object_url(&url).ok();
    log!(format!("Downloaded file: {filename}"));
    Ok(())
}

/// Start reading the file picked in the `<input type="file">` behind `e`.
///
/// The returned reader must be kept alive until `done` fires; dropping it
/// cancels the read. The input is cleared so the same file can be picked
/// again.
pub fn read_picked_file<F>(e: &Event, done: F) -> Option<FileReader>
where
    F: FnOnce(Result<String, String>) + 'static,
{
    let input: HtmlInputElement = e.target()?.dyn_into().ok()?;
    let file = input.files()?.get(0)?;
    input.set_value("");

    let file = File::from(file);
    log!(format!("Reading file: {}", file.name()));
    Some(read_as_text(&file, move |res| done(res.map_err(|e| e.to_string()))))
}
