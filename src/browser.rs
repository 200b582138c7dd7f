//! Small wrappers over browser APIs used by the components.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::warn;
use wasm_bindgen::JsCast;

use crate::config::ViewerWindow;
use crate::error::DetectError;

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            warn!("alert failed: {:?}", e);
        }
    }
}

pub fn scroll_into_view(el: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Open the secondary viewer. Nothing is passed to it and the handle is dropped.
pub fn open_window(viewer: &ViewerWindow) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.open_with_url_and_target_and_features(&viewer.path, "_blank", &viewer.features()) {
        Ok(Some(_)) => {}
        Ok(None) => warn!("Viewer window was blocked"),
        Err(e) => warn!("Failed to open viewer window: {:?}", e),
    }
}

/// Current local time, e.g. "3:04:05 PM".
pub fn locale_time() -> String {
    js_sys::Date::new_0()
        .to_locale_time_string("default")
        .into()
}

/// Read a File fully and encode it as a data URL.
pub async fn read_file_as_data_url(file: web_sys::File) -> Result<String, DetectError> {
    use js_sys::{ArrayBuffer, Uint8Array};
    use wasm_bindgen_futures::JsFuture;

    let array_buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| DetectError::FileRead(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|_| DetectError::FileRead("Failed to convert to ArrayBuffer".to_string()))?;

    let bytes = Uint8Array::new(&array_buffer).to_vec();
    Ok(encode_data_url(&file.type_(), &bytes))
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
