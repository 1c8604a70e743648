//! Reading a picked image file into an inline `data:` URI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Uploaded logos and profile photos are stored directly in the settings
//! document; there is no asset storage. Large files are allowed but warned
//! about, since every byte ends up in `localStorage`.
//!
//! The read is asynchronous. The caller obtains an `ImportTicket` from the
//! open `SettingsSession` before starting and hands it back with the result,
//! so a read that completes after the editor closed is dropped.

#[cfg(test)]
#[path = "image_import_test.rs"]
mod image_import_test;

/// Files above this size trigger the soft warning.
pub const IMAGE_WARN_BYTES: f64 = 2.0 * 1024.0 * 1024.0;

pub const OVERSIZE_WARNING: &str = "이미지 파일이 너무 큽니다 (2MB 이하 권장).";

/// Warning to show for a file of `size` bytes, if any. Never blocks the import.
pub fn size_warning(size: f64) -> Option<&'static str> {
    (size > IMAGE_WARN_BYTES).then_some(OVERSIZE_WARNING)
}

/// Whether a stored image value is inline data rather than a path.
pub fn is_data_uri(value: &str) -> bool {
    value.starts_with("data:")
}

/// Short label for an image value in the editor.
pub fn describe_image(value: &str) -> String {
    if value.is_empty() {
        "(none)".to_owned()
    } else if is_data_uri(value) {
        let mime = value["data:".len()..].split([';', ',']).next().unwrap_or_default();
        format!("uploaded {mime} ({} KB inline)", value.len() / 1024)
    } else {
        value.to_owned()
    }
}

/// Read the first file of a file input, calling `on_loaded` with its data URI.
///
/// Shows the oversize warning before reading. Does nothing when no file was
/// picked or outside the browser.
#[cfg(feature = "hydrate")]
pub fn read_first_file<F>(input: &web_sys::HtmlInputElement, on_loaded: F)
where
    F: FnOnce(String) + 'static,
{
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(file) = input.files().and_then(|list| list.get(0)) else {
        return;
    };
    if let Some(message) = size_warning(file.size()) {
        crate::util::dialog::alert(message);
    }
    let Ok(reader) = web_sys::FileReader::new() else {
        log::warn!("FileReader unavailable");
        return;
    };

    let reader_done = reader.clone();
    let on_loadend = Closure::once(move |_: web_sys::ProgressEvent| {
        match reader_done.result().ok().and_then(|v| v.as_string()) {
            Some(data_uri) => on_loaded(data_uri),
            None => log::warn!("image read produced no data"),
        }
    });
    reader.set_onloadend(Some(on_loadend.as_ref().unchecked_ref()));
    // The reader owns the callback from here on.
    on_loadend.forget();

    if let Err(e) = reader.read_as_data_url(&file) {
        log::warn!("image read failed to start: {e:?}");
    }
}
