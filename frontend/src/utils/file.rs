use crate::reconcile::PendingFile;

/// Read the first file picked in an `<input type="file">` and hand it to `on_read`.
/// Nothing happens when the picker was cancelled.
#[cfg(target_arch = "wasm32")]
pub fn on_file_selected(ev: &web_sys::Event, on_read: impl Fn(PendingFile) + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let Some(input) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return;
    };
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(file.array_buffer()).await {
            Ok(buffer) => on_read(PendingFile {
                name: file.name(),
                mime: file.type_(),
                bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
            }),
            Err(_) => log::warn!("could not read selected file {}", file.name()),
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn on_file_selected(_ev: &web_sys::Event, _on_read: impl Fn(PendingFile) + 'static) {}
