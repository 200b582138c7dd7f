//! Image picker with preview and the submit button.
//!
//! Any file is accepted; `accept="image/*"` only steers the picker.

use leptos::html::Input;
use leptos::prelude::*;
use tracing::error;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpApi;
use crate::browser;
use crate::config::AppConfig;
use crate::controller::{self, submit_label};
use crate::types::{DetectionKind, DetectionResult};

#[component]
pub fn ImagePanel(on_result: Callback<(DetectionResult, DetectionKind)>) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let file_input = NodeRef::<Input>::new();
    let (preview, set_preview) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let (busy, set_busy) = signal(false);
    let file_input_id = "image-file-input";

    let selected_file = move || {
        file_input
            .get_untracked()
            .and_then(|el| el.files())
            .and_then(|files| files.get(0))
    };

    // Preview the chosen file and unlock the submit button
    let on_input_change = move |_: web_sys::Event| {
        if let Some(file) = selected_file() {
            set_is_loading.set(true);
            spawn_local(async move {
                match browser::read_file_as_data_url(file).await {
                    Ok(data_url) => set_preview.set(Some(data_url)),
                    Err(e) => error!("Failed to read file: {}", e),
                }
                set_is_loading.set(false);
            });
        }
    };

    let on_analyze = move |_| {
        let selected = selected_file();
        if let Err(e) = controller::require_selection(selected.as_ref()) {
            browser::alert(&e.user_message(DetectionKind::Image));
            return;
        }

        set_busy.set(true);
        let api = HttpApi::new(&config);
        spawn_local(async move {
            match controller::submit_image(&api, selected, browser::read_file_as_data_url).await {
                Ok(result) => on_result.run((result, DetectionKind::Image)),
                Err(e) => browser::alert(&controller::failure_message(&e, DetectionKind::Image)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="panel image-panel">
            <div class="drop-zone" class:drop-zone-loading=move || is_loading.get()>
                <input
                    type="file"
                    id=file_input_id
                    accept="image/*"
                    style="display: none"
                    node_ref=file_input
                    on:change=on_input_change
                />
                <Show
                    when=move || preview.with(Option::is_some)
                    fallback=move || view! {
                        <label for=file_input_id class="drop-zone-content">
                            <div class="drop-icon">"[image]"</div>
                            <p class="drop-main">"Click to upload image"</p>
                        </label>
                    }
                >
                    <label for=file_input_id class="image-preview">
                        <img src=move || preview.get().unwrap_or_default() class="preview-image" alt="Selected image" />
                    </label>
                </Show>
            </div>

            <button
                class="btn btn-primary btn-block"
                on:click=on_analyze
                disabled=move || busy.get() || preview.with(Option::is_none)
            >
                {move || submit_label(DetectionKind::Image, busy.get())}
            </button>
        </div>
    }
}
