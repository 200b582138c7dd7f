use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpApi;
use crate::browser;
use crate::config::AppConfig;
use crate::controller::{self, submit_label};
use crate::format::TextStats;
use crate::types::{DetectionKind, DetectionResult};

const SAMPLE_AI_TEXT: &str = "Artificial intelligence has revolutionized numerous industries by automating complex processes and enabling data-driven decision making. Machine learning algorithms can analyze vast datasets to identify patterns and make predictions with remarkable accuracy. This technological advancement has transformed business operations.";

const SAMPLE_HUMAN_TEXT: &str = "I've been thinking about this whole AI thing lately, and honestly, it's kind of wild how fast everything is moving. Like, just yesterday I was struggling to set up my email, and now we're talking about machines that can write entire essays? My neighbor Bob was telling me about it.";

/// Text input with live counters and the submit button.
#[component]
pub fn TextPanel(
    /// Invoked with each successful response.
    on_result: Callback<(DetectionResult, DetectionKind)>,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let (text, set_text) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let stats = Memo::new(move |_| text.with(|t| TextStats::of(t)));

    let on_analyze = move |_| {
        let raw = text.get_untracked();
        if let Err(e) = controller::validate_text(&raw) {
            browser::alert(&e.user_message(DetectionKind::Text));
            return;
        }

        set_busy.set(true);
        let api = HttpApi::new(&config);
        spawn_local(async move {
            match controller::submit_text(&api, &raw).await {
                Ok(result) => on_result.run((result, DetectionKind::Text)),
                Err(e) => browser::alert(&controller::failure_message(&e, DetectionKind::Text)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="panel text-panel">
            <div class="sample-buttons">
                <button class="btn btn-small btn-secondary" on:click=move |_| set_text.set(SAMPLE_AI_TEXT.to_string())>
                    "Demo AI Text"
                </button>
                <button class="btn btn-small btn-secondary" on:click=move |_| set_text.set(SAMPLE_HUMAN_TEXT.to_string())>
                    "Demo Human Text"
                </button>
            </div>

            <textarea
                class="input text-input"
                rows="6"
                placeholder="Paste text here for AI content detection..."
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            ></textarea>

            <div class="panel-footer">
                <div class="text-counters">
                    <span class="char-count">{move || stats.get().chars}</span>" chars, "
                    <span class="word-count">{move || stats.get().words}</span>" words"
                </div>
                <button
                    class="btn btn-primary"
                    on:click=on_analyze
                    disabled=move || busy.get()
                >
                    {move || submit_label(DetectionKind::Text, busy.get())}
                </button>
            </div>
        </div>
    }
}
