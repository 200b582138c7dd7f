//! Rolling list of results announced by the server.
//!
//! Shows the placeholder until the first push event arrives, then at most the
//! configured number of entries, newest first.

use leptos::prelude::*;

use crate::app::UiContext;
use crate::format::render_recent;

#[component]
pub fn RecentResults() -> impl IntoView {
    let ctx = expect_context::<UiContext>();

    view! {
        <div class="recent-results">
            <h4 class="recent-title">"Recent Results"</h4>

            {move || {
                if ctx.state.with(|s| s.recent.is_empty()) {
                    view! { <p class="recent-empty">"No analyses yet"</p> }.into_any()
                } else {
                    let rows = ctx.state.with(|s| s.recent.iter().map(render_recent).collect::<Vec<_>>());
                    view! {
                        <div class="recent-list">
                            {rows.into_iter().map(|row| {
                                view! {
                                    <div class=format!("recent-item {}", row.tone.class())>
                                        <div class="recent-item-info">
                                            <span class="recent-label">{row.label}</span>
                                            <span class="recent-meta">{row.meta}</span>
                                        </div>
                                        <span class="recent-confidence">{row.confidence}</span>
                                    </div>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
