use leptos::prelude::*;

use crate::app::UiContext;
use crate::types::StatsSnapshot;

fn or_placeholder(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

/// Server totals plus this session's count.
#[component]
pub fn StatsGrid(stats: RwSignal<Option<StatsSnapshot>>) -> impl IntoView {
    let ctx = expect_context::<UiContext>();
    let field = move |f: fn(&StatsSnapshot) -> String| {
        or_placeholder(stats.with(|s| s.as_ref().map(f)))
    };

    view! {
        <div class="stats-grid">
            <div class="stat-tile">
                <div class="stat-value stat-total">{move || field(|s| s.total_detections.to_string())}</div>
                <div class="stat-label">"Total Scans"</div>
            </div>
            <div class="stat-tile">
                <div class="stat-value stat-ai">{move || field(|s| s.ai_detected.to_string())}</div>
                <div class="stat-label">"AI Detected"</div>
            </div>
            <div class="stat-tile">
                <div class="stat-value stat-human">{move || field(|s| s.human_detected.to_string())}</div>
                <div class="stat-label">"Human Content"</div>
            </div>
            <div class="stat-tile">
                <div class="stat-value stat-accuracy">{move || field(|s| s.accuracy_rate.clone())}</div>
                <div class="stat-label">"Accuracy"</div>
            </div>
            <div class="stat-tile">
                <div class="stat-value stat-session">{move || ctx.state.with(|s| s.analysis_count)}</div>
                <div class="stat-label">"Analyses Today"</div>
                <div class="stat-detail">
                    {move || ctx.state.with(|s| format!("{} AI / {} human", s.ai_flagged, s.human_flagged))}
                </div>
            </div>
        </div>
    }
}
