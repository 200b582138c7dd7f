//! Main detection dashboard.
//!
//! Hosts both input panels (one visible per mode), the latest verdict, the
//! stats tiles and the recent-results feed.

use leptos::html::Div;
use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpApi;
use crate::app::UiContext;
use crate::browser;
use crate::components::connection_indicator::ConnectionIndicator;
use crate::components::image_panel::ImagePanel;
use crate::components::mode_toggle::ModeToggle;
use crate::components::recent_results::RecentResults;
use crate::components::result_card::ResultCard;
use crate::components::stats_grid::StatsGrid;
use crate::components::text_panel::TextPanel;
use crate::config::AppConfig;
use crate::controller;
use crate::format::ResultView;
use crate::state::UiMode;
use crate::types::{DetectionKind, DetectionResult, StatsSnapshot};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<UiContext>();
    let config = expect_context::<AppConfig>();
    let result = RwSignal::new(None::<ResultView>);
    let stats = RwSignal::new(None::<StatsSnapshot>);
    let results_section = NodeRef::<Div>::new();

    // Load server totals on mount; without them the tiles count from zero
    {
        let api = HttpApi::new(&config);
        spawn_local(async move {
            match api.fetch_stats().await {
                Ok(snapshot) => stats.set(Some(snapshot)),
                Err(e) => {
                    warn!("Could not load server stats, starting from zero: {}", e);
                    stats.update(|s| {
                        s.get_or_insert_with(StatsSnapshot::default);
                    });
                }
            }
        });
    }

    let on_result = Callback::new(move |(detection, kind): (DetectionResult, DetectionKind)| {
        let mut view = None;
        ctx.state.update(|s| {
            view = Some(controller::complete_submission(s, &detection, kind));
        });
        stats.update(|s| StatsSnapshot::bump_or_start(s, &detection));
        result.set(view);
    });

    // Scroll once the section has been unhidden, after the DOM update lands
    Effect::new(move |_| {
        if result.with(Option::is_none) {
            return;
        }
        request_animation_frame(move || {
            if let Some(el) = results_section.get_untracked() {
                browser::scroll_into_view(&el);
            }
        });
    });

    let viewer = config.viewer.clone();
    let panel_visible = move |mode: UiMode| ctx.state.with(|s| s.is_panel_visible(mode));

    view! {
        <div class="page dashboard-page">
            <style>{include_str!("dashboard.css")}</style>

            <header class="dashboard-header">
                <h2>"TruthGuard AI"</h2>
                <ConnectionIndicator />
            </header>
            <p class="page-description">"Multi-modal authenticity detection for text and images."</p>

            <StatsGrid stats=stats />

            <div class="dashboard-layout">
                <section class="detection-area">
                    <ModeToggle />

                    <div class="detection-mode" class:hidden=move || !panel_visible(UiMode::Text)>
                        <TextPanel on_result=on_result />
                    </div>
                    <div class="detection-mode" class:hidden=move || !panel_visible(UiMode::Image)>
                        <ImagePanel on_result=on_result />
                    </div>

                    <div node_ref=results_section class="results-section" class:hidden=move || result.with(Option::is_none)>
                        <h3>"Analysis Results"</h3>
                        {move || result.get().map(|r| view! { <ResultCard result=r /> })}
                    </div>
                </section>

                <aside class="dashboard-sidebar">
                    <RecentResults />
                    <button class="btn btn-secondary btn-block" on:click=move |_| browser::open_window(&viewer)>
                        "Open AR Viewer"
                    </button>
                </aside>
            </div>
        </div>
    }
}
