use leptos::prelude::*;

use crate::components::connection_indicator::ConnectionIndicator;
use crate::components::recent_results::RecentResults;

/// Secondary window: a standalone live feed with its own connection.
#[component]
pub fn ArViewerPage() -> impl IntoView {
    view! {
        <div class="page ar-viewer-page">
            <style>{include_str!("dashboard.css")}</style>
            <header class="dashboard-header">
                <h2>"Live Authenticity Feed"</h2>
                <ConnectionIndicator />
            </header>
            <RecentResults />
        </div>
    }
}
