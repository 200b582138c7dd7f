use leptos::prelude::*;

use crate::app::UiContext;
use crate::state::ConnectionStatus;

fn status_display(status: ConnectionStatus) -> (&'static str, &'static str) {
    match status {
        ConnectionStatus::Live => ("status-dot status-live", "Live"),
        ConnectionStatus::Offline => ("status-dot status-offline", "Offline"),
        ConnectionStatus::Connecting => ("status-dot status-connecting", "Connecting..."),
    }
}

/// Dot plus label reflecting the push connection.
#[component]
pub fn ConnectionIndicator() -> impl IntoView {
    let ctx = expect_context::<UiContext>();
    let status = move || ctx.state.with(|s| s.connection);

    view! {
        <div class="connection-indicator">
            <span class=move || status_display(status()).0></span>
            <span class="connection-label">{move || status_display(status()).1}</span>
        </div>
    }
}
