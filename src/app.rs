use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use tracing::error;

use crate::browser;
use crate::config::AppConfig;
use crate::pages::ar_viewer::ArViewerPage;
use crate::pages::dashboard::DashboardPage;
use crate::push;
use crate::state::{ConnectionStatus, UiState};

/// Session state shared by every component on the page.
#[derive(Clone, Copy)]
pub struct UiContext {
    pub state: RwSignal<UiState>,
}

#[component]
pub fn App() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let state = RwSignal::new(UiState::with_recent_limit(config.recent_limit));
    provide_context(UiContext { state });

    // Push connection for the lifetime of the page
    let connected = push::socket::connect(
        &config.socket_url,
        move |status| state.update(|s| s.set_connection(status)),
        move |event| {
            let timestamp = browser::locale_time();
            state.update(|s| s.on_push_event(event, timestamp));
        },
    );
    if let Err(e) = connected {
        error!("Failed to open push connection: {:?}", e);
        state.update(|s| s.set_connection(ConnectionStatus::Offline));
    }

    view! {
        <Router>
            <main class="content">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/ar-viewer") view=ArViewerPage />
                </Routes>
            </main>
        </Router>
    }
}
