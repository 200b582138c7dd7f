//! Endpoint and window configuration.
//!
//! Everything is derived from the page origin; there is no config file and no
//! environment to read in the browser.

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const RECENT_LIMIT: usize = 5;

/// Geometry of the secondary viewer window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerWindow {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

impl ViewerWindow {
    /// Feature string for `window.open`.
    pub fn features(&self) -> String {
        format!("width={},height={}", self.width, self.height)
    }
}

impl Default for ViewerWindow {
    fn default() -> Self {
        Self {
            path: "/ar-viewer".to_string(),
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub origin: String,
    pub text_endpoint: String,
    pub image_endpoint: String,
    pub stats_endpoint: String,
    pub socket_url: String,
    pub viewer: ViewerWindow,
    pub recent_limit: usize,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_origin(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/').to_string();
        Self {
            text_endpoint: format!("{}/api/detect-text", origin),
            image_endpoint: format!("{}/api/detect-image", origin),
            stats_endpoint: format!("{}/api/stats", origin),
            socket_url: socket_url_for(&origin),
            viewer: ViewerWindow::default(),
            recent_limit: RECENT_LIMIT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            origin,
        }
    }

    /// Apply `?log=<directive>` from a location search string.
    pub fn with_query(mut self, search: &str) -> Self {
        if let Some(filter) = query_param(search, "log").filter(|f| !f.is_empty()) {
            self.log_filter = filter;
        }
        self
    }

    /// Build from `window.location`. Falls back to localhost outside a page.
    pub fn from_window() -> Self {
        let location = web_sys::window().map(|w| w.location());
        let origin = location
            .as_ref()
            .and_then(|l| l.origin().ok())
            .unwrap_or_else(|| "http://localhost:5000".to_string());
        let search = location
            .as_ref()
            .and_then(|l| l.search().ok())
            .unwrap_or_default();
        Self::from_origin(&origin).with_query(&search)
    }
}

/// Socket.IO websocket endpoint for an http(s) origin.
fn socket_url_for(origin: &str) -> String {
    let ws_origin = if let Some(rest) = origin.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = origin.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else {
        origin.to_string()
    };
    format!("{}/socket.io/?EIO=4&transport=websocket", ws_origin)
}

fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| match urlencoding::decode(v) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => v.to_string(),
        })
}
