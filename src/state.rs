//! Session state owned by the dashboard controller.
//!
//! Lives in a single `RwSignal<UiState>` provided through context; every
//! mutation goes through the methods here so the rules can be tested without
//! a DOM.

use std::collections::VecDeque;

use crate::config::RECENT_LIMIT;
use crate::types::{DetectionKind, DetectionResult, PushEvent};

/// Which input panel is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Text,
    Image,
}

impl UiMode {
    pub const ALL: [UiMode; 2] = [UiMode::Text, UiMode::Image];

    pub fn label(self) -> &'static str {
        match self {
            UiMode::Text => "Text Analysis",
            UiMode::Image => "Image Analysis",
        }
    }
}

/// State of the push-event connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Live,
    Offline,
}

/// A push-event result as kept in the recent list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentResultEntry {
    pub result: DetectionResult,
    pub kind: DetectionKind,
    pub timestamp: String,
}

/// Bounded list, newest first. Eviction is by arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentResults {
    entries: VecDeque<RecentResultEntry>,
    limit: usize,
}

impl RecentResults {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit + 1),
            limit,
        }
    }

    pub fn push(&mut self, entry: RecentResultEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.limit);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecentResultEntry> {
        self.entries.iter()
    }
}

impl Default for RecentResults {
    fn default() -> Self {
        Self::with_limit(RECENT_LIMIT)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub mode: UiMode,
    pub analysis_count: u32,
    pub ai_flagged: u32,
    pub human_flagged: u32,
    pub connection: ConnectionStatus,
    pub recent: RecentResults,
}

impl UiState {
    pub fn with_recent_limit(limit: usize) -> Self {
        Self {
            recent: RecentResults::with_limit(limit),
            ..Self::default()
        }
    }

    /// Returns false when `mode` was already active.
    pub fn set_mode(&mut self, mode: UiMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        true
    }

    pub fn is_panel_visible(&self, mode: UiMode) -> bool {
        self.mode == mode
    }

    /// Count a completed submission.
    pub fn record_analysis(&mut self, result: &DetectionResult) {
        self.analysis_count += 1;
        if result.is_ai_generated {
            self.ai_flagged += 1;
        } else {
            self.human_flagged += 1;
        }
    }

    pub fn on_push_event(&mut self, event: PushEvent, timestamp: String) {
        self.recent.push(RecentResultEntry {
            result: event.result,
            kind: event.kind,
            timestamp,
        });
    }

    pub fn set_connection(&mut self, status: ConnectionStatus) {
        self.connection = status;
    }
}
