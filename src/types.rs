use serde::{Deserialize, Serialize};

// -- Request bodies --

#[derive(Debug, Serialize)]
pub struct DetectTextArgs<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct DetectImageArgs<'a> {
    pub image: &'a str,
}

// -- Detection result matching backend response --

/// Verdict returned by both detection endpoints.
///
/// Only `is_ai_generated` and `confidence_score` are guaranteed. The
/// probability breakdown and explanation are shown when the server sends them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DetectionResult {
    pub is_ai_generated: bool,
    pub confidence_score: f64,
    #[serde(default)]
    pub ai_probability: Option<f64>,
    #[serde(default)]
    pub human_probability: Option<f64>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl DetectionResult {
    pub fn new(is_ai_generated: bool, confidence_score: f64) -> Self {
        Self {
            is_ai_generated,
            confidence_score,
            ai_probability: None,
            human_probability: None,
            explanation: None,
        }
    }
}

/// Which kind of content a result refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionKind {
    Text,
    Image,
}

impl DetectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DetectionKind::Text => "text",
            DetectionKind::Image => "image",
        }
    }
}

/// Payload of the `detection_update` push event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PushEvent {
    pub result: DetectionResult,
    #[serde(rename = "type")]
    pub kind: DetectionKind,
}

pub const DEFAULT_ACCURACY_RATE: &str = "92%";

/// Server-wide counters shown in the stats tiles.
///
/// Loaded from `GET /api/stats` where the server exposes it; otherwise the
/// tiles start from [`StatsSnapshot::default`], the detector's startup values.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatsSnapshot {
    pub total_detections: u64,
    pub ai_detected: u64,
    pub human_detected: u64,
    pub accuracy_rate: String,
}

impl Default for StatsSnapshot {
    fn default() -> Self {
        Self {
            total_detections: 0,
            ai_detected: 0,
            human_detected: 0,
            accuracy_rate: DEFAULT_ACCURACY_RATE.to_string(),
        }
    }
}

impl StatsSnapshot {
    /// Bump `slot`, starting from zero totals if nothing was loaded.
    pub fn bump_or_start(slot: &mut Option<Self>, result: &DetectionResult) {
        slot.get_or_insert_with(Self::default).bump(result);
    }

    /// Count one more local analysis into the displayed totals.
    pub fn bump(&mut self, result: &DetectionResult) {
        self.total_detections += 1;
        if result.is_ai_generated {
            self.ai_detected += 1;
        } else {
            self.human_detected += 1;
        }
    }
}
