//! Pure formatting from detection results to display values.

use crate::state::RecentResultEntry;
use crate::types::{DetectionKind, DetectionResult};

/// Visual cue for a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Alert,
    Positive,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Alert => "tone-alert",
            Tone::Positive => "tone-positive",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tone::Alert => "\u{26A0}",
            Tone::Positive => "\u{2713}",
        }
    }
}

fn tone_for(result: &DetectionResult) -> Tone {
    if result.is_ai_generated {
        Tone::Alert
    } else {
        Tone::Positive
    }
}

/// Main result card contents.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub label: &'static str,
    pub tone: Tone,
    pub confidence: String,
    pub ai_probability: Option<String>,
    pub human_probability: Option<String>,
    pub explanation: Option<String>,
}

/// One row of the recent-results list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentView {
    pub label: &'static str,
    pub tone: Tone,
    pub meta: String,
    pub confidence: String,
}

/// `value` in [0,1] as a percentage with `decimals` places, without the sign.
///
/// Ties round away from zero. `{:.N}` alone would round them to even.
pub fn percent(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * 100.0 * scale).round() / scale;
    format!("{:.*}", decimals, rounded)
}

pub fn verdict_label(result: &DetectionResult, kind: DetectionKind) -> &'static str {
    match (kind, result.is_ai_generated) {
        (DetectionKind::Text, true) => "AI Generated Content Detected",
        (DetectionKind::Text, false) => "Human-Written Content",
        (DetectionKind::Image, true) => "AI Manipulation Detected",
        (DetectionKind::Image, false) => "Authentic Image",
    }
}

pub fn render_result(result: &DetectionResult, kind: DetectionKind) -> ResultView {
    ResultView {
        label: verdict_label(result, kind),
        tone: tone_for(result),
        confidence: format!("Confidence: {}%", percent(result.confidence_score, 1)),
        ai_probability: result.ai_probability.map(|p| format!("{}%", percent(p, 1))),
        human_probability: result.human_probability.map(|p| format!("{}%", percent(p, 1))),
        explanation: result.explanation.clone().filter(|e| !e.trim().is_empty()),
    }
}

/// Recent entries round to whole percent, unlike the main card.
pub fn render_recent(entry: &RecentResultEntry) -> RecentView {
    RecentView {
        label: if entry.result.is_ai_generated {
            "AI Detected"
        } else {
            "Human Content"
        },
        tone: tone_for(&entry.result),
        meta: format!("{} \u{2022} {}", entry.kind.as_str().to_uppercase(), entry.timestamp),
        confidence: format!("{}%", percent(entry.result.confidence_score, 0)),
    }
}

/// Live character and word counts for the text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub chars: usize,
    pub words: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            chars: text.chars().count(),
            words: text.split_whitespace().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_table() {
        let ai = DetectionResult::new(true, 0.9);
        let human = DetectionResult::new(false, 0.9);
        assert_eq!(verdict_label(&ai, DetectionKind::Text), "AI Generated Content Detected");
        assert_eq!(verdict_label(&human, DetectionKind::Text), "Human-Written Content");
        assert_eq!(verdict_label(&ai, DetectionKind::Image), "AI Manipulation Detected");
        assert_eq!(verdict_label(&human, DetectionKind::Image), "Authentic Image");
        assert_eq!(render_result(&ai, DetectionKind::Image).tone, Tone::Alert);
        assert_eq!(render_result(&human, DetectionKind::Text).tone, Tone::Positive);
    }

    #[test]
    fn test_confidence_one_decimal() {
        let view = render_result(&DetectionResult::new(false, 0.87), DetectionKind::Text);
        assert_eq!(view.confidence, "Confidence: 87.0%");

        let view = render_result(&DetectionResult::new(true, 0.9234), DetectionKind::Text);
        assert_eq!(view.confidence, "Confidence: 92.3%");

        assert_eq!(percent(0.0, 1), "0.0");
        assert_eq!(percent(1.0, 1), "100.0");
    }

    #[test]
    fn test_recent_whole_percent() {
        let entry = RecentResultEntry {
            result: DetectionResult::new(true, 0.876),
            kind: DetectionKind::Image,
            timestamp: "3:04:05 PM".to_string(),
        };
        let view = render_recent(&entry);
        assert_eq!(view.label, "AI Detected");
        assert_eq!(view.confidence, "88%");
        assert_eq!(view.meta, "IMAGE \u{2022} 3:04:05 PM");
        assert_eq!(view.tone, Tone::Alert);
    }

    #[test]
    fn test_ties_round_up() {
        let entry = RecentResultEntry {
            result: DetectionResult::new(false, 0.125),
            kind: DetectionKind::Text,
            timestamp: "9:00:00 AM".to_string(),
        };
        assert_eq!(render_recent(&entry).confidence, "13%");

        let view = render_result(&DetectionResult::new(true, 0.5625), DetectionKind::Text);
        assert_eq!(view.confidence, "Confidence: 56.3%");

        assert_eq!(percent(0.005, 0), "1");
        assert_eq!(percent(0.025, 0), "3");
    }

    #[test]
    fn test_optional_breakdown() {
        let mut result = DetectionResult::new(true, 0.74);
        result.ai_probability = Some(0.74);
        result.human_probability = Some(0.26);
        result.explanation = Some("Analysis shows AI-like patterns.".to_string());
        let view = render_result(&result, DetectionKind::Text);
        assert_eq!(view.ai_probability.as_deref(), Some("74.0%"));
        assert_eq!(view.human_probability.as_deref(), Some("26.0%"));
        assert_eq!(view.explanation.as_deref(), Some("Analysis shows AI-like patterns."));

        result.explanation = Some("   ".to_string());
        assert_eq!(render_result(&result, DetectionKind::Text).explanation, None);
    }

    #[test]
    fn test_word_counts() {
        assert_eq!(TextStats::of("  ").words, 0);
        assert_eq!(TextStats::of("").words, 0);
        assert_eq!(TextStats::of("a b  c").words, 3);
        assert_eq!(TextStats::of("line one\nline\ttwo").words, 4);
    }

    #[test]
    fn test_char_counts() {
        assert_eq!(TextStats::of("a b  c").chars, 6);
        assert_eq!(TextStats::of("  ").chars, 2);
        assert_eq!(TextStats::of("caf\u{e9}").chars, 4);
    }
}
