use leptos::prelude::*;

use crate::format::ResultView;

/// Verdict card for the latest submission.
#[component]
pub fn ResultCard(result: ResultView) -> impl IntoView {
    let tone = result.tone;

    view! {
        <div class=format!("result-card {}", tone.class())>
            <div class="result-header">
                <span class="result-icon">{tone.icon()}</span>
                <div>
                    <div class="result-label">{result.label}</div>
                    <div class="result-confidence">{result.confidence}</div>
                </div>
            </div>

            {(result.ai_probability.is_some() || result.human_probability.is_some()).then(|| view! {
                <div class="probability-grid">
                    {result.ai_probability.map(|p| view! {
                        <div class="probability probability-ai">
                            <h4>"AI Probability"</h4>
                            <div class="probability-value">{p}</div>
                        </div>
                    })}
                    {result.human_probability.map(|p| view! {
                        <div class="probability probability-human">
                            <h4>"Human Probability"</h4>
                            <div class="probability-value">{p}</div>
                        </div>
                    })}
                </div>
            })}

            {result.explanation.map(|text| view! {
                <div class="result-explanation">
                    <h4>"Analysis"</h4>
                    <p>{text}</p>
                </div>
            })}
        </div>
    }
}
