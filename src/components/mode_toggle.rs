use leptos::prelude::*;

use crate::app::UiContext;
use crate::state::UiMode;

#[component]
pub fn ModeToggle() -> impl IntoView {
    let ctx = expect_context::<UiContext>();

    view! {
        <nav class="mode-toggle">
            {UiMode::ALL.iter().map(|&mode| {
                view! {
                    <button
                        class="nav-btn"
                        class:active=move || ctx.state.with(|s| s.mode == mode)
                        on:click=move |_| ctx.state.update(|s| {
                            s.set_mode(mode);
                        })
                    >
                        {mode.label()}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </nav>
    }
}
