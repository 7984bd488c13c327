//! Prompt panel: description input, generate trigger, example prompts.

use leptos::prelude::*;

/// Starter prompt shown on first launch.
pub const DEFAULT_PROMPT: &str =
    "A modern landing page for a new SaaS product called \"InnovateAI\", focusing on features and pricing.";

/// Example descriptions that fill the prompt input when clicked.
pub const EXAMPLE_PROMPTS: [&str; 4] = [
    "A personal portfolio for a graphic designer, featuring a gallery and contact form.",
    "A recipe blog with a clean, minimalist design and featured recipes on the homepage.",
    "An e-commerce storefront for a business that sells handmade pottery.",
    "A landing page for a mobile app called \"FitTrack\", highlighting key features.",
];

#[component]
pub fn PromptControls(
    prompt: RwSignal<String>,
    busy: RwSignal<bool>,
    on_generate: Callback<()>,
) -> impl IntoView {
    let generate_disabled = move || busy.get() || prompt.get().trim().is_empty();

    view! {
        <div class="prompt-controls">
            <label class="prompt-controls__label" for="prompt">"Website Description"</label>
            <textarea
                id="prompt"
                class="prompt-controls__input"
                rows="10"
                placeholder="e.g., A portfolio website for a photographer with a minimalist dark theme and a gallery section..."
                prop:value=move || prompt.get()
                on:input=move |ev| prompt.set(event_target_value(&ev))
            ></textarea>
            <button
                class="prompt-controls__generate"
                disabled=generate_disabled
                on:click=move |_| on_generate.run(())
            >
                {move || {
                    if busy.get() {
                        view! {
                            <span class="prompt-controls__busy">
                                <span class="prompt-controls__spinner" aria-hidden="true"></span>
                                "Generating..."
                            </span>
                        }
                            .into_any()
                    } else {
                        view! { <span>"Generate Website"</span> }.into_any()
                    }
                }}
            </button>

            <div class="prompt-controls__examples">
                <h3 class="prompt-controls__examples-title">"Or try an example:"</h3>
                {EXAMPLE_PROMPTS
                    .iter()
                    .map(|example| {
                        view! {
                            <button
                                class="prompt-controls__example"
                                on:click=move |_| prompt.set((*example).to_owned())
                            >
                                {*example}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
