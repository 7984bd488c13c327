//! The editor page: prompt sidebar, preview/code surface, error overlay.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use leptos::prelude::*;

use template::{Document, Theme, compose_document, split_document};

use crate::components::code_view::CodeView;
use crate::components::header::Header;
use crate::components::preview_window::PreviewWindow;
use crate::components::prompt_controls::{DEFAULT_PROMPT, PromptControls};
use crate::state::ui::ViewMode;
use crate::util::{storage, theme as theme_util};

/// A generation may start only when none is outstanding and the prompt has
/// content. A second trigger while a request is pending is a no-op.
fn can_submit(busy: bool, prompt: &str) -> bool {
    !busy && !prompt.trim().is_empty()
}

#[component]
pub fn EditorPage() -> impl IntoView {
    let prompt = RwSignal::new(DEFAULT_PROMPT.to_owned());
    let html = RwSignal::new(String::new());
    let css = RwSignal::new(String::new());
    let js = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let view_mode = RwSignal::new(ViewMode::Preview);
    let theme = RwSignal::new(Theme::default());

    // Restore the snapshot (or split the welcome page) once, client-side.
    Effect::new(move || {
        let doc = storage::load_document()
            .filter(|stored| !stored.html.is_empty())
            .unwrap_or_else(|| split_document(template::WELCOME_TEMPLATE));
        html.set(doc.html);
        css.set(doc.css);
        js.set(doc.js);
        theme.set(storage::load_theme().unwrap_or_default());
    });

    // Persist the snapshot on every buffer change. Skips the pre-restore
    // empty state so a reload never clobbers a stored template.
    Effect::new(move || {
        let doc = Document { html: html.get(), css: css.get(), js: js.get() };
        if doc.is_empty() {
            return;
        }
        storage::save_document(&doc);
    });

    // Apply + persist the theme whenever it changes.
    Effect::new(move || {
        let current = theme.get();
        theme_util::apply(current);
        storage::save_theme(current);
    });

    let composed = Memo::new(move |_| {
        compose_document(&Document { html: html.get(), css: css.get(), js: js.get() })
    });

    let on_generate = Callback::new(move |()| {
        let description = prompt.get_untracked().trim().to_owned();
        if !can_submit(busy.get_untracked(), &description) {
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate(&description).await {
                Ok(full_html) => {
                    let doc = split_document(&full_html);
                    html.set(doc.html);
                    css.set(doc.css);
                    js.set(doc.js);
                    view_mode.set(ViewMode::Preview);
                }
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = description;
            busy.set(false);
        }
    });

    view! {
        <div class="editor-page">
            <aside class="editor-page__sidebar">
                <Header/>
                <PromptControls prompt=prompt busy=busy on_generate=on_generate/>
            </aside>

            <main class="editor-page__main">
                <div class="editor-page__mode-bar">
                    <button
                        class="editor-page__mode"
                        class:editor-page__mode--active=move || view_mode.get() == ViewMode::Preview
                        on:click=move |_| view_mode.set(ViewMode::Preview)
                    >
                        "Preview"
                    </button>
                    <button
                        class="editor-page__mode"
                        class:editor-page__mode--active=move || view_mode.get() == ViewMode::Code
                        on:click=move |_| view_mode.set(ViewMode::Code)
                    >
                        "Code"
                    </button>
                </div>

                <div class="editor-page__surface">
                    <Show when=move || error.get().is_some()>
                        <div class="editor-page__error-overlay">
                            <div class="editor-page__error-card">
                                <h3>"Error Generating Template"</h3>
                                <p>{move || error.get().unwrap_or_default()}</p>
                                <button on:click=move |_| error.set(None)>"Close"</button>
                            </div>
                        </div>
                    </Show>

                    {move || match view_mode.get() {
                        ViewMode::Preview => view! { <PreviewWindow srcdoc=composed/> }.into_any(),
                        ViewMode::Code => {
                            view! { <CodeView html=html css=css js=js theme=theme/> }.into_any()
                        }
                    }}
                </div>
            </main>
        </div>
    }
}
