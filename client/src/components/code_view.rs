//! Source editor: tabbed HTML/CSS/JS buffers with copy, export, and theme
//! selection.

use leptos::prelude::*;

use template::{Document, Theme, export};

use crate::state::ui::EditorTab;
use crate::util::{clipboard, download};

/// How long the "Copied!"/"Exported!" badges stay up.
#[cfg(feature = "hydrate")]
const BADGE_MS: u32 = 2000;

#[component]
pub fn CodeView(
    html: RwSignal<String>,
    css: RwSignal<String>,
    js: RwSignal<String>,
    theme: RwSignal<Theme>,
) -> impl IntoView {
    let active_tab = RwSignal::new(EditorTab::Html);
    let copied = RwSignal::new(false);
    let exported = RwSignal::new(false);

    let buffer_for = move |tab: EditorTab| match tab {
        EditorTab::Html => html,
        EditorTab::Css => css,
        EditorTab::Js => js,
    };

    let on_copy = move |_| {
        let contents = match active_tab.get() {
            EditorTab::Html => export::html_with_doctype(&html.get()),
            EditorTab::Css => css.get(),
            EditorTab::Js => js.get(),
        };
        if contents.is_empty() {
            return;
        }
        clipboard::copy_text(&contents);
        copied.set(true);
        #[cfg(feature = "hydrate")]
        gloo_timers::callback::Timeout::new(BADGE_MS, move || copied.set(false)).forget();
    };

    let on_export = move |_| {
        let doc = Document { html: html.get(), css: css.get(), js: js.get() };
        for file in export::plan_export(&doc) {
            download::save_file(file.filename, &file.contents, file.mime);
        }
        exported.set(true);
        #[cfg(feature = "hydrate")]
        gloo_timers::callback::Timeout::new(BADGE_MS, move || exported.set(false)).forget();
    };

    view! {
        <div class="code-view">
            <div class="code-view__toolbar">
                <div class="code-view__tabs">
                    {EditorTab::ALL
                        .iter()
                        .map(|&tab| {
                            view! {
                                <button
                                    class="code-view__tab"
                                    class:code-view__tab--active=move || active_tab.get() == tab
                                    on:click=move |_| active_tab.set(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="code-view__actions">
                    <select
                        class="code-view__theme"
                        aria-label="Select code editor theme"
                        prop:value=move || theme.get().as_str()
                        on:change=move |ev| {
                            if let Some(next) = Theme::from_name(&event_target_value(&ev)) {
                                theme.set(next);
                            }
                        }
                    >
                        {Theme::ALL
                            .iter()
                            .map(|&choice| {
                                view! { <option value=choice.as_str()>{choice.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                    <span class="code-view__action">
                        <Show when=move || exported.get()>
                            <span class="code-view__badge">"Exported!"</span>
                        </Show>
                        <button class="code-view__button" aria-label="Export files" on:click=on_export>
                            "Export"
                        </button>
                    </span>
                    <span class="code-view__action">
                        <Show when=move || copied.get()>
                            <span class="code-view__badge">"Copied!"</span>
                        </Show>
                        <button class="code-view__button" aria-label="Copy code" on:click=on_copy>
                            "Copy"
                        </button>
                    </span>
                </div>
            </div>
            <textarea
                class="code-view__editor"
                spellcheck="false"
                aria-label=move || format!("{} code editor", active_tab.get().label())
                prop:value=move || buffer_for(active_tab.get()).get()
                on:input=move |ev| buffer_for(active_tab.get()).set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
