//! Sidebar masthead.

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <div class="header">
            <h1 class="header__title">"Sitesmith"</h1>
            <p class="header__tagline">
                "Describe your ideal website, and let AI bring it to life with Tailwind CSS."
            </p>
        </div>
    }
}
