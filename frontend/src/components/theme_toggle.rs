use leafscan::theme::Theme;
use leptos::prelude::*;

use crate::components::icons::{Moon, Sun};
use crate::i18n::use_i18n;
use crate::theme::use_theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let i18n = use_i18n();
    let theme = use_theme();

    view! {
        <button
            class="btn btn-ghost btn-sm btn-circle"
            on:click=move |_| theme.toggle()
            title=move || i18n.t("toggle_theme")
            aria-label=move || i18n.t("toggle_theme")
        >
            <Show
                when=move || theme.theme() == Theme::Dark
                fallback=|| view! { <Moon attr:class="h-5 w-5" /> }
            >
                <Sun attr:class="h-5 w-5" />
            </Show>
        </button>
    }
}
