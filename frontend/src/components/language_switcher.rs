use leafscan::Language;
use leptos::prelude::*;

use crate::components::icons::Globe;
use crate::i18n::use_i18n;

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let i18n = use_i18n();

    let on_change = move |ev| match Language::parse(&event_target_value(&ev)) {
        Some(language) => i18n.set_language(language),
        None => tracing::warn!("unknown language selected"),
    };

    view! {
        <label class="flex items-center gap-1">
            <Globe attr:class="h-4 w-4 text-base-content/70" />
            <select
                class="select select-sm select-ghost"
                on:change=on_change
                prop:value=move || i18n.language().code()
            >
                {Language::ALL
                    .into_iter()
                    .map(|language| {
                        view! { <option value=language.code()>{language.native_name()}</option> }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
