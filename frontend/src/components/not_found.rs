use leafscan::AppRoute;
use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::web::router::Link;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">{move || i18n.t("page_not_found")}</p>
                <Link to=AppRoute::Landing class="btn btn-primary mt-6">
                    {move || i18n.t("back_home")}
                </Link>
            </div>
        </div>
    }
}
