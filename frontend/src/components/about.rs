use leafscan::AppRoute;
use leptos::prelude::*;

use crate::components::icons::{ArrowLeft, Cloud, Cpu, Leaf, TrendingUp};
use crate::i18n::use_i18n;
use crate::web::router::Link;

#[component]
pub fn AboutPage() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-10">
                <Link to=AppRoute::Landing class="btn btn-ghost btn-sm gap-2">
                    <ArrowLeft attr:class="h-4 w-4" />
                    {move || i18n.t("back_home")}
                </Link>

                <div class="text-center">
                    <div class="inline-flex p-3 bg-primary/10 rounded-2xl text-primary mb-4">
                        <Leaf attr:class="h-10 w-10" />
                    </div>
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">{move || i18n.t("about_title")}</h1>
                    <p class="text-xl text-base-content/70">{move || i18n.t("about_intro")}</p>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title text-2xl">{move || i18n.t("our_mission")}</h2>
                        <p class="text-lg text-base-content/80 leading-relaxed">
                            {move || i18n.t("mission_text")}
                        </p>
                    </div>
                </div>

                <div>
                    <h2 class="text-3xl font-bold text-center mb-8">{move || i18n.t("our_technology")}</h2>
                    <div class="grid md:grid-cols-3 gap-6">
                        <TechCard title="deep_learning" desc="deep_learning_desc">
                            <Cpu attr:class="h-8 w-8 text-primary" />
                        </TechCard>
                        <TechCard title="cloud_infra" desc="cloud_infra_desc">
                            <Cloud attr:class="h-8 w-8 text-info" />
                        </TechCard>
                        <TechCard title="continuous_improvement" desc="continuous_improvement_desc">
                            <TrendingUp attr:class="h-8 w-8 text-success" />
                        </TechCard>
                    </div>
                </div>

                <div class="card bg-primary text-primary-content shadow-xl">
                    <div class="card-body items-center text-center">
                        <h2 class="card-title text-3xl">{move || i18n.t("ready_protect")}</h2>
                        <p class="text-lg opacity-90">{move || i18n.t("ready_protect_desc")}</p>
                        <div class="card-actions mt-4">
                            <Link to=AppRoute::Auth class="btn btn-secondary btn-lg">
                                {move || i18n.t("get_started")}
                            </Link>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TechCard(title: &'static str, desc: &'static str, children: Children) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="p-3 bg-base-200 rounded-xl w-fit">{children()}</div>
                <h3 class="card-title">{move || i18n.t(title)}</h3>
                <p class="text-base-content/70">{move || i18n.t(desc)}</p>
            </div>
        </div>
    }
}
