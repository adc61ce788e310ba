use leafscan::AppRoute;
use leptos::prelude::*;

use crate::components::icons::{Camera, Cpu, Leaf, Shield, Sparkles, TrendingUp, Upload, Zap};
use crate::i18n::use_i18n;
use crate::web::router::Link;

#[component]
pub fn LandingPage() -> impl IntoView {
    let i18n = use_i18n();

    let stats = [
        ("95%", "accuracy"),
        ("<3s", "detection_time"),
        ("38+", "diseases"),
    ];

    view! {
        <div class="min-h-screen bg-base-200">
            // 首屏
            <section class="hero py-24">
                <div class="hero-content text-center">
                    <div class="max-w-4xl space-y-8">
                        <div class="badge badge-primary badge-outline gap-2 p-4">
                            <Sparkles attr:class="h-4 w-4" />
                            {move || i18n.t("app_tagline")}
                        </div>
                        <h1 class="text-5xl md:text-6xl font-bold leading-tight">
                            {move || i18n.t("hero_title")}
                            <br />
                            <span class="text-primary">{move || i18n.t("hero_subtitle")}</span>
                        </h1>
                        <p class="text-lg md:text-xl text-base-content/70 max-w-2xl mx-auto">
                            {move || i18n.t("hero_description")}
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center pt-4">
                            <Link to=AppRoute::Auth class="btn btn-primary btn-lg gap-2">
                                <Camera attr:class="h-5 w-5" />
                                {move || i18n.t("start_detection")}
                            </Link>
                            <Link to=AppRoute::About class="btn btn-outline btn-lg">
                                {move || i18n.t("learn_how")}
                            </Link>
                        </div>
                        <div class="stats stats-vertical sm:stats-horizontal shadow bg-base-100">
                            {stats
                                .into_iter()
                                .map(|(value, key)| {
                                    view! {
                                        <div class="stat place-items-center">
                                            <div class="stat-value text-primary">{value}</div>
                                            <div class="stat-desc">{move || i18n.t(key)}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </section>

            // 特性
            <section class="py-20 bg-base-100">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="text-center mb-12">
                        <h2 class="text-4xl font-bold mb-4">{move || i18n.t("why_choose")}</h2>
                        <p class="text-xl text-base-content/70">{move || i18n.t("advanced_tech")}</p>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                        <FeatureCard title="ai_powered" desc="ai_powered_desc">
                            <Cpu attr:class="h-10 w-10 text-primary" />
                        </FeatureCard>
                        <FeatureCard title="real_time" desc="real_time_desc">
                            <Zap attr:class="h-10 w-10 text-warning" />
                        </FeatureCard>
                        <FeatureCard title="high_accuracy" desc="high_accuracy_desc">
                            <TrendingUp attr:class="h-10 w-10 text-success" />
                        </FeatureCard>
                        <FeatureCard title="treatment" desc="treatment_desc">
                            <Shield attr:class="h-10 w-10 text-accent" />
                        </FeatureCard>
                    </div>
                </div>
            </section>

            // 使用步骤
            <section class="py-20">
                <div class="max-w-5xl mx-auto px-4">
                    <div class="text-center mb-12">
                        <h2 class="text-4xl font-bold mb-4">{move || i18n.t("how_it_works")}</h2>
                        <p class="text-xl text-base-content/70">{move || i18n.t("three_steps")}</p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-10">
                        <StepItem step=1 title="upload_leaf" desc="upload_desc">
                            <Upload attr:class="h-6 w-6 text-primary" />
                        </StepItem>
                        <StepItem step=2 title="ai_analysis" desc="ai_analysis_desc">
                            <Cpu attr:class="h-6 w-6 text-primary" />
                        </StepItem>
                        <StepItem step=3 title="get_results" desc="get_results_desc">
                            <Leaf attr:class="h-6 w-6 text-primary" />
                        </StepItem>
                    </div>
                </div>
            </section>

            // 行动号召
            <section class="py-20 bg-primary text-primary-content text-center">
                <h2 class="text-4xl font-bold mb-6">{move || i18n.t("start_today")}</h2>
                <p class="text-xl mb-8 opacity-90 max-w-2xl mx-auto">
                    {move || i18n.t("join_farmers")}
                </p>
                <Link to=AppRoute::Auth class="btn btn-secondary btn-lg">
                    {move || i18n.t("start_free")}
                </Link>
            </section>

            <footer class="footer footer-center p-10 bg-base-100 text-base-content gap-4">
                <div class="flex items-center gap-2">
                    <Leaf attr:class="h-6 w-6 text-primary" />
                    <span class="font-bold text-lg">{move || i18n.t("app_name")}</span>
                </div>
                <nav class="flex gap-6">
                    <Link to=AppRoute::About class="link link-hover">
                        {move || i18n.t("about")}
                    </Link>
                    <Link to=AppRoute::Contact class="link link-hover">
                        {move || i18n.t("contact")}
                    </Link>
                    <a href="#" class="link link-hover">{move || i18n.t("privacy")}</a>
                    <a href="#" class="link link-hover">{move || i18n.t("terms")}</a>
                </nav>
                <p class="text-base-content/60">
                    {move || format!("© 2024 {}. {}", i18n.t("app_name"), i18n.t("rights_reserved"))}
                </p>
            </footer>
        </div>
    }
}

#[component]
fn FeatureCard(title: &'static str, desc: &'static str, children: Children) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="card bg-base-200 shadow hover:shadow-xl transition-all">
            <div class="card-body items-center text-center">
                <div class="p-4 bg-base-100 rounded-2xl mb-2">{children()}</div>
                <h3 class="card-title">{move || i18n.t(title)}</h3>
                <p class="text-base-content/70">{move || i18n.t(desc)}</p>
            </div>
        </div>
    }
}

#[component]
fn StepItem(step: u8, title: &'static str, desc: &'static str, children: Children) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="text-center">
            <div class="relative mb-8">
                <div class="w-20 h-20 rounded-2xl bg-primary text-primary-content flex items-center justify-center text-3xl font-bold mx-auto shadow-lg">
                    {step}
                </div>
                <div class="absolute -bottom-3 left-1/2 -translate-x-1/2 p-2 bg-base-100 rounded-full shadow">
                    {children()}
                </div>
            </div>
            <h3 class="font-bold text-2xl mb-3">{move || i18n.t(title)}</h3>
            <p class="text-base-content/70 text-lg">{move || i18n.t(desc)}</p>
        </div>
    }
}
