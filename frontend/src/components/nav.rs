use leafscan::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::{logout, use_auth};
use crate::components::icons::{History, Leaf, LogOut, Sparkles};
use crate::components::language_switcher::LanguageSwitcher;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::toast::use_toast;
use crate::i18n::use_i18n;
use crate::web::router::{Link, use_router};

/// 顶部导航栏，按会话状态切换右侧按钮
#[component]
pub fn Navbar() -> impl IntoView {
    let i18n = use_i18n();
    let auth = use_auth();
    let api = use_api();
    let toast = use_toast();
    let router = use_router();

    let on_logout = move |_| {
        let api = api.client();
        spawn_local(async move {
            logout(&api).await;
            toast.success(i18n.t_untracked("logged_out"));
            router.navigate_to(AppRoute::Landing);
        });
    };

    view! {
        <div class="navbar bg-base-100 shadow-sm sticky top-0 z-40 px-4">
            <div class="flex-1">
                <Link to=AppRoute::Landing class="btn btn-ghost gap-2">
                    <Leaf attr:class="h-6 w-6 text-primary" />
                    <span class="flex flex-col items-start leading-tight">
                        <span class="text-xl font-bold">{move || i18n.t("app_name")}</span>
                        <span class="text-xs font-normal text-base-content/60 hidden sm:inline">
                            {move || i18n.t("app_tagline")}
                        </span>
                    </span>
                </Link>
            </div>
            <div class="flex-none flex items-center gap-2">
                <Link to=AppRoute::About class="btn btn-ghost btn-sm hidden md:inline-flex">
                    {move || i18n.t("about")}
                </Link>
                <Link to=AppRoute::Contact class="btn btn-ghost btn-sm hidden md:inline-flex">
                    {move || i18n.t("contact")}
                </Link>
                <LanguageSwitcher />
                <ThemeToggle />
                <Show
                    when=move || auth.is_authenticated()
                    fallback=move || {
                        view! {
                            <Link to=AppRoute::Auth class="btn btn-primary btn-sm">
                                {move || i18n.t("sign_in")}
                            </Link>
                        }
                    }
                >
                    <Link to=AppRoute::Dashboard class="btn btn-ghost btn-sm gap-1">
                        <Sparkles attr:class="h-4 w-4" />
                        {move || i18n.t("dashboard")}
                    </Link>
                    <Link to=AppRoute::History class="btn btn-ghost btn-sm gap-1">
                        <History attr:class="h-4 w-4" />
                        {move || i18n.t("history")}
                    </Link>
                    <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-1">
                        <LogOut attr:class="h-4 w-4" />
                        {move || i18n.t("logout")}
                    </button>
                </Show>
            </div>
        </div>
    }
}
