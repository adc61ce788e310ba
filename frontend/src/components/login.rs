use leafscan::AppRoute;
use leafscan::onboarding::{AuthForm, AuthMode, AuthOutcome, submit_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::icons::{AlertTriangle, ArrowLeft, Leaf};
use crate::components::toast::use_toast;
use crate::i18n::use_i18n;
use crate::web::router::{Link, absolute_url, use_router};

/// 登录 / 注册页
///
/// 已登录用户进入本页时由路由守卫直接送往识别面板。
#[component]
pub fn LoginPage() -> impl IntoView {
    let i18n = use_i18n();
    let api = use_api();
    let toast = use_toast();
    let router = use_router();

    let form = RwSignal::new(AuthForm::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let is_sign_up = move || form.with(|f| f.mode == AuthMode::SignUp);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let snapshot = form.get_untracked();
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.client();
        spawn_local(async move {
            let redirect_to = absolute_url(AppRoute::Auth);
            match submit_auth(&api, &api, &snapshot, redirect_to.as_deref()).await {
                Ok(outcome) => {
                    form.update(|f| f.mode = f.mode.after(&outcome));
                    match outcome {
                        AuthOutcome::SignedUp { .. } => {
                            toast.success(i18n.t_untracked("signed_up"));
                        }
                        AuthOutcome::SignedIn(_) => {
                            toast.success(i18n.t_untracked("signed_in"));
                            router.navigate_to(AppRoute::Dashboard);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "authentication failed");
                    let message = if e.message().is_empty() {
                        i18n.t_untracked("auth_failed").to_string()
                    } else {
                        e.message().to_string()
                    };
                    toast.error(message.clone());
                    set_error_msg.set(Some(message));
                }
            }
            set_is_submitting.set(false);
        });
    };

    let on_toggle = move |_| {
        form.update(|f| f.mode = f.mode.toggle());
        set_error_msg.set(None);
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="self-start">
                    <Link to=AppRoute::Landing class="btn btn-ghost btn-sm gap-2">
                        <ArrowLeft attr:class="h-4 w-4" />
                        {move || i18n.t("back_home")}
                    </Link>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="flex flex-col items-center gap-2 text-center mb-2">
                            <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                                <Leaf attr:class="h-8 w-8" />
                            </div>
                            <h1 class="text-3xl font-bold">
                                {move || {
                                    if is_sign_up() {
                                        i18n.t("auth_join_title")
                                    } else {
                                        i18n.t("auth_welcome_back")
                                    }
                                }}
                            </h1>
                            <p class="text-base-content/70">
                                {move || {
                                    if is_sign_up() {
                                        i18n.t("auth_sign_up_desc")
                                    } else {
                                        i18n.t("auth_sign_in_desc")
                                    }
                                }}
                            </p>
                        </div>

                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <AlertTriangle attr:class="h-5 w-5" />
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <Show when=is_sign_up>
                            <div class="form-control">
                                <label class="label" for="name">
                                    <span class="label-text">{move || i18n.t("full_name")}</span>
                                </label>
                                <input
                                    id="name"
                                    type="text"
                                    placeholder=move || i18n.t("full_name_placeholder")
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.name = value);
                                    }
                                    prop:value=move || form.with(|f| f.name.clone())
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">{move || i18n.t("email_address")}</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.email = value);
                                }
                                prop:value=move || form.with(|f| f.email.clone())
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">{move || i18n.t("password")}</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder=move || i18n.t("password_placeholder")
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.password = value);
                                }
                                prop:value=move || form.with(|f| f.password.clone())
                                class="input input-bordered"
                                required
                            />
                        </div>

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || {
                                    if is_submitting.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            {i18n.t("please_wait")}
                                        }
                                            .into_any()
                                    } else if is_sign_up() {
                                        i18n.t("create_account").into_any()
                                    } else {
                                        i18n.t("sign_in").into_any()
                                    }
                                }}
                            </button>
                        </div>

                        <div class="divider text-sm">{move || i18n.t("or")}</div>
                        <button type="button" class="btn btn-link" on:click=on_toggle>
                            {move || {
                                if is_sign_up() { i18n.t("have_account") } else { i18n.t("no_account") }
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
