//! 联系页
//!
//! 没有真正的发送接口：校验通过后等待片刻，提示成功并清空表单。

use gloo_timers::future::sleep;
use leafscan::AppRoute;
use leafscan::contact::{CONTACT_SEND_DELAY, ContactForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::icons::{ArrowLeft, Clock, Mail, Phone, PaperPlane};
use crate::components::toast::use_toast;
use crate::i18n::use_i18n;
use crate::web::router::Link;

const SUPPORT_EMAIL: &str = "support@aicdd.app";
const SUPPORT_PHONE: &str = "+1 (555) 123-4567";

#[component]
pub fn ContactPage() -> impl IntoView {
    let i18n = use_i18n();
    let toast = use_toast();

    let form = RwSignal::new(ContactForm::default());
    let (sending, set_sending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        if let Err(e) = form.with_untracked(ContactForm::validate) {
            tracing::debug!(error = %e, "contact form rejected");
            toast.error(i18n.t_untracked("contact_invalid"));
            return;
        }

        set_sending.set(true);
        spawn_local(async move {
            sleep(CONTACT_SEND_DELAY).await;
            form.update(ContactForm::reset);
            set_sending.set(false);
            toast.success(i18n.t_untracked("contact_thanks"));
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-8">
                <Link to=AppRoute::Landing class="btn btn-ghost btn-sm gap-2">
                    <ArrowLeft attr:class="h-4 w-4" />
                    {move || i18n.t("back_home")}
                </Link>

                <div class="text-center">
                    <div class="inline-flex p-3 bg-primary/10 rounded-2xl text-primary mb-4">
                        <Mail attr:class="h-10 w-10" />
                    </div>
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">{move || i18n.t("get_in_touch")}</h1>
                    <p class="text-xl text-base-content/70">{move || i18n.t("contact_desc")}</p>
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    <div class="card bg-base-100 shadow-xl">
                        <form class="card-body" on:submit=on_submit>
                            <h2 class="card-title">{move || i18n.t("send_us_message")}</h2>
                            <div class="form-control">
                                <label class="label" for="contact-name">
                                    <span class="label-text">{move || i18n.t("your_name")}</span>
                                </label>
                                <input
                                    id="contact-name"
                                    type="text"
                                    class="input input-bordered"
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.name = value);
                                    }
                                    prop:value=move || form.with(|f| f.name.clone())
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="contact-email">
                                    <span class="label-text">{move || i18n.t("email")}</span>
                                </label>
                                <input
                                    id="contact-email"
                                    type="email"
                                    placeholder="you@example.com"
                                    class="input input-bordered"
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.email = value);
                                    }
                                    prop:value=move || form.with(|f| f.email.clone())
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="contact-message">
                                    <span class="label-text">{move || i18n.t("message")}</span>
                                </label>
                                <textarea
                                    id="contact-message"
                                    rows="6"
                                    class="textarea textarea-bordered"
                                    placeholder=move || i18n.t("message_placeholder")
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.message = value);
                                    }
                                    prop:value=move || form.with(|f| f.message.clone())
                                    required
                                ></textarea>
                            </div>
                            <div class="form-control mt-4">
                                <button class="btn btn-primary gap-2" disabled=move || sending.get()>
                                    {move || {
                                        if sending.get() {
                                            view! {
                                                <span class="loading loading-spinner"></span>
                                                {i18n.t("sending")}
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <PaperPlane attr:class="h-4 w-4" />
                                                {i18n.t("send_message")}
                                            }
                                                .into_any()
                                        }
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>

                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body gap-6">
                            <h2 class="card-title">{move || i18n.t("contact_info")}</h2>
                            <div class="flex items-start gap-4">
                                <Mail attr:class="h-6 w-6 text-primary shrink-0" />
                                <div>
                                    <p class="font-semibold">{move || i18n.t("email")}</p>
                                    <a href=format!("mailto:{}", SUPPORT_EMAIL) class="link link-primary">
                                        {SUPPORT_EMAIL}
                                    </a>
                                </div>
                            </div>
                            <div class="flex items-start gap-4">
                                <Phone attr:class="h-6 w-6 text-primary shrink-0" />
                                <div>
                                    <p class="font-semibold">{move || i18n.t("phone")}</p>
                                    <p>{SUPPORT_PHONE}</p>
                                </div>
                            </div>
                            <div class="flex items-start gap-4">
                                <Clock attr:class="h-6 w-6 text-primary shrink-0" />
                                <div>
                                    <p class="font-semibold">{move || i18n.t("office_hours")}</p>
                                    <p>{move || i18n.t("office_hours_value")}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
