//! 识别面板
//!
//! 一次只处理一张图片：选中即提交，流程在途时禁用文件选择。

mod result_card;
mod upload_card;

use std::rc::Rc;

use leafscan::ErrorKind;
use leafscan::workflow::{DetectionWorkflow, PendingUpload};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{LeafScanApi, use_api};
use crate::auth::use_auth;
use crate::components::icons::Sparkles;
use crate::components::toast::use_toast;
use crate::i18n::use_i18n;
use crate::web::BrowserFile;

use result_card::ResultCard;
use upload_card::UploadCard;

type Workflow = DetectionWorkflow<LeafScanApi, LeafScanApi, LeafScanApi>;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let i18n = use_i18n();
    let auth = use_auth();
    let toast = use_toast();

    let client = use_api().client();
    let max_bytes = client.config().max_upload_bytes;
    let workflow = StoredValue::<Rc<Workflow>, LocalStorage>::new_local(Rc::new(
        DetectionWorkflow::new(client.clone(), client.clone(), client, max_bytes),
    ));
    let pending = RwSignal::new(PendingUpload::default());

    let on_select = move |file: BrowserFile| {
        let workflow = workflow.get_value();
        if workflow.is_busy() {
            return;
        }
        pending.update(PendingUpload::reset);
        // 用户 ID 取提交时刻的会话镜像
        let user_id = auth.user_id();

        spawn_local(async move {
            let outcome = workflow
                .submit(user_id.as_deref(), &file, |event| {
                    pending.update(|p| p.apply(event))
                })
                .await;

            if matches!(&outcome, Err(e) if e.kind == ErrorKind::Busy) {
                return;
            }
            pending.update(|p| p.finish(&outcome));
            match &outcome {
                Ok(_) => toast.success(i18n.t_untracked("analysis_success")),
                Err(e) => toast.error(e.message().to_string()),
            }
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-6xl mx-auto space-y-8">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <div class="flex items-center gap-3">
                            <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                                <Sparkles attr:class="h-6 w-6" />
                            </div>
                            <div>
                                <h1 class="text-2xl md:text-3xl font-bold">
                                    {move || i18n.t("welcome")}
                                </h1>
                                <p class="text-base-content/70">{move || i18n.t("welcome_desc")}</p>
                            </div>
                        </div>
                        {move || {
                            auth.user_email()
                                .map(|email| {
                                    view! {
                                        <span class="badge badge-neutral mt-2">{email}</span>
                                    }
                                })
                        }}
                    </div>
                </div>

                <div class="grid lg:grid-cols-2 gap-8">
                    <UploadCard pending=pending on_select=on_select />
                    <ResultCard pending=pending />
                </div>
            </div>
        </div>
    }
}
