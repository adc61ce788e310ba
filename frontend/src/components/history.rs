//! 识别历史
//!
//! 进入页面时按当前用户加载一次；删除成功后才从列表中移除。

mod detection_card;

use std::rc::Rc;

use leafscan::AppRoute;
use leafscan::history::HistoryManager;
use leafscan_shared::DetectionRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{LeafScanApi, use_api};
use crate::auth::use_auth;
use crate::components::icons::{ArrowLeft, Leaf, Upload};
use crate::components::toast::use_toast;
use crate::i18n::use_i18n;
use crate::web::router::Link;

use detection_card::DetectionCard;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let i18n = use_i18n();
    let auth = use_auth();
    let toast = use_toast();

    let manager = StoredValue::<Rc<HistoryManager<LeafScanApi>>, LocalStorage>::new_local(
        Rc::new(HistoryManager::new(use_api().client())),
    );
    let records = RwSignal::new(Vec::<DetectionRecord>::new());
    let (loading, set_loading) = signal(true);

    match auth.user_id() {
        Some(user_id) => spawn_local(async move {
            let manager = manager.get_value();
            if let Err(e) = manager.load(&user_id).await {
                tracing::error!(error = %e, "failed to load history");
                toast.error(i18n.t_untracked("history_load_failed"));
            }
            records.set(manager.records());
            set_loading.set(false);
        }),
        None => set_loading.set(false),
    }

    let on_delete = move |id: String| {
        let manager = manager.get_value();
        spawn_local(async move {
            match manager.delete(&id).await {
                Ok(()) => {
                    records.set(manager.records());
                    toast.success(i18n.t_untracked("detection_deleted"));
                }
                Err(e) => {
                    tracing::error!(error = %e, id = %id, "failed to delete detection");
                    toast.error(i18n.t_untracked("delete_failed"));
                }
            }
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-6xl mx-auto space-y-8">
                <div class="flex flex-col md:flex-row md:items-center justify-between gap-4">
                    <div>
                        <h1 class="text-3xl font-bold">{move || i18n.t("detection_history")}</h1>
                        <p class="text-base-content/70">{move || i18n.t("history_desc")}</p>
                    </div>
                    <Link to=AppRoute::Dashboard class="btn btn-outline gap-2">
                        <ArrowLeft attr:class="h-4 w-4" />
                        {move || i18n.t("back_dashboard")}
                    </Link>
                </div>

                {move || {
                    if loading.get() {
                        view! {
                            <div class="flex justify-center py-20">
                                <span class="loading loading-spinner loading-lg text-primary"></span>
                            </div>
                        }
                            .into_any()
                    } else if records.with(|r| r.is_empty()) {
                        view! {
                            <div class="card bg-base-100 shadow-xl">
                                <div class="card-body items-center text-center py-16 gap-4">
                                    <Leaf attr:class="h-16 w-16 text-base-content/30" />
                                    <p class="text-lg text-base-content/70">{move || i18n.t("no_history")}</p>
                                    <Link to=AppRoute::Dashboard class="btn btn-primary gap-2">
                                        <Upload attr:class="h-4 w-4" />
                                        {move || i18n.t("upload_first")}
                                    </Link>
                                </div>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                                <For
                                    each=move || records.get()
                                    key=|record| record.id.clone()
                                    children=move |record| {
                                        view! { <DetectionCard record=record on_delete=on_delete /> }
                                    }
                                />
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
