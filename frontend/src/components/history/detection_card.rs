use leafscan::history::display_local_time;
use leafscan_shared::DetectionRecord;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::components::icons::{AlertTriangle, CheckCircle, Clock, Trash};
use crate::i18n::use_i18n;

/// 浏览器在给定时刻的时区偏移（分钟，UTC 减本地）
fn minutes_west_at(ms: i64) -> i32 {
    js_sys::Date::new(&JsValue::from_f64(ms as f64)).get_timezone_offset() as i32
}

#[component]
pub fn DetectionCard(
    record: DetectionRecord,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let i18n = use_i18n();
    let id = record.id.clone();
    let created = display_local_time(&record.created_at, minutes_west_at);

    view! {
        <div class="card bg-base-100 shadow-xl">
            <figure class="h-48 bg-base-200">
                <img src=record.image_url alt=record.disease_name.clone() class="h-full w-full object-cover" />
            </figure>
            <div class="card-body gap-3">
                <div class="flex items-start justify-between gap-2">
                    <h2 class="card-title">{record.disease_name}</h2>
                    {if record.is_healthy {
                        view! {
                            <span class="badge badge-success gap-1">
                                <CheckCircle attr:class="h-3 w-3" />
                                {move || i18n.t("healthy")}
                            </span>
                        }
                            .into_any()
                    } else {
                        view! {
                            <span class="badge badge-error gap-1">
                                <AlertTriangle attr:class="h-3 w-3" />
                                {move || i18n.t("disease_detected")}
                            </span>
                        }
                            .into_any()
                    }}
                </div>
                <p class="text-sm">
                    <span class="text-base-content/60">{move || i18n.t("confidence")} ": "</span>
                    <span class="font-semibold">{format!("{:.1}%", record.confidence)}</span>
                </p>
                <div class="text-sm">
                    <p class="text-base-content/60">{move || i18n.t("remedy")}</p>
                    <p class="line-clamp-3">{record.remedy}</p>
                </div>
                <div class="card-actions items-center justify-between mt-2">
                    <span class="flex items-center gap-1 text-xs text-base-content/60">
                        <Clock attr:class="h-3 w-3" />
                        {created}
                    </span>
                    <button
                        class="btn btn-ghost btn-sm text-error gap-1"
                        on:click=move |_| on_delete.run(id.clone())
                    >
                        <Trash attr:class="h-4 w-4" />
                        {move || i18n.t("delete")}
                    </button>
                </div>
            </div>
        </div>
    }
}
