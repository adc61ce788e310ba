use leafscan_shared::ClassificationResult;
use leptos::prelude::*;
use leafscan::workflow::PendingUpload;

use crate::components::icons::{AlertTriangle, CheckCircle, Leaf, Shield};
use crate::i18n::use_i18n;

/// 识别结果；没有结果时显示占位说明
#[component]
pub fn ResultCard(pending: RwSignal<PendingUpload>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title gap-2">
                    <Leaf attr:class="h-5 w-5 text-primary" />
                    {move || i18n.t("detection_results")}
                </h2>
                {move || match pending.with(|p| p.result.clone()) {
                    Some(result) => view! { <ResultDetails result=result /> }.into_any(),
                    None => {
                        view! {
                            <div class="flex flex-col items-center justify-center h-80 text-center text-base-content/60 gap-3">
                                <Leaf attr:class="h-16 w-16 opacity-30" />
                                <p>{move || i18n.t("detect_instantly")}</p>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn ResultDetails(result: ClassificationResult) -> impl IntoView {
    let i18n = use_i18n();
    let is_healthy = result.is_healthy;
    let confidence = result.confidence.clamp(0.0, 100.0);

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <span class="font-semibold">{move || i18n.t("status")}</span>
                {if is_healthy {
                    view! {
                        <span class="badge badge-success gap-1 p-3">
                            <CheckCircle attr:class="h-4 w-4" />
                            {move || i18n.t("healthy")}
                        </span>
                    }
                        .into_any()
                } else {
                    view! {
                        <span class="badge badge-error gap-1 p-3">
                            <AlertTriangle attr:class="h-4 w-4" />
                            {move || i18n.t("disease_detected")}
                        </span>
                    }
                        .into_any()
                }}
            </div>

            <div>
                <p class="text-sm text-base-content/60">{move || i18n.t("disease_type")}</p>
                <p class="text-2xl font-bold">{result.disease_name}</p>
            </div>

            <div>
                <div class="flex justify-between text-sm mb-1">
                    <span class="text-base-content/60">{move || i18n.t("confidence_level")}</span>
                    <span class="font-semibold">{format!("{:.1}%", confidence)}</span>
                </div>
                <progress class="progress progress-primary w-full" value=confidence.to_string() max="100"></progress>
            </div>

            <div class="alert bg-base-200 items-start">
                <Shield attr:class="h-5 w-5 text-primary shrink-0 mt-1" />
                <div>
                    <h3 class="font-semibold">{move || i18n.t("recommended_treatment")}</h3>
                    <p class="text-sm text-base-content/80 whitespace-pre-line">{result.remedy}</p>
                </div>
            </div>
        </div>
    }
}
