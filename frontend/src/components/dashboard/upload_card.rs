//! 上传卡片
//!
//! 展示预览图或上传提示；流程在途时显示当前阶段并禁用文件选择。

use leptos::prelude::*;
use leafscan::workflow::PendingUpload;
use web_sys::HtmlInputElement;

use crate::components::icons::{AlertTriangle, Camera, Upload};
use crate::i18n::use_i18n;
use crate::web::BrowserFile;

#[component]
pub fn UploadCard(
    pending: RwSignal<PendingUpload>,
    #[prop(into)] on_select: Callback<BrowserFile>,
) -> impl IntoView {
    let i18n = use_i18n();
    let is_busy = move || pending.with(|p| p.is_busy());

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let file = BrowserFile::from_input(&input);
        // 清空以便再次选择同一文件
        input.set_value("");
        if let Some(file) = file {
            on_select.run(file);
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title gap-2">
                    <Camera attr:class="h-5 w-5 text-primary" />
                    {move || i18n.t("upload_leaf_image")}
                </h2>
                <p class="text-sm text-base-content/70">{move || i18n.t("take_photo")}</p>

                <label
                    for="leaf-image"
                    class=move || {
                        if is_busy() {
                            "relative flex flex-col items-center justify-center h-80 border-2 border-dashed border-base-300 rounded-box overflow-hidden opacity-80 cursor-wait"
                        } else {
                            "relative flex flex-col items-center justify-center h-80 border-2 border-dashed border-base-300 rounded-box overflow-hidden cursor-pointer hover:border-primary transition-colors"
                        }
                    }
                >
                    {move || match pending.with(|p| p.preview.clone()) {
                        Some(src) => {
                            view! { <img src=src alt="Leaf preview" class="h-full w-full object-contain" /> }
                                .into_any()
                        }
                        None => {
                            view! {
                                <div class="flex flex-col items-center gap-3 text-center p-6">
                                    <div class="p-4 bg-primary/10 rounded-full text-primary">
                                        <Upload attr:class="h-10 w-10" />
                                    </div>
                                    <span class="font-semibold">{move || i18n.t("click_upload")}</span>
                                    <span class="text-sm text-base-content/60">
                                        {move || i18n.t("upload_formats")}
                                    </span>
                                </div>
                            }
                                .into_any()
                        }
                    }}

                    <Show when=is_busy>
                        <div class="absolute inset-0 flex flex-col items-center justify-center gap-3 bg-base-100/80">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                            <span class="font-medium">
                                {move || i18n.t(pending.with(|p| p.phase.label_key()))}
                            </span>
                        </div>
                    </Show>
                </label>
                <input
                    id="leaf-image"
                    type="file"
                    accept="image/*"
                    capture="environment"
                    class="hidden"
                    disabled=is_busy
                    on:change=on_change
                />

                {move || {
                    pending
                        .with(|p| p.error.clone())
                        .map(|message| {
                            view! {
                                <div role="alert" class="alert alert-error text-sm py-2 mt-4">
                                    <AlertTriangle attr:class="h-5 w-5" />
                                    <span>{message}</span>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
