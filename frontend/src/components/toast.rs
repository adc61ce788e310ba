//! 全局通知
//!
//! 同一时刻只显示一条；新通知覆盖旧通知，3 秒后自动消失。

use std::time::Duration;

use leptos::prelude::*;

const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq)]
struct Notice {
    id: u64,
    message: String,
    is_error: bool,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    current: RwSignal<Option<Notice>>,
    seq: StoredValue<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            seq: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message.into(), false);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message.into(), true);
    }

    fn show(&self, message: String, is_error: bool) {
        self.seq.update_value(|n| *n += 1);
        let id = self.seq.get_value();
        self.current.set(Some(Notice {
            id,
            message,
            is_error,
        }));

        // 只清除自己那条，避免提前关掉后来的通知
        let current = self.current;
        set_timeout(
            move || {
                current.update(|slot| {
                    if slot.as_ref().is_some_and(|n| n.id == id) {
                        *slot = None;
                    }
                });
            },
            TOAST_DURATION,
        );
    }
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let current = use_toast().current;

    move || {
        current.get().map(|notice| {
            let class = if notice.is_error {
                "alert alert-error shadow-lg"
            } else {
                "alert alert-success shadow-lg"
            };
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div class=class>
                        <span>{notice.message}</span>
                    </div>
                </div>
            }
        })
    }
}
