//! 主题 Context
//!
//! 当前主题以信号保存，切换时同步写入 `<html data-theme>` 与本地存储。

use leafscan::theme::{Theme, load_theme, persist_theme};
use leptos::prelude::*;

use crate::web::BrowserPrefs;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// 恢复上次的选择并立即应用，避免首屏闪烁
    pub fn load() -> Self {
        let theme = load_theme(&BrowserPrefs, prefers_dark());
        apply(theme);
        Self {
            theme: RwSignal::new(theme),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        persist_theme(&BrowserPrefs, next);
        apply(next);
        self.theme.set(next);
        tracing::debug!(theme = %next, "theme switched");
    }
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

fn apply(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.data_theme());
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}
