//! 明暗主题
//!
//! 保存过的选择优先；没有保存时跟随系统的 `prefers-color-scheme`。

use std::fmt::Display;

use crate::locale::PreferenceStore;

/// 本地存储中保存主题选择的键
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn code(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// 写到 `<html data-theme>` 上的 daisyUI 主题名
    pub fn data_theme(&self) -> &'static str {
        match self {
            Theme::Light => "emerald",
            Theme::Dark => "forest",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// 读取保存的主题；缺失或无法识别时按系统偏好
pub fn load_theme<P: PreferenceStore + ?Sized>(prefs: &P, prefers_dark: bool) -> Theme {
    prefs
        .get(THEME_STORAGE_KEY)
        .and_then(|v| Theme::parse(&v))
        .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

pub fn persist_theme<P: PreferenceStore + ?Sized>(prefs: &P, theme: Theme) {
    if !prefs.set(THEME_STORAGE_KEY, theme.code()) {
        tracing::warn!(theme = %theme, "failed to persist theme preference");
    }
}
