//! 界面语言与文案查找
//!
//! 查找规则：
//! - 键不存在：原样返回键（便于发现漏翻的文案）
//! - 键存在但当前语言缺失：回退到默认语言（英文）

mod catalog;

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::OnceLock;

use catalog::{CATALOG, Entry};

/// 本地存储中保存语言选择的键
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// 支持的界面语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Hi,
    Te,
}

impl Language {
    /// 语言切换器的展示顺序
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Te];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Te => "te",
        }
    }

    /// 语言自身的名称
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
            Language::Te => "తెలుగు",
        }
    }

    /// 解析语言代码（忽略大小写，容忍 `en-US` 之类的地区后缀）
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "te" => Some(Language::Te),
            _ => None,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// =========================================================
// 文案查找
// =========================================================

fn index() -> &'static HashMap<&'static str, &'static Entry> {
    static INDEX: OnceLock<HashMap<&'static str, &'static Entry>> = OnceLock::new();
    INDEX.get_or_init(|| CATALOG.iter().map(|(key, entry)| (*key, entry)).collect())
}

/// 按语言查找文案
pub fn lookup<'a>(language: Language, key: &'a str) -> &'a str {
    let Some(entry) = index().get(key) else {
        return key;
    };
    let localized = match language {
        Language::En => Some(entry.en),
        Language::Hi => entry.hi,
        Language::Te => entry.te,
    };
    localized.unwrap_or(entry.en)
}

/// 所有已定义的键
pub fn keys() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(key, _)| *key)
}

// =========================================================
// 语言偏好持久化
// =========================================================

/// 客户端本地的字符串键值存储
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    /// 返回写入是否成功
    fn set(&self, key: &str, value: &str) -> bool;
}

/// 读取保存的语言，缺失或无法识别时使用默认语言
pub fn load_language<P: PreferenceStore + ?Sized>(prefs: &P) -> Language {
    prefs
        .get(LANGUAGE_STORAGE_KEY)
        .and_then(|v| Language::parse(&v))
        .unwrap_or_default()
}

pub fn persist_language<P: PreferenceStore + ?Sized>(prefs: &P, language: Language) {
    if !prefs.set(LANGUAGE_STORAGE_KEY, language.code()) {
        tracing::warn!(language = %language, "failed to persist language preference");
    }
}

/// 语言状态
///
/// 以显式对象的形式注入各个视图，而不是全局单例。
pub struct LocaleStore<P: PreferenceStore> {
    prefs: P,
    current: Cell<Language>,
}

impl<P: PreferenceStore> LocaleStore<P> {
    /// 从偏好存储恢复上次的语言选择
    pub fn load(prefs: P) -> Self {
        let current = load_language(&prefs);
        Self {
            prefs,
            current: Cell::new(current),
        }
    }

    pub fn language(&self) -> Language {
        self.current.get()
    }

    /// 同步更新内存状态并持久化；没有失败路径
    pub fn set_language(&self, language: Language) {
        self.current.set(language);
        persist_language(&self.prefs, language);
    }

    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        lookup(self.current.get(), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    #[derive(Default)]
    struct MemoryPrefs {
        values: RefCell<HashMap<String, String>>,
        read_only: bool,
    }

    impl PreferenceStore for MemoryPrefs {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> bool {
            if self.read_only {
                return false;
            }
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            true
        }
    }

    #[test]
    fn test_every_key_is_non_empty_in_every_language() {
        for language in Language::ALL {
            for key in keys() {
                assert!(
                    !lookup(language, key).is_empty(),
                    "{} missing for {}",
                    key,
                    language
                );
            }
        }
    }

    #[test]
    fn test_catalog_keys_are_unique() {
        let mut seen = HashSet::new();
        for key in keys() {
            assert!(seen.insert(key), "duplicate key {}", key);
        }
    }

    #[test]
    fn test_unknown_key_is_returned_unchanged() {
        assert_eq!(lookup(Language::Hi, "no_such_key"), "no_such_key");
        assert_eq!(lookup(Language::En, ""), "");
    }

    #[test]
    fn test_missing_language_falls_back_to_english() {
        assert_eq!(lookup(Language::Te, "detection_history"), "Detection History");
        assert_eq!(lookup(Language::Hi, "history"), "इतिहास");
    }

    #[test]
    fn test_parse_accepts_region_tags() {
        assert_eq!(Language::parse("EN-us"), Some(Language::En));
        assert_eq!(Language::parse("te_IN"), Some(Language::Te));
        assert_eq!(Language::parse("fr"), None);
    }

    #[test]
    fn test_store_restores_and_persists_selection() {
        let prefs = MemoryPrefs::default();
        prefs.set(LANGUAGE_STORAGE_KEY, "hi");

        let store = LocaleStore::load(prefs);
        assert_eq!(store.language(), Language::Hi);
        assert_eq!(store.translate("logout"), "लॉगआउट");

        store.set_language(Language::Te);
        assert_eq!(store.language(), Language::Te);
        assert_eq!(store.prefs.get(LANGUAGE_STORAGE_KEY).as_deref(), Some("te"));
    }

    #[test]
    fn test_translate_follows_language_switch() {
        let store = LocaleStore::load(MemoryPrefs::default());
        assert_eq!(store.translate("history"), "History");

        store.set_language(Language::Hi);
        assert_eq!(store.translate("history"), "इतिहास");
        // 未翻译的语言回退到英文，未知 key 原样返回
        store.set_language(Language::Te);
        assert_eq!(store.translate("detection_history"), "Detection History");
        assert_eq!(store.translate("no_such_key"), "no_such_key");
    }

    #[test]
    fn test_unreadable_preference_uses_default() {
        let prefs = MemoryPrefs::default();
        prefs.set(LANGUAGE_STORAGE_KEY, "klingon");
        assert_eq!(load_language(&prefs), Language::En);
    }

    #[test]
    fn test_failed_persist_still_switches_language() {
        let store = LocaleStore::load(MemoryPrefs {
            read_only: true,
            ..Default::default()
        });
        store.set_language(Language::Hi);
        assert_eq!(store.language(), Language::Hi);
    }
}
