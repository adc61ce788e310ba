//! 界面语言 Context
//!
//! `LocaleStore` 负责持久化与查找；这里再包一层信号，让切换语言时视图自动刷新。

use leafscan::Language;
use leafscan::locale::LocaleStore;
use leptos::prelude::*;

use crate::web::BrowserPrefs;

#[derive(Clone, Copy)]
pub struct LocaleContext {
    store: StoredValue<LocaleStore<BrowserPrefs>, LocalStorage>,
    language: RwSignal<Language>,
}

impl LocaleContext {
    /// 从本地存储恢复上次的语言
    pub fn load() -> Self {
        let store = LocaleStore::load(BrowserPrefs);
        let language = RwSignal::new(store.language());
        set_document_lang(store.language());
        Self {
            store: StoredValue::new_local(store),
            language,
        }
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&self, language: Language) {
        self.store.with_value(|store| store.set_language(language));
        self.language.set(language);
        set_document_lang(language);
        tracing::debug!(language = %language, "language switched");
    }

    /// 查找文案（追踪当前语言）
    ///
    /// 信号只用于建立追踪，文案始终由 `LocaleStore` 的当前语言决定。
    pub fn t(&self, key: &'static str) -> &'static str {
        self.language.track();
        self.t_untracked(key)
    }

    /// 事件处理器中使用，不建立追踪
    pub fn t_untracked(&self, key: &'static str) -> &'static str {
        self.store.with_value(|store| store.translate(key))
    }
}

fn set_document_lang(language: Language) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("lang", language.code());
    }
}

pub fn use_i18n() -> LocaleContext {
    use_context::<LocaleContext>().expect("LocaleContext should be provided")
}
