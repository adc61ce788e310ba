//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 提供简洁的本地存储接口。

use leafscan::locale::PreferenceStore;

/// 本地存储操作封装
///
/// 提供静态方法访问浏览器 LocalStorage API。
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 键不存在或存储不可用时返回 `None`
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 返回写入是否成功（隐私模式或配额耗尽时失败）
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

/// 语言偏好等界面设置的存储
#[derive(Clone, Copy, Default)]
pub struct BrowserPrefs;

impl PreferenceStore for BrowserPrefs {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        LocalStorage::set(key, value)
    }
}
