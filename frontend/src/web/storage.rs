//! LocalStorage 封装模块
//!
//! Backs the session with `window.localStorage`. Every operation degrades to
//! a no-op when storage is unavailable (private mode, disabled cookies).

use grievance_client::KeyValueStore;

/// 浏览器本地存储
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn remove(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }

    fn clear(&self) -> bool {
        Self::storage().and_then(|s| s.clear().ok()).is_some()
    }
}
