//! Platform glue shared by every provider and view.
//!
//! - **Web** (WASM + `web` feature): `localStorage`, `gloo-timers`
//! - **Desktop / native**: files under the user data dir, `tokio::time`
//!
//! The few browser calls the views need (clipboard, new tab, scrolling) go
//! through `document::eval` so they degrade to no-ops where there is no page.

use std::time::Duration;

use dioxus::prelude::*;
use store::AppConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStorage = store::LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type AppStorage = store::FileStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type AppStorage = store::MemoryStorage;

/// The platform's persistent key/value store.
pub fn make_storage() -> AppStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("mavecode");
        store::FileStorage::new(base)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        thread_local! {
            static MEMORY: store::MemoryStorage = store::MemoryStorage::new();
        }
        MEMORY.with(Clone::clone)
    }
}

/// Read `mavecode.toml` where the platform has a config dir, then apply the
/// compile-time overrides.
pub fn load_config() -> AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("mavecode")
            .join(AppConfig::filename());
        let base = match std::fs::read_to_string(&path) {
            Ok(text) => AppConfig::from_toml(&text).unwrap_or_else(|e| {
                tracing::warn!("ignoring invalid {}: {e}", path.display());
                AppConfig::default()
            }),
            Err(_) => AppConfig::default(),
        };
        base.with_env()
    }
    #[cfg(target_arch = "wasm32")]
    {
        AppConfig::from_env()
    }
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

pub fn copy_to_clipboard(text: &str) {
    let _ = document::eval(&format!(
        "navigator.clipboard && navigator.clipboard.writeText({})",
        js_string(text)
    ));
}

pub fn open_in_new_tab(url: &str) {
    let _ = document::eval(&format!("window.open({}, '_blank', 'noopener')", js_string(url)));
}

pub fn scroll_to_top() {
    let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' })");
}

/// The current page URL, if running in a browser.
pub fn current_url() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.location().href().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// `2024-05-01T10:00:00Z` → `2024-05-01`. Anything else is shown as is.
pub fn short_date(raw: &str) -> &str {
    raw.split_once('T').map_or(raw, |(date, _)| date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-05-01T10:00:00Z"), "2024-05-01");
        assert_eq!(short_date("1714557600"), "1714557600");
    }

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string(r#"a"b"#), r#""a\"b""#);
    }
}
