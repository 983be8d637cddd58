pub mod block;
pub mod bookmarks;
pub mod chat;
pub mod checkout;
pub mod club;
pub mod config;
pub mod content;
pub mod feed;
pub mod focus;
pub mod models;
pub mod profile;
pub mod progress;
pub mod quiz;
pub mod session;
pub mod storage;
pub mod theme;

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use bookmarks::Bookmarks;
pub use config::AppConfig;
pub use content::{Collection, ContentStore, RestContent};
pub use feed::{DocumentFeed, FeedError, MemoryFeed, OfflineFeed};
pub use focus::{FocusEvent, FocusTimer};
pub use session::{Session, SessionStore};
pub use storage::{KeyValueStore, StorageError};
pub use theme::Theme;
