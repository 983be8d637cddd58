//! Content context: landing data from the live feed or the REST API.
//!
//! [`ContentProvider`] follows every [`Collection`] on the [`DocumentFeed`]
//! found in context when the feed is connected and real-time content is
//! enabled. Otherwise, or when every collection fails, it fetches the same
//! lists over REST. Unmounting the provider cancels the follows, which drops
//! their subscriptions.

use std::rc::Rc;

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use futures::future::join_all;
use store::content::{follow_collection, Collection, ContentStore};
use store::feed::{DocumentFeed, FeedError, OfflineFeed};

use crate::auth::{use_auth, use_config};
use crate::toast::{push_toast, use_toasts, ToastKind, Toasts};

/// The real-time feed the app follows. Provide one above [`ContentProvider`]
/// to enable live content; without it the app stays on REST.
#[derive(Clone)]
pub struct FeedHandle(pub Rc<dyn DocumentFeed>);

pub fn use_content() -> Signal<ContentStore> {
    use_context::<Signal<ContentStore>>()
}

/// Re-fetch all lists over REST, e.g. after an admin edit.
pub async fn refresh_from_rest(
    mut content: Signal<ContentStore>,
    api: ApiClient,
    mut toasts: Signal<Toasts>,
) {
    let (rest, errors) = api.rest_content().await;
    let error = errors.first().map(ApiError::user_message);
    {
        let mut store = content.write();
        store.apply_rest(rest);
        store.error = error.clone();
    }
    if let Some(message) = error {
        push_toast(&mut toasts, ToastKind::Error, &message);
    }
}

#[component]
pub fn ContentProvider(children: Element) -> Element {
    let content = use_context_provider(|| Signal::new(ContentStore::default()));
    let config = use_config();
    let auth = use_auth();
    let toasts = use_toasts();
    let feed = try_use_context::<FeedHandle>()
        .map(|handle| handle.0)
        .unwrap_or_else(|| Rc::new(OfflineFeed));

    use_future(move || {
        let feed = feed.clone();
        let realtime = config.content.realtime;
        async move {
            let api = auth.peek().api();
            if !realtime || !feed.is_connected() {
                refresh_from_rest(content, api, toasts).await;
                return;
            }

            let follows = Collection::ALL.map(|collection| {
                let mut content = content;
                let feed = feed.clone();
                async move {
                    follow_collection(&*feed, collection, move |c, docs| {
                        content.write().apply(c, docs)
                    })
                    .await
                }
            });
            let results: Vec<Result<(), FeedError>> = join_all(follows).await;

            if results.iter().all(Result::is_err) {
                tracing::warn!("real-time feed unavailable, falling back to REST");
                refresh_from_rest(content, api, toasts).await;
            }
        }
    });

    rsx! {
        {children}
    }
}
