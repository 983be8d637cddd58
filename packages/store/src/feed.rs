//! # Real-time document feed
//!
//! The landing page, catalog and article list follow collections in a
//! real-time document store that pushes a fresh snapshot whenever a document
//! changes. This module abstracts that store behind [`DocumentFeed`] so the
//! content logic never touches a vendor SDK.
//!
//! ## Model
//!
//! - A [`Document`] is an id plus a JSON object; [`Document::decode`] turns
//!   it into a typed model with the id injected.
//! - A [`Query`] names a collection (or one document in it), with an
//!   optional equality [`Filter`] and an optional [`Order`].
//! - [`DocumentFeed::subscribe`] returns a [`Subscription`]: a stream of
//!   snapshots, each either the full matching document list or a
//!   [`FeedError`]. A feed ends a subscription after reporting an error.
//!   Dropping the subscription unsubscribes.
//!
//! ## Implementations
//!
//! | Type | Use |
//! |------|-----|
//! | [`MemoryFeed`] | In-process feed for tests and local development. Can be told to reject filtered queries to mimic a store without the composite index. |
//! | [`OfflineFeed`] | Never connected. Every subscription fails with [`FeedError::Unavailable`], which sends the UI down the REST path. |

use std::cmp::Ordering;
use std::collections::HashMap;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::Stream;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("real-time feed is not connected")]
    Unavailable,
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("query requires an index: {0}")]
    MissingIndex(String),
    #[error("{0}")]
    Other(String),
}

impl FeedError {
    /// Errors that an unfiltered query is expected to avoid.
    pub fn is_query_rejection(&self) -> bool {
        matches!(self, FeedError::PermissionDenied(_) | FeedError::MissingIndex(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, data: Value) -> Self {
        let data = match data {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            id: id.into(),
            data,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// Deserialize the document with its id merged in as `"id"`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        let mut data = self.data.clone();
        data.insert("id".to_string(), Value::String(self.id.clone()));
        serde_json::from_value(Value::Object(data))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub field: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: String,
    pub document: Option<String>,
    pub filter: Option<Filter>,
    pub order: Option<Order>,
}

impl Query {
    pub fn collection(name: &str) -> Self {
        Self {
            collection: name.to_string(),
            document: None,
            filter: None,
            order: None,
        }
    }

    /// A single document, delivered as a snapshot of zero or one documents.
    pub fn document(collection: &str, id: &str) -> Self {
        Self {
            document: Some(id.to_string()),
            ..Self::collection(collection)
        }
    }

    pub fn where_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filter = Some(Filter {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn order_by(mut self, field: &str, direction: Direction) -> Self {
        self.order = Some(Order {
            field: field.to_string(),
            direction,
        });
        self
    }

    pub fn matches(&self, doc: &Document) -> bool {
        if let Some(id) = &self.document {
            if &doc.id != id {
                return false;
            }
        }
        match &self.filter {
            Some(filter) => doc.get(&filter.field) == Some(&filter.value),
            None => true,
        }
    }

    /// Select and order `docs` the way the store would.
    pub fn select<'a>(&self, docs: impl IntoIterator<Item = &'a Document>) -> Vec<Document> {
        let mut selected: Vec<Document> = docs
            .into_iter()
            .filter(|d| self.matches(d))
            .cloned()
            .collect();
        if let Some(order) = &self.order {
            selected.sort_by(|a, b| {
                let ord = compare_values(a.get(&order.field), b.get(&order.field));
                match order.direction {
                    Direction::Asc => ord,
                    Direction::Desc => ord.reverse(),
                }
            });
        }
        selected
    }
}

/// Missing values sort first; numbers and strings compare naturally;
/// timestamp objects compare by their seconds.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn seconds(v: &Value) -> Option<f64> {
        match v {
            Value::Number(n) => n.as_f64(),
            Value::Object(map) => map.get("seconds").and_then(Value::as_f64),
            _ => None,
        }
    }
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(x), Some(y)) => match (seconds(x), seconds(y)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
    }
}

pub type Snapshot = Result<Vec<Document>, FeedError>;

/// A live query. Yields snapshots until the feed ends it or it is dropped.
pub struct Subscription {
    rx: UnboundedReceiver<Snapshot>,
}

impl Subscription {
    fn channel() -> (UnboundedSender<Snapshot>, Self) {
        let (tx, rx) = unbounded();
        (tx, Self { rx })
    }

    /// A subscription that reports `error` once and ends.
    pub fn failed(error: FeedError) -> Self {
        let (tx, sub) = Self::channel();
        let _ = tx.unbounded_send(Err(error));
        sub
    }
}

impl Stream for Subscription {
    type Item = Snapshot;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.rx).poll_next(cx)
    }
}

pub trait DocumentFeed {
    fn is_connected(&self) -> bool;
    fn subscribe(&self, query: Query) -> Subscription;
}

/// A feed that never connects.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineFeed;

impl DocumentFeed for OfflineFeed {
    fn is_connected(&self) -> bool {
        false
    }

    fn subscribe(&self, _query: Query) -> Subscription {
        Subscription::failed(FeedError::Unavailable)
    }
}

struct Listener {
    query: Query,
    tx: UnboundedSender<Snapshot>,
}

struct FeedState {
    connected: bool,
    reject_filtered: bool,
    collections: HashMap<String, Vec<Document>>,
    listeners: Vec<Listener>,
}

/// In-process DocumentFeed for tests and local development.
#[derive(Clone)]
pub struct MemoryFeed {
    state: Arc<Mutex<FeedState>>,
}

impl Default for MemoryFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFeed {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FeedState {
                connected: true,
                reject_filtered: false,
                collections: HashMap::new(),
                listeners: Vec::new(),
            })),
        }
    }

    /// Make filtered queries fail with [`FeedError::MissingIndex`].
    pub fn reject_filtered_queries(&self, reject: bool) {
        self.state.lock().unwrap().reject_filtered = reject;
    }

    pub fn set_connected(&self, connected: bool) {
        self.state.lock().unwrap().connected = connected;
    }

    /// Insert or replace a document and notify subscribers of its collection.
    pub fn upsert(&self, collection: &str, doc: Document) {
        let mut state = self.state.lock().unwrap();
        let docs = state.collections.entry(collection.to_string()).or_default();
        match docs.iter_mut().find(|d| d.id == doc.id) {
            Some(existing) => *existing = doc,
            None => docs.push(doc),
        }
        Self::publish(&mut state, collection);
    }

    pub fn remove(&self, collection: &str, id: &str) {
        let mut state = self.state.lock().unwrap();
        if let Some(docs) = state.collections.get_mut(collection) {
            docs.retain(|d| d.id != id);
        }
        Self::publish(&mut state, collection);
    }

    /// Number of subscriptions still held by someone.
    pub fn listener_count(&self) -> usize {
        let mut state = self.state.lock().unwrap();
        state.listeners.retain(|l| !l.tx.is_closed());
        state.listeners.len()
    }

    fn publish(state: &mut FeedState, collection: &str) {
        let FeedState {
            collections,
            listeners,
            ..
        } = state;
        let docs = collections.get(collection).map(Vec::as_slice).unwrap_or(&[]);
        listeners.retain(|listener| {
            if listener.query.collection != collection {
                return !listener.tx.is_closed();
            }
            listener
                .tx
                .unbounded_send(Ok(listener.query.select(docs)))
                .is_ok()
        });
    }
}

impl DocumentFeed for MemoryFeed {
    fn is_connected(&self) -> bool {
        self.state.lock().unwrap().connected
    }

    fn subscribe(&self, query: Query) -> Subscription {
        let mut state = self.state.lock().unwrap();
        if !state.connected {
            return Subscription::failed(FeedError::Unavailable);
        }
        if state.reject_filtered && query.filter.is_some() {
            return Subscription::failed(FeedError::MissingIndex(query.collection));
        }
        let (tx, sub) = Subscription::channel();
        let docs = state
            .collections
            .get(&query.collection)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let _ = tx.unbounded_send(Ok(query.select(docs)));
        state.listeners.push(Listener { query, tx });
        sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use serde_json::json;

    fn course(id: &str, status: &str, created: i64) -> Document {
        Document::new(
            id,
            json!({ "title": id, "status": status, "createdAt": { "seconds": created } }),
        )
    }

    #[test]
    fn test_query_filters_and_orders() {
        let docs = vec![
            course("a", "published", 1),
            course("b", "draft", 2),
            course("c", "published", 3),
        ];
        let query = Query::collection("courses")
            .where_eq("status", "published")
            .order_by("createdAt", Direction::Desc);
        let ids: Vec<_> = query.select(&docs).into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["c", "a"]);

        let single = Query::document("courses", "b");
        assert_eq!(single.select(&docs).len(), 1);
    }

    #[test]
    fn test_decode_injects_id() {
        #[derive(serde::Deserialize)]
        struct Named {
            id: String,
            title: String,
        }
        let named: Named = course("x1", "published", 1).decode().unwrap();
        assert_eq!(named.id, "x1");
        assert_eq!(named.title, "x1");
    }

    #[tokio::test]
    async fn test_subscription_receives_initial_and_updates() {
        let feed = MemoryFeed::new();
        feed.upsert("courses", course("a", "published", 1));

        let mut sub = feed.subscribe(Query::collection("courses").where_eq("status", "published"));
        assert_eq!(sub.next().await.unwrap().unwrap().len(), 1);

        feed.upsert("courses", course("b", "published", 2));
        assert_eq!(sub.next().await.unwrap().unwrap().len(), 2);

        feed.upsert("courses", course("b", "draft", 2));
        assert_eq!(sub.next().await.unwrap().unwrap().len(), 1);

        // other collections do not wake this subscription
        feed.upsert("faqs", Document::new("f1", json!({})));
        feed.remove("courses", "a");
        assert!(sub.next().await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dropping_subscription_unsubscribes() {
        let feed = MemoryFeed::new();
        let first = feed.subscribe(Query::collection("courses"));
        let second = feed.subscribe(Query::collection("articles"));
        assert_eq!(feed.listener_count(), 2);

        drop(first);
        assert_eq!(feed.listener_count(), 1);
        drop(second);
        assert_eq!(feed.listener_count(), 0);
    }

    #[tokio::test]
    async fn test_rejected_and_offline_subscriptions_end_with_error() {
        let feed = MemoryFeed::new();
        feed.reject_filtered_queries(true);
        let mut sub = feed.subscribe(Query::collection("courses").where_eq("status", "published"));
        let err = sub.next().await.unwrap().unwrap_err();
        assert!(err.is_query_rejection());
        assert!(sub.next().await.is_none());
        assert_eq!(feed.listener_count(), 0);

        let mut offline = OfflineFeed.subscribe(Query::collection("courses"));
        assert_eq!(offline.next().await, Some(Err(FeedError::Unavailable)));
        assert!(offline.next().await.is_none());
        assert!(!OfflineFeed.is_connected());
    }
}
