//! # Content store: landing, catalog and article data
//!
//! [`ContentStore`] is the shape every list view renders from. It is filled
//! from one of two paths:
//!
//! 1. **Real-time**: [`follow_collection`] subscribes to a [`DocumentFeed`]
//!    and hands each snapshot to [`ContentStore::apply`].
//! 2. **REST**: when the feed is not connected, the UI fetches the lists from
//!    the API and hands them to [`ContentStore::apply_rest`].
//!
//! Both paths decode into the same models, so a card never knows which one
//! answered.
//!
//! ## Collections
//!
//! | [`Collection`] | Primary query | Fallback |
//! |----------------|---------------|----------|
//! | `Hero` | document `hero_content/main` | none, defaults stay |
//! | `Courses` | `status == "published"`, `createdAt` desc | unfiltered, `createdAt` desc |
//! | `Articles` | `status == "published"`, `createdAt` desc | unfiltered, `createdAt` desc |
//! | `Mentors` | `isActive == true` | unfiltered |
//! | `LiveSessions` | `scheduledAt` asc, then scheduled/live only | none |
//! | `Categories` | unfiltered | none, defaults stay |
//! | `Faqs` | `order` asc | none |
//!
//! A fallback is taken once, and only for [`FeedError::is_query_rejection`]
//! errors (missing permission or index on the filtered query).

use futures::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::feed::{Direction, Document, DocumentFeed, FeedError, Query};
use crate::models::{
    Article, Category, Course, Faq, HeroContent, LiveSession, Mentor, SessionStatus, Stats,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Hero,
    Courses,
    Articles,
    Mentors,
    LiveSessions,
    Categories,
    Faqs,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Hero,
        Collection::Courses,
        Collection::Articles,
        Collection::Mentors,
        Collection::LiveSessions,
        Collection::Categories,
        Collection::Faqs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Hero => "hero_content",
            Collection::Courses => "courses",
            Collection::Articles => "articles",
            Collection::Mentors => "mentors",
            Collection::LiveSessions => "live_sessions",
            Collection::Categories => "categories",
            Collection::Faqs => "faqs",
        }
    }

    pub fn query(&self) -> Query {
        let name = self.name();
        match self {
            Collection::Hero => Query::document(name, "main"),
            Collection::Courses | Collection::Articles => Query::collection(name)
                .where_eq("status", "published")
                .order_by("createdAt", Direction::Desc),
            Collection::Mentors => Query::collection(name).where_eq("isActive", true),
            Collection::LiveSessions => {
                Query::collection(name).order_by("scheduledAt", Direction::Asc)
            }
            Collection::Categories => Query::collection(name),
            Collection::Faqs => Query::collection(name).order_by("order", Direction::Asc),
        }
    }

    pub fn fallback(&self) -> Option<Query> {
        let name = self.name();
        match self {
            Collection::Courses | Collection::Articles => {
                Some(Query::collection(name).order_by("createdAt", Direction::Desc))
            }
            Collection::Mentors => Some(Query::collection(name)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContentStore {
    pub hero: HeroContent,
    pub courses: Vec<Course>,
    pub articles: Vec<Article>,
    pub mentors: Vec<Mentor>,
    pub live_sessions: Vec<LiveSession>,
    pub categories: Vec<Category>,
    pub faqs: Vec<Faq>,
    pub loading: bool,
    pub error: Option<String>,
    /// Set once the feed delivered hero or course data.
    pub connected: bool,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self {
            hero: HeroContent::default(),
            courses: Vec::new(),
            articles: Vec::new(),
            mentors: Vec::new(),
            live_sessions: Vec::new(),
            categories: Category::defaults(),
            faqs: Vec::new(),
            loading: true,
            error: None,
            connected: false,
        }
    }
}

/// Lists fetched over REST when the feed is unavailable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RestContent {
    pub hero: Option<HeroContent>,
    pub courses: Vec<Course>,
    pub articles: Vec<Article>,
    pub live_sessions: Vec<LiveSession>,
    pub categories: Vec<Category>,
    pub faqs: Vec<Faq>,
}

fn decode_all<T: DeserializeOwned>(collection: Collection, docs: &[Document]) -> Vec<T> {
    docs.iter()
        .filter_map(|doc| match doc.decode() {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("skipping malformed {} document {}: {e}", collection.name(), doc.id);
                None
            }
        })
        .collect()
}

fn is_upcoming_or_live(session: &LiveSession) -> bool {
    matches!(session.status, SessionStatus::Scheduled | SessionStatus::Live)
}

impl ContentStore {
    /// Apply one snapshot from the feed.
    pub fn apply(&mut self, collection: Collection, docs: Vec<Document>) {
        match collection {
            Collection::Hero => {
                if let Some(doc) = docs.first() {
                    self.hero = merge_hero(doc);
                    self.connected = true;
                }
            }
            Collection::Courses => {
                self.courses = decode_all(collection, &docs);
                self.connected = true;
            }
            Collection::Articles => self.articles = decode_all(collection, &docs),
            Collection::Mentors => self.mentors = decode_all(collection, &docs),
            Collection::LiveSessions => {
                self.live_sessions = decode_all::<LiveSession>(collection, &docs)
                    .into_iter()
                    .filter(is_upcoming_or_live)
                    .collect();
            }
            Collection::Categories => {
                if !docs.is_empty() {
                    self.categories = decode_all(collection, &docs);
                }
            }
            Collection::Faqs => self.faqs = decode_all(collection, &docs),
        }
        self.loading = false;
    }

    /// Populate from REST lists. Empty category lists keep the defaults.
    pub fn apply_rest(&mut self, content: RestContent) {
        if let Some(hero) = content.hero {
            self.hero = hero;
        }
        self.courses = content.courses;
        self.articles = content.articles;
        self.live_sessions = content.live_sessions;
        if !content.categories.is_empty() {
            self.categories = content.categories;
        }
        self.faqs = content.faqs;
        self.loading = false;
    }

    pub fn course_by_id(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn article_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    pub fn article_by_id(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn mentor_by_id(&self, id: &str) -> Option<&Mentor> {
        self.mentors.iter().find(|m| m.id == id)
    }

    pub fn courses_by_category(&self, category: &str) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    pub fn upcoming_sessions(&self) -> Vec<&LiveSession> {
        self.live_sessions
            .iter()
            .filter(|s| s.status == SessionStatus::Scheduled)
            .collect()
    }

    pub fn active_sessions(&self) -> Vec<&LiveSession> {
        self.live_sessions
            .iter()
            .filter(|s| s.status == SessionStatus::Live)
            .collect()
    }

    /// Headline numbers, with marketing placeholders while a list is empty.
    pub fn stats(&self) -> Stats {
        fn or(len: usize, placeholder: u64) -> u64 {
            if len > 0 {
                len as u64
            } else {
                placeholder
            }
        }
        Stats {
            courses: or(self.courses.len(), 50),
            students: 1000,
            articles: or(self.articles.len(), 100),
            mentors: or(self.mentors.len(), 5),
        }
    }
}

/// Overlay the hero document on the default copy, field by field.
fn merge_hero(doc: &Document) -> HeroContent {
    let defaults = HeroContent::default();
    let Ok(Value::Object(mut merged)) = serde_json::to_value(&defaults) else {
        return defaults;
    };
    for (key, value) in &doc.data {
        if !value.is_null() {
            merged.insert(key.clone(), value.clone());
        }
    }
    // camelCase keys from the document must win over the snake_case defaults
    for (camel, snake) in [
        ("ctaText", "cta_text"),
        ("badgeText", "badge_text"),
        ("backgroundImage", "background_image"),
    ] {
        if let Some(value) = merged.remove(camel) {
            merged.insert(snake.to_string(), value);
        }
    }
    serde_json::from_value(Value::Object(merged)).unwrap_or(defaults)
}

/// Follow one collection until the subscription ends.
///
/// Falls back to [`Collection::fallback`] once when the primary query is
/// rejected. Returns the error that ended the follow, if any.
pub async fn follow_collection<F, A>(
    feed: &F,
    collection: Collection,
    mut apply: A,
) -> Result<(), FeedError>
where
    F: DocumentFeed + ?Sized,
    A: FnMut(Collection, Vec<Document>),
{
    let mut subscription = feed.subscribe(collection.query());
    let mut fell_back = false;
    while let Some(snapshot) = subscription.next().await {
        match snapshot {
            Ok(docs) => apply(collection, docs),
            Err(err) if err.is_query_rejection() && !fell_back => {
                let Some(fallback) = collection.fallback() else {
                    tracing::warn!("{} listener error (keeping defaults): {err}", collection.name());
                    return Err(err);
                };
                tracing::warn!("{} listener error, retrying unfiltered: {err}", collection.name());
                fell_back = true;
                subscription = feed.subscribe(fallback);
            }
            Err(err) => {
                tracing::warn!("{} listener error: {err}", collection.name());
                return Err(err);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{MemoryFeed, OfflineFeed};
    use serde_json::json;

    fn seed(feed: &MemoryFeed) {
        feed.upsert(
            "courses",
            Document::new(
                "c1",
                json!({ "title": "Rust", "category": "backend", "status": "published", "createdAt": 1 }),
            ),
        );
        feed.upsert(
            "courses",
            Document::new(
                "c2",
                json!({ "title": "Draft", "category": "web", "status": "draft", "createdAt": 2 }),
            ),
        );
        feed.upsert(
            "live_sessions",
            Document::new("l1", json!({ "title": "Done", "status": "completed", "scheduledAt": 1 })),
        );
        feed.upsert(
            "live_sessions",
            Document::new("l2", json!({ "title": "Soon", "status": "scheduled", "scheduledAt": 2 })),
        );
        feed.upsert(
            "live_sessions",
            Document::new("l3", json!({ "title": "Now", "status": "live", "scheduledAt": 3 })),
        );
    }

    #[test]
    fn test_defaults_before_any_data() {
        let store = ContentStore::default();
        assert!(store.loading);
        assert!(!store.connected);
        assert_eq!(store.categories.len(), 6);
        assert_eq!(
            store.stats(),
            Stats {
                courses: 50,
                students: 1000,
                articles: 100,
                mentors: 5
            }
        );
    }

    #[tokio::test]
    async fn test_follow_applies_published_courses() {
        let feed = MemoryFeed::new();
        seed(&feed);
        let mut store = ContentStore::default();

        let mut sub = feed.subscribe(Collection::Courses.query());
        let docs = sub.next().await.unwrap().unwrap();
        store.apply(Collection::Courses, docs);

        assert!(store.connected);
        assert!(!store.loading);
        assert_eq!(store.courses.len(), 1);
        assert_eq!(store.course_by_id("c1").unwrap().title, "Rust");
        assert_eq!(store.courses_by_category("backend").len(), 1);
        assert_eq!(store.stats().courses, 1);
    }

    #[tokio::test]
    async fn test_rejected_query_falls_back_to_unfiltered() {
        let feed = MemoryFeed::new();
        seed(&feed);
        feed.reject_filtered_queries(true);

        let mut seen = Vec::new();
        let polled = {
            let follow = follow_collection(&feed, Collection::Courses, |collection, docs| {
                seen.push((collection, docs.len()));
            });
            futures::pin_mut!(follow);
            futures::poll!(follow.as_mut())
        };
        // the fallback subscription stays open after its first snapshot
        assert!(polled.is_pending());
        assert_eq!(seen, vec![(Collection::Courses, 2)]);
        assert_eq!(feed.listener_count(), 0);
    }

    #[tokio::test]
    async fn test_unrecoverable_errors_end_follow() {
        let feed = MemoryFeed::new();
        feed.set_connected(false);
        let result = follow_collection(&feed, Collection::Faqs, |_, _| {}).await;
        assert_eq!(result, Err(FeedError::Unavailable));

        let result = follow_collection(&OfflineFeed, Collection::Courses, |_, _| {}).await;
        assert_eq!(result, Err(FeedError::Unavailable));
    }

    #[tokio::test]
    async fn test_live_sessions_keep_scheduled_and_live() {
        let feed = MemoryFeed::new();
        seed(&feed);
        let mut sub = feed.subscribe(Collection::LiveSessions.query());
        let mut store = ContentStore::default();
        store.apply(Collection::LiveSessions, sub.next().await.unwrap().unwrap());

        let ids: Vec<_> = store.live_sessions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["l2", "l3"]);
        assert_eq!(store.upcoming_sessions()[0].id, "l2");
        assert_eq!(store.active_sessions()[0].id, "l3");
    }

    #[test]
    fn test_hero_merges_over_defaults() {
        let mut store = ContentStore::default();
        store.apply(
            Collection::Hero,
            vec![Document::new("main", json!({ "title": "Belajar Rust", "ctaText": "Gas" }))],
        );
        assert_eq!(store.hero.title, "Belajar Rust");
        assert_eq!(store.hero.cta_text, "Gas");
        assert_eq!(store.hero.subtitle, HeroContent::default().subtitle);
        assert!(store.connected);
    }

    #[test]
    fn test_empty_categories_keep_defaults() {
        let mut store = ContentStore::default();
        store.apply(Collection::Categories, Vec::new());
        assert_eq!(store.categories, Category::defaults());

        store.apply(
            Collection::Categories,
            vec![Document::new("rust", json!({ "name": "Rust" }))],
        );
        assert_eq!(store.categories, vec![Category::new("rust", "Rust")]);
    }

    #[test]
    fn test_rest_and_feed_paths_yield_same_shape() {
        let rest_course: Course = serde_json::from_value(json!({
            "id": "c1", "title": "Rust", "description": "", "price": 0.0, "is_free": true,
            "category": "backend", "level": "beginner", "duration_hours": 3,
            "instructor": "Firza Ilmi", "created_at": "1", "updated_at": "1"
        }))
        .unwrap();
        let rest_article: Article = serde_json::from_value(json!({
            "id": "a1", "slug": "rust-intro", "title": "Intro", "content": "hi",
            "category": "tips", "tags": [], "author": "Firza Ilmi", "views": 3,
            "created_at": "1", "updated_at": "1"
        }))
        .unwrap();

        let mut via_rest = ContentStore::default();
        via_rest.apply_rest(RestContent {
            courses: vec![rest_course],
            articles: vec![rest_article],
            ..Default::default()
        });

        let mut via_feed = ContentStore::default();
        via_feed.apply(
            Collection::Courses,
            vec![Document::new(
                "c1",
                json!({ "title": "Rust", "isFree": true, "category": "backend",
                        "durationHours": 3, "createdAt": "1", "updatedAt": "1" }),
            )],
        );
        via_feed.apply(
            Collection::Articles,
            vec![Document::new(
                "a1",
                json!({ "slug": "rust-intro", "title": "Intro", "content": "hi",
                        "category": "tips", "views": 3, "createdAt": "1", "updatedAt": "1" }),
            )],
        );

        assert_eq!(via_rest.courses, via_feed.courses);
        assert_eq!(via_rest.articles, via_feed.articles);
        assert_eq!(
            via_rest.article_by_slug("rust-intro"),
            via_feed.article_by_slug("rust-intro")
        );
        assert!(via_feed.article_by_id("a1").is_some());
        assert!(!via_rest.loading);
    }
}
