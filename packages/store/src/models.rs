//! # Domain models for the course platform
//!
//! Client-side projections of the records served by the Mavecode REST API and
//! the real-time document store. The two sources spell fields differently
//! (`created_at` over REST, `createdAt` in documents), so every multi-word
//! field carries a `#[serde(alias = ...)]` and every optional field defaults.
//! Decoding either payload yields the same struct, which is what lets list
//! views switch data paths without caring which one answered.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserInfo`] | The signed-in user as returned by `/auth/*`. |
//! | [`Course`] / [`CourseInput`] | A course and the admin form body for it. |
//! | [`Video`] / [`Progress`] | Lessons of a course and per-lesson completion. |
//! | [`Article`] / [`ArticleInput`] | Blog articles, addressed by slug. |
//! | [`LiveSession`] / [`LiveSessionInput`] | Scheduled live classes. |
//! | [`Mentor`], [`Faq`], [`Category`], [`HeroContent`], [`Stats`] | Landing page content. |
//! | [`Order`], [`Certificate`], [`SubscriptionPlan`] | Purchases and their outcomes. |
//! | [`ChatReply`] | Response of the chat assistant endpoint. |

use serde::{Deserialize, Deserializer, Serialize};

/// Accept strings, numbers and `{ "seconds": n }` timestamp objects.
fn timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Object(map)) => map
            .get("seconds")
            .or_else(|| map.get("_seconds"))
            .map(|s| s.to_string()),
        _ => None,
    })
}

/// Ids are strings, but some endpoints hand out numeric ones.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("invalid id: {other}"))),
    }
}

/// User information as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserInfo {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, alias = "isPremium")]
    pub is_premium: bool,
    #[serde(default, alias = "createdAt", deserialize_with = "timestamp")]
    pub created_at: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

fn default_level() -> String {
    "beginner".to_string()
}

fn default_instructor() -> String {
    "Firza Ilmi".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default, alias = "isFree")]
    pub is_free: bool,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default, alias = "durationHours")]
    pub duration_hours: u32,
    #[serde(default = "default_instructor")]
    pub instructor: String,
    #[serde(default, alias = "createdAt", deserialize_with = "timestamp")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updatedAt", deserialize_with = "timestamp")]
    pub updated_at: Option<String>,
}

/// Body of the admin create/update course form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseInput {
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub price: f64,
    pub is_free: bool,
    pub category: String,
    pub level: String,
    pub duration_hours: u32,
    pub instructor: String,
}

impl Default for CourseInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            thumbnail: None,
            price: 0.0,
            is_free: true,
            category: String::new(),
            level: default_level(),
            duration_hours: 0,
            instructor: default_instructor(),
        }
    }
}

impl From<&Course> for CourseInput {
    fn from(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            description: course.description.clone(),
            thumbnail: course.thumbnail.clone(),
            price: course.price,
            is_free: course.is_free,
            category: course.category.clone(),
            level: course.level.clone(),
            duration_hours: course.duration_hours,
            instructor: course.instructor.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: String,
    #[serde(alias = "courseId")]
    pub course_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(alias = "videoUrl")]
    pub video_url: String,
    #[serde(default, alias = "durationMinutes")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub order: i32,
    #[serde(default, alias = "isPreview")]
    pub is_preview: bool,
    #[serde(default = "default_video_kind", rename = "type")]
    pub kind: String,
}

fn default_video_kind() -> String {
    "video".to_string()
}

/// Completion record for one lesson.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Progress {
    #[serde(default, alias = "courseId")]
    pub course_id: String,
    #[serde(alias = "videoId")]
    pub video_id: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, alias = "progressPercent")]
    pub progress_percent: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: String,
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_instructor")]
    pub author: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default, alias = "createdAt", deserialize_with = "timestamp")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updatedAt", deserialize_with = "timestamp")]
    pub updated_at: Option<String>,
}

impl Article {
    /// Estimated reading time at 200 words per minute, at least one minute.
    pub fn reading_minutes(&self) -> usize {
        let words = self.content.split_whitespace().count();
        words.div_ceil(200).max(1)
    }

    /// Case-insensitive match on title and excerpt.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.title.to_lowercase().contains(&needle)
            || self
                .excerpt
                .as_deref()
                .is_some_and(|e| e.to_lowercase().contains(&needle))
    }
}

impl Course {
    /// Case-insensitive match on title and description.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ArticleInput {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub thumbnail: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
}

impl From<&Article> for ArticleInput {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            excerpt: article.excerpt.clone(),
            thumbnail: article.thumbnail.clone(),
            category: article.category.clone(),
            tags: article.tags.clone(),
            author: article.author.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Scheduled,
    Live,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiveSession {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_instructor")]
    pub instructor: String,
    #[serde(default, alias = "scheduledAt", deserialize_with = "timestamp")]
    pub scheduled_at: Option<String>,
    #[serde(default, alias = "durationMinutes")]
    pub duration_minutes: u32,
    #[serde(default, alias = "meetingUrl")]
    pub meeting_url: Option<String>,
    #[serde(default, alias = "maxParticipants")]
    pub max_participants: u32,
    #[serde(default, alias = "participantsCount")]
    pub participants_count: u32,
    #[serde(default)]
    pub status: SessionStatus,
}

impl LiveSession {
    pub fn is_full(&self) -> bool {
        self.max_participants > 0 && self.participants_count >= self.max_participants
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiveSessionInput {
    pub title: String,
    pub description: Option<String>,
    pub instructor: String,
    pub scheduled_at: String,
    pub duration_minutes: u32,
    pub meeting_url: Option<String>,
    pub max_participants: u32,
}

impl Default for LiveSessionInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            instructor: default_instructor(),
            scheduled_at: String::new(),
            duration_minutes: 60,
            meeting_url: None,
            max_participants: 100,
        }
    }
}

/// Response of `POST /live-classes/{id}/join`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JoinResult {
    #[serde(default)]
    pub meeting_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mentor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, alias = "photoUrl")]
    pub photo_url: Option<String>,
    #[serde(default, alias = "isActive")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default = "default_faq_category")]
    pub category: String,
    #[serde(default)]
    pub order: i32,
}

fn default_faq_category() -> String {
    "general".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqInput {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub order: i32,
}

impl Default for FaqInput {
    fn default() -> Self {
        Self {
            question: String::new(),
            answer: String::new(),
            category: default_faq_category(),
            order: 0,
        }
    }
}

impl From<&Faq> for FaqInput {
    fn from(faq: &Faq) -> Self {
        Self {
            question: faq.question.clone(),
            answer: faq.answer.clone(),
            category: faq.category.clone(),
            order: faq.order,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    /// Categories shown until the backend provides its own.
    pub fn defaults() -> Vec<Category> {
        vec![
            Category::new("web", "Web Development"),
            Category::new("mobile", "Mobile Apps"),
            Category::new("backend", "Backend"),
            Category::new("frontend", "Frontend"),
            Category::new("data", "Data Science"),
            Category::new("devops", "DevOps"),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    #[serde(alias = "ctaText")]
    pub cta_text: String,
    #[serde(default, alias = "badgeText")]
    pub badge_text: String,
    #[serde(default, alias = "backgroundImage")]
    pub background_image: Option<String>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title: "Start your coding career now".to_string(),
            subtitle: "Learn to code from zero to expert with experienced mentors.".to_string(),
            cta_text: "Start learning".to_string(),
            badge_text: "Coding Course Academic for Developer".to_string(),
            background_image: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub courses: u64,
    pub students: u64,
    pub articles: u64,
    pub mentors: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub course_id: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: OrderStatus,
    pub payment_method: String,
    #[serde(default)]
    pub va_number: Option<String>,
    #[serde(default, deserialize_with = "timestamp")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certificate {
    pub id: String,
    pub course_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub course_title: String,
    #[serde(default)]
    pub certificate_number: String,
    #[serde(default, deserialize_with = "timestamp")]
    pub issued_at: Option<String>,
    #[serde(default)]
    pub signed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    pub price_monthly: f64,
    pub price_yearly: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub response: String,
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Format an amount of rupiah with dot thousands separators: `Rp 150.000`.
pub fn format_rupiah(amount: f64) -> String {
    let whole = amount.round().max(0.0) as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    format!("Rp {out}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_course_decodes_from_rest_and_documents() {
        let rest: Course = serde_json::from_value(json!({
            "id": "c1",
            "title": "Rust 101",
            "description": "Ownership and borrowing",
            "price": 150000.0,
            "is_free": false,
            "category": "backend",
            "level": "intermediate",
            "duration_hours": 12,
            "instructor": "Firza Ilmi",
            "created_at": "2024-01-02T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        }))
        .unwrap();

        let doc: Course = serde_json::from_value(json!({
            "id": "c1",
            "title": "Rust 101",
            "description": "Ownership and borrowing",
            "price": 150000.0,
            "isFree": false,
            "category": "backend",
            "level": "intermediate",
            "durationHours": 12,
            "createdAt": { "seconds": 1704153600, "nanoseconds": 0 },
            "status": "published"
        }))
        .unwrap();

        assert_eq!(rest.id, doc.id);
        assert_eq!(rest.title, doc.title);
        assert_eq!(rest.is_free, doc.is_free);
        assert_eq!(rest.duration_hours, doc.duration_hours);
        assert_eq!(rest.instructor, doc.instructor);
        assert_eq!(doc.created_at.as_deref(), Some("1704153600"));
    }

    #[test]
    fn test_live_session_status_defaults_to_scheduled() {
        let session: LiveSession = serde_json::from_value(json!({
            "id": "l1",
            "title": "Q&A",
            "scheduled_at": "2030-01-01T10:00:00Z",
            "max_participants": 2,
            "participants_count": 2
        }))
        .unwrap();
        assert_eq!(session.status, SessionStatus::Scheduled);
        assert!(session.is_full());

        let live: LiveSession =
            serde_json::from_value(json!({ "id": "l2", "title": "Now", "status": "live" })).unwrap();
        assert_eq!(live.status, SessionStatus::Live);
        assert!(!live.is_full());
    }

    #[test]
    fn test_article_reading_time_and_search() {
        let article = Article {
            id: "a1".into(),
            slug: "tips-belajar".into(),
            title: "Tips Belajar Rust".into(),
            excerpt: Some("Cara cepat memahami lifetimes".into()),
            content: "word ".repeat(401),
            thumbnail: None,
            category: "tips".into(),
            tags: vec![],
            author: "Firza Ilmi".into(),
            views: 0,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(article.reading_minutes(), 3);
        assert!(article.matches_search("rust"));
        assert!(article.matches_search("LIFETIMES"));
        assert!(article.matches_search("  "));
        assert!(!article.matches_search("python"));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = UserInfo {
            id: "1".into(),
            email: "user@example.com".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "user@example.com");
        user.name = "A".into();
        assert_eq!(user.display_name(), "A");
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(999.0), "Rp 999");
        assert_eq!(format_rupiah(150000.0), "Rp 150.000");
        assert_eq!(format_rupiah(1250000.0), "Rp 1.250.000");
    }
}
