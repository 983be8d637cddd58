//! Courses, lessons, progress, articles and live classes.

use store::models::{
    Article, ArticleInput, Course, CourseInput, JoinResult, LiveSession, LiveSessionInput,
    Progress, Video,
};

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Published courses, optionally narrowed to one category.
    pub async fn courses(&self, category: Option<&str>) -> Result<Vec<Course>, ApiError> {
        match category {
            Some(category) => self.get_query("/courses", &[("category", category)]).await,
            None => self.get("/courses").await,
        }
    }

    pub async fn course(&self, id: &str) -> Result<Course, ApiError> {
        self.get(&format!("/courses/{id}")).await
    }

    pub async fn create_course(&self, input: &CourseInput) -> Result<Course, ApiError> {
        self.post("/courses", input).await
    }

    pub async fn update_course(&self, id: &str, input: &CourseInput) -> Result<Course, ApiError> {
        self.put(&format!("/courses/{id}"), input).await
    }

    pub async fn delete_course(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/courses/{id}")).await
    }

    /// Lessons of a course, in the backend's order.
    pub async fn videos(&self, course_id: &str) -> Result<Vec<Video>, ApiError> {
        let mut videos: Vec<Video> = self.get(&format!("/courses/{course_id}/videos")).await?;
        videos.sort_by_key(|v| v.order);
        Ok(videos)
    }

    pub async fn progress(&self, course_id: &str) -> Result<Vec<Progress>, ApiError> {
        self.get(&format!("/progress/{course_id}")).await
    }

    pub async fn save_progress(&self, record: &Progress) -> Result<(), ApiError> {
        self.post::<_, serde::de::IgnoredAny>("/progress", record)
            .await
            .map(|_| ())
    }

    pub async fn articles(&self, category: Option<&str>) -> Result<Vec<Article>, ApiError> {
        match category {
            Some(category) => self.get_query("/articles", &[("category", category)]).await,
            None => self.get("/articles").await,
        }
    }

    pub async fn article(&self, slug: &str) -> Result<Article, ApiError> {
        self.get(&format!("/articles/{slug}")).await
    }

    pub async fn create_article(&self, input: &ArticleInput) -> Result<Article, ApiError> {
        self.post("/articles", input).await
    }

    pub async fn update_article(&self, id: &str, input: &ArticleInput) -> Result<Article, ApiError> {
        self.put(&format!("/articles/{id}"), input).await
    }

    pub async fn delete_article(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/articles/{id}")).await
    }

    pub async fn live_classes(&self) -> Result<Vec<LiveSession>, ApiError> {
        self.get("/live-classes").await
    }

    pub async fn create_live_class(&self, input: &LiveSessionInput) -> Result<LiveSession, ApiError> {
        self.post("/live-classes", input).await
    }

    pub async fn delete_live_class(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/live-classes/{id}")).await
    }

    /// Register for a live class; the meeting link comes back if one is set.
    pub async fn join_live_class(&self, id: &str) -> Result<JoinResult, ApiError> {
        self.post(&format!("/live-classes/{id}/join"), &serde_json::json!({}))
            .await
    }
}
