//! Landing page content, contact form, chat assistant and demo seeding.

use store::chat::ChatRequest;
use store::content::RestContent;
use store::models::{Category, ChatReply, ContactMessage, Faq, FaqInput, HeroContent, Stats};

use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn hero(&self) -> Result<HeroContent, ApiError> {
        self.get("/hero").await
    }

    pub async fn update_hero(&self, hero: &HeroContent) -> Result<(), ApiError> {
        self.put::<_, serde::de::IgnoredAny>("/hero", hero)
            .await
            .map(|_| ())
    }

    pub async fn faqs(&self) -> Result<Vec<Faq>, ApiError> {
        let mut faqs: Vec<Faq> = self.get("/faqs").await?;
        faqs.sort_by_key(|f| f.order);
        Ok(faqs)
    }

    pub async fn create_faq(&self, input: &FaqInput) -> Result<Faq, ApiError> {
        self.post("/faqs", input).await
    }

    pub async fn update_faq(&self, id: &str, input: &FaqInput) -> Result<Faq, ApiError> {
        self.put(&format!("/faqs/{id}"), input).await
    }

    pub async fn delete_faq(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/faqs/{id}")).await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/categories").await
    }

    pub async fn stats(&self) -> Result<Stats, ApiError> {
        self.get("/stats").await
    }

    pub async fn send_contact(&self, message: &ContactMessage) -> Result<(), ApiError> {
        self.post::<_, serde::de::IgnoredAny>("/contact", message)
            .await
            .map(|_| ())
    }

    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        self.post("/chat", request).await
    }

    /// Populate the backend with demo content.
    pub async fn seed(&self) -> Result<(), ApiError> {
        self.post_empty("/seed").await
    }

    /// Fetch every landing list at once for the REST data path.
    ///
    /// A failing list comes back empty; its error is returned alongside so
    /// the caller can tell the visitor.
    pub async fn rest_content(&self) -> (RestContent, Vec<ApiError>) {
        let (hero, courses, articles, live, categories, faqs) = futures::join!(
            self.hero(),
            self.courses(None),
            self.articles(None),
            self.live_classes(),
            self.categories(),
            self.faqs(),
        );

        let mut errors = Vec::new();
        let content = RestContent {
            hero: keep("hero", hero, &mut errors),
            courses: keep("courses", courses, &mut errors).unwrap_or_default(),
            articles: keep("articles", articles, &mut errors).unwrap_or_default(),
            live_sessions: keep("live classes", live, &mut errors).unwrap_or_default(),
            categories: keep("categories", categories, &mut errors).unwrap_or_default(),
            faqs: keep("faqs", faqs, &mut errors).unwrap_or_default(),
        };
        (content, errors)
    }
}

fn keep<T>(what: &str, result: Result<T, ApiError>, errors: &mut Vec<ApiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("failed to fetch {what}: {e}");
            errors.push(e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_backend_yields_empty_lists() {
        // port 9 (discard) on loopback refuses connections
        let client = ApiClient::new("http://127.0.0.1:9/api");
        let (content, errors) = client.rest_content().await;
        assert_eq!(content, RestContent::default());
        assert_eq!(errors.len(), 6);
        assert!(errors.iter().all(|e| matches!(e, ApiError::Network(_))));
    }

    #[test]
    fn test_chat_request_shape() {
        let body = serde_json::to_value(ChatRequest {
            message: "halo".into(),
            session_id: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "message": "halo", "session_id": null }));
    }
}
