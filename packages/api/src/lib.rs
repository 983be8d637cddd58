//! # API crate: typed client for the Mavecode REST backend
//!
//! Every call the web client makes to the backend goes through
//! [`ApiClient`]. It owns the base URL and the bearer token, so views never
//! assemble URLs or headers themselves.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Login, registration, admin and Google sign-in, `GET /auth/me` |
//! | [`catalog`] | Courses, videos, progress, articles, live classes |
//! | [`landing`] | Hero, FAQs, categories, stats, contact, chat, seeding |
//! | [`commerce`] | Orders, subscriptions, certificates |
//! | [`error`] | [`ApiError`] and its user-facing messages |
//!
//! Responses decode into the models in [`store::models`], the same structs
//! the real-time feed produces.

use reqwest::{Method, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

pub mod auth;
pub mod catalog;
pub mod commerce;
pub mod error;
pub mod landing;

pub use error::ApiError;
pub use store::models::UserInfo;

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &store::AppConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    /// Attach (or clear) the bearer token sent with every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_body(status, &body)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Self::send(self.request(Method::GET, path)).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        Self::send(self.request(Method::GET, path).query(query)).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        Self::send(self.request(Method::POST, path).json(body)).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        Self::send(self.request(Method::PUT, path).json(body)).await
    }

    /// POST without a body, ignoring whatever acknowledgement comes back.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        Self::send::<IgnoredAny>(self.request(Method::POST, path))
            .await
            .map(|_| ())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        Self::send::<IgnoredAny>(self.request(Method::DELETE, path))
            .await
            .map(|_| ())
    }
}

/// Turn a status and body into a typed result.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body));
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::models::Course;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("https://api.mavecode.my.id/api/");
        assert_eq!(client.base_url(), "https://api.mavecode.my.id/api");
        assert_eq!(client.url("/courses"), "https://api.mavecode.my.id/api/courses");
        assert_eq!(client.url("auth/me"), "https://api.mavecode.my.id/api/auth/me");
    }

    #[test]
    fn test_token_is_carried() {
        let client = ApiClient::new("http://localhost:8000/api");
        assert_eq!(client.token(), None);
        let client = client.with_token(Some("t1".into()));
        assert_eq!(client.token(), Some("t1"));
        assert_eq!(client.with_token(None).token(), None);
    }

    #[test]
    fn test_decode_body() {
        let courses: Vec<Course> = decode_body(
            200,
            r#"[{"id":"c1","title":"Rust","created_at":"2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();
        assert_eq!(courses[0].instructor, "Firza Ilmi");

        let err = decode_body::<Vec<Course>>(404, r#"{"detail":"Course not found"}"#).unwrap_err();
        assert_eq!(err.status(), Some(404));

        let err = decode_body::<Vec<Course>>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
