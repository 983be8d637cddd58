//! Authentication endpoints.
//!
//! All sign-in flows return a bearer token. Regular users also get their
//! [`UserInfo`]; the admin endpoint only confirms the flag.

use serde::Serialize;
use store::session::{AdminAuthResponse, AuthResponse};

use crate::{ApiClient, ApiError, UserInfo};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminLoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// The Google ID token from the sign-in button.
#[derive(Debug, Clone, Serialize)]
pub struct GoogleLoginRequest<'a> {
    pub token: &'a str,
}

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.post("/auth/login", &LoginRequest { email, password })
            .await
    }

    pub async fn register(&self, request: &RegisterRequest<'_>) -> Result<AuthResponse, ApiError> {
        self.post("/auth/register", request).await
    }

    pub async fn admin_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminAuthResponse, ApiError> {
        self.post("/auth/admin", &AdminLoginRequest { username, password })
            .await
    }

    pub async fn google_login(&self, id_token: &str) -> Result<AuthResponse, ApiError> {
        self.post("/auth/google", &GoogleLoginRequest { token: id_token })
            .await
    }

    /// The user behind the current token.
    pub async fn me(&self) -> Result<UserInfo, ApiError> {
        self.get("/auth/me").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_omits_missing_phone() {
        let body = serde_json::to_value(RegisterRequest {
            name: "Sari",
            email: "sari@example.com",
            password: "rahasia123",
            phone: None,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "name": "Sari", "email": "sari@example.com", "password": "rahasia123" })
        );
    }

    #[test]
    fn test_login_response_decodes() {
        let response: AuthResponse =
            crate::decode_body(200, r#"{"token":"t1","user":{"id":1,"email":"a@b.c","name":"A"}}"#)
                .unwrap();
        assert_eq!(response.token, "t1");
        assert_eq!(response.user.id, "1");

        let admin: AdminAuthResponse = crate::decode_body(200, r#"{"token":"adm"}"#).unwrap();
        assert!(admin.is_admin);
    }
}
