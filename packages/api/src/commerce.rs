//! Orders, subscription plans and course certificates.

use store::checkout::OrderRequest;
use store::models::{Certificate, Order, SubscriptionPlan};

use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn create_order(&self, request: &OrderRequest) -> Result<Order, ApiError> {
        self.post("/orders", request).await
    }

    /// Confirm payment of a pending order.
    pub async fn pay_order(&self, order_id: &str) -> Result<(), ApiError> {
        self.post_empty(&format!("/orders/{order_id}/pay")).await
    }

    pub async fn subscriptions(&self) -> Result<Vec<SubscriptionPlan>, ApiError> {
        self.get("/subscriptions").await
    }

    /// The signed-in user's certificate for a course.
    pub async fn certificate(&self, course_id: &str) -> Result<Certificate, ApiError> {
        self.get(&format!("/certificates/{course_id}")).await
    }

    pub async fn admin_certificates(&self) -> Result<Vec<Certificate>, ApiError> {
        self.get("/admin/certificates").await
    }

    pub async fn sign_certificate(&self, id: &str) -> Result<(), ApiError> {
        self.post_empty(&format!("/admin/certificates/{id}/sign"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use store::models::OrderStatus;

    use super::*;

    #[test]
    fn test_order_decodes() {
        let order: Order = crate::decode_body(
            200,
            r#"{"id":"o1","user_id":"u1","course_id":"c1","amount":150000.0,"status":"pending",
                "payment_method":"bca","va_number":"8808123456","created_at":"2024-05-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.va_number.as_deref(), Some("8808123456"));
    }

    #[test]
    fn test_plans_decode() {
        let plans: Vec<SubscriptionPlan> = crate::decode_body(
            200,
            r#"[{"id":"pro","name":"Pro","price_monthly":99000,"price_yearly":990000,
                 "features":["All courses"],"is_popular":true}]"#,
        )
        .unwrap();
        assert!(plans[0].is_popular);
        assert_eq!(plans[0].features, vec!["All courses"]);
    }
}
