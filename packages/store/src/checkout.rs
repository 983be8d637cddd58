//! # Checkout flow for a paid course
//!
//! Three steps, always in this order:
//!
//! ```text
//! SelectMethod ──create order──▶ AwaitingPayment(order) ──confirm──▶ Paid
//! ```
//!
//! The order is created on the server with the chosen method id; the virtual
//! account number (if any) comes back on the [`Order`].

use serde::Serialize;

use crate::models::Order;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MethodGroup {
    VirtualAccount,
    EWallet,
}

impl MethodGroup {
    pub fn label(&self) -> &'static str {
        match self {
            MethodGroup::VirtualAccount => "Bank Virtual Account",
            MethodGroup::EWallet => "E-Wallet / QRIS",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id: &'static str,
    pub name: &'static str,
    pub group: MethodGroup,
}

const fn method(id: &'static str, name: &'static str, group: MethodGroup) -> PaymentMethod {
    PaymentMethod { id, name, group }
}

pub static PAYMENT_METHODS: [PaymentMethod; 8] = [
    method("bca", "BCA Virtual Account", MethodGroup::VirtualAccount),
    method("mandiri", "Mandiri Virtual Account", MethodGroup::VirtualAccount),
    method("bni", "BNI Virtual Account", MethodGroup::VirtualAccount),
    method("bri", "BRI Virtual Account", MethodGroup::VirtualAccount),
    method("gopay", "GoPay", MethodGroup::EWallet),
    method("ovo", "OVO", MethodGroup::EWallet),
    method("dana", "DANA", MethodGroup::EWallet),
    method("shopeepay", "ShopeePay", MethodGroup::EWallet),
];

pub fn methods_in(group: MethodGroup) -> impl Iterator<Item = &'static PaymentMethod> {
    PAYMENT_METHODS.iter().filter(move |m| m.group == group)
}

pub fn find_method(id: &str) -> Option<&'static PaymentMethod> {
    PAYMENT_METHODS.iter().find(|m| m.id == id)
}

/// Body of `POST /orders`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    pub course_id: String,
    pub payment_method: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CheckoutStep {
    SelectMethod,
    AwaitingPayment(Order),
    Paid,
}

impl CheckoutStep {
    pub fn title(&self) -> &'static str {
        match self {
            CheckoutStep::SelectMethod => "Choose payment",
            CheckoutStep::AwaitingPayment(_) => "Complete payment",
            CheckoutStep::Paid => "Payment successful",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Checkout {
    pub course_id: String,
    pub method: Option<&'static PaymentMethod>,
    pub step: CheckoutStep,
}

impl Checkout {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            method: None,
            step: CheckoutStep::SelectMethod,
        }
    }

    /// Pick a method. Only possible before the order exists.
    pub fn select(&mut self, id: &str) -> bool {
        if self.step != CheckoutStep::SelectMethod {
            return false;
        }
        match find_method(id) {
            Some(method) => {
                self.method = Some(method);
                true
            }
            None => false,
        }
    }

    pub fn order_request(&self) -> Result<OrderRequest, &'static str> {
        let method = self.method.ok_or("Choose a payment method first")?;
        Ok(OrderRequest {
            course_id: self.course_id.clone(),
            payment_method: method.id.to_string(),
        })
    }

    pub fn order_created(&mut self, order: Order) {
        if self.step == CheckoutStep::SelectMethod {
            self.step = CheckoutStep::AwaitingPayment(order);
        }
    }

    /// The order awaiting payment, if any.
    pub fn order(&self) -> Option<&Order> {
        match &self.step {
            CheckoutStep::AwaitingPayment(order) => Some(order),
            _ => None,
        }
    }

    pub fn payment_confirmed(&mut self) {
        if matches!(self.step, CheckoutStep::AwaitingPayment(_)) {
            self.step = CheckoutStep::Paid;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderStatus;

    fn order() -> Order {
        Order {
            id: "o1".into(),
            user_id: "u1".into(),
            course_id: "c1".into(),
            amount: 150_000.0,
            status: OrderStatus::Pending,
            payment_method: "bca".into(),
            va_number: Some("8808123456".into()),
            created_at: None,
        }
    }

    #[test]
    fn test_method_groups() {
        let va: Vec<_> = methods_in(MethodGroup::VirtualAccount).map(|m| m.id).collect();
        let wallets: Vec<_> = methods_in(MethodGroup::EWallet).map(|m| m.id).collect();
        assert_eq!(va, vec!["bca", "mandiri", "bni", "bri"]);
        assert_eq!(wallets, vec!["gopay", "ovo", "dana", "shopeepay"]);
    }

    #[test]
    fn test_order_needs_a_method() {
        let mut checkout = Checkout::new("c1");
        assert!(checkout.order_request().is_err());
        assert!(!checkout.select("paypal"));
        assert!(checkout.select("ovo"));
        assert_eq!(
            checkout.order_request().unwrap(),
            OrderRequest {
                course_id: "c1".into(),
                payment_method: "ovo".into()
            }
        );
    }

    #[test]
    fn test_steps_advance_in_order() {
        let mut checkout = Checkout::new("c1");
        checkout.payment_confirmed();
        assert_eq!(checkout.step, CheckoutStep::SelectMethod);

        checkout.select("bca");
        checkout.order_created(order());
        assert_eq!(checkout.order().unwrap().va_number.as_deref(), Some("8808123456"));
        assert!(!checkout.select("ovo"));

        checkout.payment_confirmed();
        assert_eq!(checkout.step, CheckoutStep::Paid);
        assert!(checkout.order().is_none());
    }
}
