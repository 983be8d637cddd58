//! Checkout dialog for paid courses.
//!
//! Drives a [`Checkout`] through its three steps. The gateway is simulated:
//! after the order is created the dialog waits two seconds and then confirms
//! the payment with `POST /orders/{id}/pay`.

use std::time::Duration;

use dioxus::prelude::*;
use store::checkout::{methods_in, Checkout, CheckoutStep, MethodGroup};
use store::models::{format_rupiah, Course};

use crate::auth::use_auth;
use crate::icons::{FaCircleCheck, FaCreditCard, FaWallet};
use crate::platform;
use crate::toast::{toast_error, toast_success, use_toasts};
use crate::views::ModalOverlay;
use crate::Icon;

const SIMULATED_GATEWAY_DELAY: Duration = Duration::from_secs(2);

#[component]
pub fn PaymentModal(course: Course, on_close: EventHandler<()>, on_success: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut toasts = use_toasts();
    let course_id = course.id.clone();
    let mut checkout = use_signal(move || Checkout::new(course_id));
    let mut busy = use_signal(|| false);

    let pay = move |_| {
        let request = match checkout.peek().order_request() {
            Ok(request) => request,
            Err(message) => {
                toast_error(&mut toasts, message);
                return;
            }
        };
        busy.set(true);
        spawn(async move {
            let client = auth.peek().api();
            let order = match client.create_order(&request).await {
                Ok(order) => order,
                Err(e) => {
                    toast_error(&mut toasts, &e.user_message());
                    busy.set(false);
                    return;
                }
            };
            let order_id = order.id.clone();
            checkout.write().order_created(order);

            platform::sleep(SIMULATED_GATEWAY_DELAY).await;
            match client.pay_order(&order_id).await {
                Ok(()) => {
                    checkout.write().payment_confirmed();
                    toast_success(&mut toasts, "Payment successful! The course is now unlocked.");
                    on_success.call(());
                }
                Err(e) => toast_error(&mut toasts, &e.user_message()),
            }
            busy.set(false);
        });
    };

    let state = checkout.read().clone();

    rsx! {
        ModalOverlay {
            on_close: move |_| {
                if !busy() {
                    on_close.call(());
                }
            },
            div {
                class: "modal-body payment-modal",
                h2 { "{state.step.title()}" }
                div {
                    class: "payment-summary",
                    span { "{course.title}" }
                    strong { "{format_rupiah(course.price)}" }
                }
                {match &state.step {
                    CheckoutStep::SelectMethod => rsx! {
                        for group in [MethodGroup::VirtualAccount, MethodGroup::EWallet] {
                            div {
                                key: "{group.label()}",
                                class: "payment-group",
                                h4 {
                                    if group == MethodGroup::VirtualAccount {
                                        Icon { icon: FaCreditCard, width: 14, height: 14 }
                                    } else {
                                        Icon { icon: FaWallet, width: 14, height: 14 }
                                    }
                                    " {group.label()}"
                                }
                                div {
                                    class: "payment-options",
                                    for method in methods_in(group) {
                                        button {
                                            key: "{method.id}",
                                            class: if state.method.map(|m| m.id) == Some(method.id) { "payment-option selected" } else { "payment-option" },
                                            onclick: move |_| {
                                                checkout.write().select(method.id);
                                            },
                                            "{method.name}"
                                        }
                                    }
                                }
                            }
                        }
                        button {
                            class: "btn btn-primary btn-block",
                            disabled: busy() || state.method.is_none(),
                            onclick: pay,
                            if busy() { "Processing..." } else { "Pay now" }
                        }
                    },
                    CheckoutStep::AwaitingPayment(order) => rsx! {
                        div {
                            class: "payment-waiting",
                            div { class: "spinner" }
                            if let Some(va) = &order.va_number {
                                p { "Virtual account number" }
                                code { class: "va-number", "{va}" }
                            }
                            p { class: "muted", "Waiting for payment confirmation..." }
                        }
                    },
                    CheckoutStep::Paid => rsx! {
                        div {
                            class: "payment-success",
                            Icon { icon: FaCircleCheck, width: 48, height: 48 }
                            p { "You can start learning right away." }
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| on_close.call(()),
                                "Start learning"
                            }
                        }
                    },
                }}
            }
        }
    }
}
