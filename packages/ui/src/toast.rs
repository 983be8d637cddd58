use std::time::Duration;

use dioxus::prelude::*;

use crate::platform;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// How long a toast stays up before it dismisses itself.
const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Error => "toast error",
            ToastKind::Warning => "toast warning",
            ToastKind::Success => "toast success",
            ToastKind::Info => "toast info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            kind,
            message: message.to_string(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show a toast and schedule its removal.
///
/// The timer runs in the root scope, so it outlives the component that
/// pushed the toast.
pub fn push_toast(toasts: &mut Signal<Toasts>, kind: ToastKind, message: &str) {
    let id = toasts.write().push(kind, message);
    let mut toasts = *toasts;
    spawn_forever(async move {
        platform::sleep(TOAST_TTL).await;
        if let Ok(mut entries) = toasts.try_write() {
            entries.dismiss(id);
        }
    });
}

pub fn toast_success(toasts: &mut Signal<Toasts>, message: &str) {
    push_toast(toasts, ToastKind::Success, message);
}

pub fn toast_error(toasts: &mut Signal<Toasts>, message: &str) {
    tracing::error!("{message}");
    push_toast(toasts, ToastKind::Error, message);
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        {children}
        ToastViewport {}
    }
}

#[component]
fn ToastViewport() -> Element {
    let mut toasts = use_toasts();
    let entries = toasts().entries.clone();

    rsx! {
        document::Stylesheet { href: TOAST_CSS }

        div {
            class: "toast-viewport",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    onclick: move |_| toasts.write().dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_push_and_dismiss() {
        let mut toasts = Toasts::default();
        let first = toasts.push(ToastKind::Info, "hello");
        let second = toasts.push(ToastKind::Error, "boom");
        assert_ne!(first, second);

        toasts.dismiss(first);
        assert_eq!(toasts.entries.len(), 1);
        assert_eq!(toasts.entries[0].message, "boom");

        toasts.dismiss(first);
        assert_eq!(toasts.entries.len(), 1);
    }

    #[derive(Props, Clone, PartialEq)]
    struct ShellProps {
        visible: Rc<Cell<usize>>,
    }

    #[allow(non_snake_case)]
    fn Shell(props: ShellProps) -> Element {
        rsx! {
            ToastProvider {
                Host { visible: props.visible.clone() }
            }
        }
    }

    #[component]
    fn Host(visible: Rc<Cell<usize>>) -> Element {
        let toasts = use_toasts();
        visible.set(toasts.read().entries.len());
        let open = use_signal(|| true);
        rsx! {
            if open() {
                SignInPage { open }
            }
        }
    }

    /// Pushes a toast and immediately leaves, like a login redirect.
    #[component]
    fn SignInPage(open: Signal<bool>) -> Element {
        let mut toasts = use_toasts();
        use_hook(move || {
            let mut open = open;
            spawn(async move {
                toast_success(&mut toasts, "Signed in");
                open.set(false);
            });
        });
        rsx! {}
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_caller_unmounts() {
        let visible = Rc::new(Cell::new(0));
        let mut dom = VirtualDom::new_with_props(
            Shell,
            ShellProps {
                visible: visible.clone(),
            },
        );
        dom.rebuild_in_place();

        let mut shown = false;
        for _ in 0..40 {
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep(Duration::from_millis(500)) => {}
            }
            dom.render_immediate(&mut dioxus::dioxus_core::NoOpMutations);
            shown |= visible.get() == 1;
        }

        assert!(shown, "toast was never rendered");
        assert_eq!(visible.get(), 0, "toast outlived its timeout");
    }
}
