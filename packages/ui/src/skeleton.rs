//! Loading skeletons and the empty-state placeholder.

use dioxus::prelude::*;

use crate::icons::FaBoxOpen;
use crate::Icon;

/// What a list view should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Empty,
    Ready,
}

/// Skeletons only while nothing has arrived yet; a finished load with no
/// items is an empty state, never an endless skeleton.
pub fn list_state(loading: bool, len: usize) -> ListState {
    match (loading, len) {
        (true, 0) => ListState::Loading,
        (false, 0) => ListState::Empty,
        _ => ListState::Ready,
    }
}

#[component]
pub fn CardSkeleton() -> Element {
    rsx! {
        div {
            class: "card skeleton-card",
            div { class: "skeleton skeleton-thumb" }
            div {
                class: "card-body",
                div { class: "skeleton skeleton-line short" }
                div { class: "skeleton skeleton-line" }
                div { class: "skeleton skeleton-line" }
            }
        }
    }
}

#[component]
pub fn SkeletonGrid(#[props(default = 6)] count: usize) -> Element {
    rsx! {
        div {
            class: "card-grid",
            for i in 0..count {
                CardSkeleton { key: "{i}" }
            }
        }
    }
}

#[component]
pub fn ContentPlaceholder(
    title: String,
    #[props(default)] message: String,
) -> Element {
    rsx! {
        div {
            class: "empty-state",
            Icon { icon: FaBoxOpen, width: 40, height: 40 }
            h3 { "{title}" }
            if !message.is_empty() {
                p { class: "muted", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{ContentStore, RestContent};

    #[test]
    fn test_list_state() {
        assert_eq!(list_state(true, 0), ListState::Loading);
        assert_eq!(list_state(false, 0), ListState::Empty);
        assert_eq!(list_state(false, 3), ListState::Ready);
        // data already on screen stays visible while a refresh runs
        assert_eq!(list_state(true, 3), ListState::Ready);
    }

    #[test]
    fn test_empty_rest_load_ends_skeleton() {
        let mut store = ContentStore::default();
        assert_eq!(
            list_state(store.loading, store.articles.len()),
            ListState::Loading
        );

        store.apply_rest(RestContent::default());
        assert_eq!(
            list_state(store.loading, store.articles.len()),
            ListState::Empty
        );
    }
}
