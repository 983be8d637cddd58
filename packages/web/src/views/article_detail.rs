//! A single article rendered from Markdown, with bookmark and share actions.

use dioxus::prelude::*;
use store::Bookmarks;
use ui::icons::{FaBookmark, FaClock, FaEye, FaUser};
use ui::platform::{current_url, make_storage, scroll_to_top, short_date};
use ui::{
    render_markdown, toast_error, toast_success, use_auth, use_content, use_toasts, ArticleCard,
    ContentPlaceholder, Icon, ShareButtons,
};

#[component]
pub fn ArticleDetail(slug: String) -> Element {
    let content = use_content();
    let auth = use_auth();
    let mut toasts = use_toasts();
    let mut bookmarks = use_signal(|| Bookmarks::load(make_storage()));

    let cached = content.read().article_by_slug(&slug).cloned();
    let article_slug = slug.clone();
    // the REST copy also bumps the view counter
    let fetched = use_resource(use_reactive!(|article_slug| async move {
        scroll_to_top();
        let client = auth.peek().api();
        client.article(&article_slug).await
    }));

    let remote = fetched.read().as_ref().and_then(|r| r.as_ref().ok().cloned());
    let Some(article) = remote.or(cached) else {
        return if fetched.read().is_none() {
            rsx! { div { class: "page-loading", "Loading..." } }
        } else {
            rsx! {
                ContentPlaceholder {
                    title: "Article not found",
                    message: "It may have been moved or unpublished.",
                }
            }
        };
    };

    let html = render_markdown(&article.content);
    let saved = bookmarks.read().is_saved(&article.slug);
    let date = article.created_at.as_deref().map(short_date).unwrap_or_default().to_string();
    let share_url = current_url().unwrap_or_else(|| format!("https://mavecode.my.id/articles/{}", article.slug));
    let related: Vec<_> = content
        .read()
        .articles
        .iter()
        .filter(|a| a.category == article.category && a.id != article.id)
        .take(3)
        .cloned()
        .collect();

    let toggle_bookmark = {
        let slug = article.slug.clone();
        move |_| {
            let result = bookmarks.write().toggle(&slug);
            match result {
                Ok(true) => toast_success(&mut toasts, "Article saved"),
                Ok(false) => toast_success(&mut toasts, "Removed from saved articles"),
                Err(e) => toast_error(&mut toasts, &format!("Could not save article: {e}")),
            }
        }
    };

    rsx! {
        article {
            class: "article",
            header {
                class: "article-header",
                span { class: "card-category", "{article.category}" }
                h1 { "{article.title}" }
                div {
                    class: "card-meta",
                    span { Icon { icon: FaUser, width: 12, height: 12 } " {article.author}" }
                    span { "{date}" }
                    span { Icon { icon: FaClock, width: 12, height: 12 } " {article.reading_minutes()} min read" }
                    span { Icon { icon: FaEye, width: 12, height: 12 } " {article.views}" }
                }
                div {
                    class: "article-actions",
                    button {
                        class: if saved { "btn btn-primary btn-sm" } else { "btn btn-outline btn-sm" },
                        onclick: toggle_bookmark,
                        Icon { icon: FaBookmark, width: 12, height: 12 }
                        if saved { " Saved" } else { " Save" }
                    }
                    ShareButtons { url: share_url, title: article.title.clone() }
                }
            }
            if let Some(thumb) = &article.thumbnail {
                img { class: "article-cover", src: "{thumb}", alt: "{article.title}" }
            }
            div {
                class: "article-body prose",
                dangerous_inner_html: "{html}",
            }
            if !article.tags.is_empty() {
                div {
                    class: "chip-row",
                    for tag in article.tags.iter() {
                        span { key: "{tag}", class: "chip", "#{tag}" }
                    }
                }
            }
        }
        if !related.is_empty() {
            section {
                class: "section",
                h2 { "Related articles" }
                div {
                    class: "card-grid",
                    for article in related {
                        ArticleCard { key: "{article.id}", article }
                    }
                }
            }
        }
    }
}
