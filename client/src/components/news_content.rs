//! Dashboard news feed.

#[cfg(test)]
#[path = "news_content_test.rs"]
mod news_content_test;

use leptos::prelude::*;

use crate::net::types::NewsItem;

/// Fixed announcements shown on the student dashboard, newest first.
pub fn default_news() -> Vec<NewsItem> {
    [
        ("Mid-term schedule published", "Mid-term tests run from 14 to 18 October. Check each subject page for your slot.", "2024-09-30"),
        ("New practice tests", "Teachers have added practice sets for Mathematics and Physics.", "2024-09-16"),
        ("Password resets", "Use the \"Forgot password\" link on the sign-in page if you cannot log in.", "2024-09-02"),
    ]
    .into_iter()
    .map(|(title, body, date)| NewsItem { title: title.to_owned(), body: body.to_owned(), date: date.to_owned() })
    .collect()
}

/// News section wrapper rendering the fixed feed.
#[component]
pub fn NewsContent() -> impl IntoView {
    view! {
        <section class="news-content">
            <h2 class="news-content__title">"News"</h2>
            <NewsList items=default_news()/>
        </section>
    }
}

#[component]
pub fn NewsList(items: Vec<NewsItem>) -> impl IntoView {
    view! {
        <ul class="news-list">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <li class="news-list__item">
                            <h3 class="news-list__title">{item.title}</h3>
                            <time class="news-list__date">{item.date}</time>
                            <p class="news-list__body">{item.body}</p>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
