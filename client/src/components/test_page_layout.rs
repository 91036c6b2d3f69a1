//! Two-column layout for test pages: navigation sidebar plus header and content.

#[cfg(test)]
#[path = "test_page_layout_test.rs"]
mod test_page_layout_test;

use leptos::prelude::*;

/// Sidebar navigation entries as `(label, href)`.
pub const NAV_ITEMS: [(&str, &str); 4] = [
    ("Dashboard", "/dashboard"),
    ("Create Test", "/tests/new"),
    ("Schools", "/schools/new"),
    ("API Docs", "/api-docs"),
];

#[component]
pub fn TestPageLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="test-layout">
            <Sidebar/>
            <div class="test-layout__main">
                <Header title=title/>
                <main class="test-layout__content">{children()}</main>
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <ul class="sidebar__list">
                {NAV_ITEMS
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <li class="sidebar__item">
                                <a class="sidebar__link" href=*href>{*label}</a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}

#[component]
pub fn Header(title: String) -> impl IntoView {
    view! {
        <header class="test-layout__header">
            <h1>{title}</h1>
        </header>
    }
}
