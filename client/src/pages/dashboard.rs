//! Student dashboard: role-aware greeting plus the news feed.
//! Redirects to `/login` once the session has loaded and is absent.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::news_content::NewsContent;
use crate::components::test_page_layout::TestPageLayout;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

pub(crate) fn greeting(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => format!("Welcome back, {}!", name.trim()),
        _ => "Welcome back!".to_owned(),
    }
}

pub(crate) fn role_label(role: Option<&Role>) -> String {
    role.map_or_else(|| "Role not assigned".to_owned(), |r| format!("Signed in as {r}"))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let title = move || auth.with(|a| greeting(a.display_name()));
    let role = move || auth.with(|a| role_label(a.role.as_ref()));
    let can_author = move || auth.with(|a| a.role.as_ref().is_some_and(Role::can_author_tests));

    view! {
        <TestPageLayout title="Dashboard">
            <section class="dashboard-page__intro">
                <h2>{title}</h2>
                <p class="dashboard-page__role">{role}</p>
                <Show when=can_author>
                    <a class="btn btn--primary" href="/tests/new">"+ New Test"</a>
                </Show>
            </section>
            <NewsContent/>
        </TestPageLayout>
    }
}
