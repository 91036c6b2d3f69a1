//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{
    api_docs::ApiDocsPage, create_test::CreateTestPage, dashboard::DashboardPage, login::LoginPage,
    new_password::NewPasswordPage, new_school::NewSchoolPage,
};
use crate::state::auth::AuthState;
use crate::util::auth::install_session_sync;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context, keeps it in sync with the provider session and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    install_session_sync(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/schooltest.css"/>
        <Title text="School Testing"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("new-password") view=NewPasswordPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("tests"), StaticSegment("new")) view=CreateTestPage/>
                <Route path=(StaticSegment("schools"), StaticSegment("new")) view=NewSchoolPage/>
                <Route path=StaticSegment("api-docs") view=ApiDocsPage/>
            </Routes>
        </Router>
    }
}
