//! Logo header shown above the sign-in and password forms.

use leptos::prelude::*;

pub const LOGO_SRC: &str = "/images/logo.png";

#[component]
pub fn AuthHeader() -> impl IntoView {
    view! {
        <header class="auth-header">
            <img class="auth-header__logo" src=LOGO_SRC alt="School Testing" width="160" height="48"/>
        </header>
    }
}
