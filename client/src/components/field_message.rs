//! Inline validation message for one form field.

use std::collections::BTreeMap;

use leptos::prelude::*;

/// Shows the error recorded for `path`, rendering nothing when there is none.
#[component]
pub fn FieldMessage(errors: RwSignal<BTreeMap<String, String>>, path: &'static str) -> impl IntoView {
    let message = move || errors.with(|map| map.get(path).cloned());
    view! {
        <Show when=move || message().is_some()>
            <p class="field-message" role="alert">{move || message().unwrap_or_default()}</p>
        </Show>
    }
}
