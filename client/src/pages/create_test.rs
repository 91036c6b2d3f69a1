//! Test authoring page: compose custom questions for a test and submit them.

#[cfg(test)]
#[path = "create_test_test.rs"]
mod create_test_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use serde_json::{Map, Value};

use crate::components::field_message::FieldMessage;
use crate::components::test_page_layout::TestPageLayout;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::fetch::FetchError;
use crate::net::types::{QuestionRecord, Role};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ErrorBody;
#[cfg(any(test, feature = "hydrate"))]
use crate::schema::ValidationErrors;
use crate::schema::{CustomQuestionSchema, Schema};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::form::{line_list, number_field, optional_text};

/// `(value, label)` pairs for the question type select.
pub const QUESTION_TYPES: [(&str, &str); 4] = [
    ("multiple_choice", "Multiple choice"),
    ("short_answer", "Short answer"),
    ("numeric", "Numeric"),
    ("true_false", "True / False"),
];

/// `(value, label)` pairs for the answer format select.
pub const ANSWER_FORMATS: [(&str, &str); 3] = [("option", "Pick an option"), ("text", "Free text"), ("number", "Number")];

pub const AUTHOR_ONLY_NOTICE: &str = "Only teachers and admins can add questions.";

/// Whether the observed role may submit questions from this page.
pub(crate) fn can_author(state: &AuthState) -> bool {
    state.role.as_ref().is_some_and(Role::can_author_tests)
}

/// Raw text of the question form, one field per input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionDraft {
    pub test_id: String,
    pub question_text: String,
    pub description: String,
    pub question_type: String,
    pub answer_format: String,
    pub options: String,
    pub correct_answer: String,
    pub numeric_answer: String,
    pub marks: String,
}

impl Default for QuestionDraft {
    fn default() -> Self {
        Self {
            test_id: String::new(),
            question_text: String::new(),
            description: String::new(),
            question_type: QUESTION_TYPES[0].0.to_owned(),
            answer_format: ANSWER_FORMATS[0].0.to_owned(),
            options: String::new(),
            correct_answer: String::new(),
            numeric_answer: String::new(),
            marks: String::new(),
        }
    }
}

impl QuestionDraft {
    /// Clear the per-question fields, keeping the test id and type choices.
    #[must_use]
    pub fn next(&self) -> Self {
        Self {
            test_id: self.test_id.clone(),
            question_type: self.question_type.clone(),
            answer_format: self.answer_format.clone(),
            ..Self::default()
        }
    }
}

/// Build the schema input. Blank required text is left out so the schema
/// reports it as `"Required"`; blank optionals become `null`.
pub(crate) fn question_input(draft: &QuestionDraft, created_by: Option<&str>) -> Value {
    let mut map = Map::new();
    let mut required = |key: &str, raw: &str| {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            map.insert(key.to_owned(), Value::String(trimmed.to_owned()));
        }
    };
    required("fk_test_id", &draft.test_id);
    required("questionText", &draft.question_text);
    required("questionType", &draft.question_type);
    required("answerFormat", &draft.answer_format);
    if let Some(created_by) = created_by {
        required("created_by", created_by);
    }

    map.insert("description".to_owned(), optional_text(&draft.description));
    map.insert("options".to_owned(), line_list(&draft.options));
    map.insert("correctAnswer".to_owned(), optional_text(&draft.correct_answer));
    map.insert("numericAnswer".to_owned(), number_field(&draft.numeric_answer));
    map.insert("marks".to_owned(), number_field(&draft.marks));
    Value::Object(map)
}

/// Field errors from a server-side 422, if that is what `err` is.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn server_field_errors(err: &FetchError) -> Option<BTreeMap<String, String>> {
    match err {
        FetchError::Status { status: 422, body } => {
            let parsed: ErrorBody = serde_json::from_str(body).ok()?;
            Some(ValidationErrors { errors: parsed.errors }.field_map())
        }
        _ => None,
    }
}

#[component]
pub fn CreateTestPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let draft = RwSignal::new(QuestionDraft::default());
    let errors = RwSignal::new(BTreeMap::<String, String>::new());
    let info = RwSignal::new(String::new());
    let created = RwSignal::new(Vec::<QuestionRecord>::new());

    let allowed = move || auth.with(can_author);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !allowed() {
            return;
        }
        let created_by = auth.with(|a| {
            a.session
                .as_ref()
                .and_then(|s| s.user.id.clone().or_else(|| s.user.email.clone()))
        });
        let input = draft.with(|d| question_input(d, created_by.as_deref()));
        let question = match CustomQuestionSchema::validate(&input) {
            Ok(question) => question,
            Err(e) => {
                errors.set(e.field_map());
                return;
            }
        };
        errors.set(BTreeMap::new());
        info.set("Saving question...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_question(&question).await {
                Ok(record) => {
                    created.update(|list| list.push(record));
                    draft.update(|d| *d = d.next());
                    info.set("Question added.".to_owned());
                }
                Err(e) => {
                    if let Some(field_errors) = server_field_errors(&e) {
                        errors.set(field_errors);
                        info.set(String::new());
                    } else {
                        info.set(format!("Could not save question: {e}"));
                    }
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = question;
        }
    };

    let text_input = move |label: &'static str, path: &'static str, get: fn(&QuestionDraft) -> String, set: fn(&mut QuestionDraft, String)| {
        view! {
            <label class="form__label">
                {label}
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || draft.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| set(d, value));
                    }
                />
            </label>
            <FieldMessage errors=errors path=path/>
        }
    };

    view! {
        <TestPageLayout title="Create Test">
            <Show when=move || !allowed()>
                <p class="form__notice">{AUTHOR_ONLY_NOTICE}</p>
            </Show>
            <form class="form question-form" on:submit=on_submit>
                {text_input("Test ID", "fk_test_id", |d| d.test_id.clone(), |d, v| d.test_id = v)}
                {text_input("Question", "questionText", |d| d.question_text.clone(), |d, v| d.question_text = v)}
                {text_input("Description (optional)", "description", |d| d.description.clone(), |d, v| d.description = v)}
                <label class="form__label">
                    "Question type"
                    <select
                        class="form__input"
                        prop:value=move || draft.with(|d| d.question_type.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.question_type = value);
                        }
                    >
                        {QUESTION_TYPES
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="form__label">
                    "Answer format"
                    <select
                        class="form__input"
                        prop:value=move || draft.with(|d| d.answer_format.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.answer_format = value);
                        }
                    >
                        {ANSWER_FORMATS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="form__label">
                    "Options (one per line)"
                    <textarea
                        class="form__input"
                        prop:value=move || draft.with(|d| d.options.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.options = value);
                        }
                    ></textarea>
                </label>
                <FieldMessage errors=errors path="options"/>
                {text_input("Correct answer", "correctAnswer", |d| d.correct_answer.clone(), |d, v| d.correct_answer = v)}
                {text_input("Numeric answer", "numericAnswer", |d| d.numeric_answer.clone(), |d, v| d.numeric_answer = v)}
                {text_input("Marks", "marks", |d| d.marks.clone(), |d, v| d.marks = v)}
                <FieldMessage errors=errors path="created_by"/>
                <Show when=allowed>
                    <button class="btn btn--primary" type="submit">"Add question"</button>
                </Show>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="form__info">{move || info.get()}</p>
            </Show>
            <ol class="question-list">
                <For
                    each=move || created.get()
                    key=|record| record.id.clone()
                    children=|record| {
                        view! {
                            <li class="question-list__item">
                                <span class="question-list__text">{record.question.question_text}</span>
                                <span class="question-list__marks">{format!("{} marks", record.question.marks)}</span>
                            </li>
                        }
                    }
                />
            </ol>
        </TestPageLayout>
    }
}
