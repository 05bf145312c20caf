//! Shared project form used by the create and edit views.

use api::payload::ProjectDraft;
use dioxus::prelude::*;

/// Which fields the form carries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FormVariant {
    /// Title and description only.
    Minimal,
    /// Every project field.
    Full,
}

/// Project form component. Emits a [`ProjectDraft`] on submit; fields the
/// variant does not carry are left out of the draft, so a minimal form
/// produces a partial update.
#[component]
pub fn ProjectForm(
    variant: FormVariant,
    initial: ProjectDraft,
    submit_label: String,
    #[props(default = false)] busy: bool,
    on_submit: EventHandler<ProjectDraft>,
) -> Element {
    let mut title = use_signal(|| initial.title.clone());
    let mut description = use_signal(|| initial.description.clone());
    let mut research_field = use_signal(|| initial.research_field.clone().unwrap_or_default());
    let mut group_or_individual =
        use_signal(|| initial.group_or_individual.clone().unwrap_or_default());
    let mut start_time = use_signal(|| initial.project_start_time.clone().unwrap_or_default());
    let mut end_time = use_signal(|| initial.project_end_time.clone().unwrap_or_default());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = match variant {
            FormVariant::Minimal => ProjectDraft {
                title: title(),
                description: description(),
                ..ProjectDraft::default()
            },
            FormVariant::Full => ProjectDraft {
                title: title(),
                description: description(),
                research_field: Some(research_field()),
                group_or_individual: Some(group_or_individual()),
                project_start_time: Some(start_time()),
                project_end_time: Some(end_time()),
            },
        };
        on_submit.call(draft);
    };

    rsx! {
        form {
            class: "project-form",
            onsubmit: handle_submit,

            div {
                class: "form-field",
                label { "Title" }
                input {
                    r#type: "text",
                    placeholder: "Project title",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Description" }
                textarea {
                    rows: 4,
                    placeholder: "What the project is about",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
            }

            if variant == FormVariant::Full {
                div {
                    class: "form-field",
                    label { "Research field" }
                    input {
                        r#type: "text",
                        placeholder: "e.g. data science",
                        value: research_field(),
                        oninput: move |evt: FormEvent| research_field.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "Group or individual" }
                    select {
                        value: group_or_individual(),
                        onchange: move |evt: FormEvent| group_or_individual.set(evt.value()),
                        option { value: "", "Select..." }
                        option { value: "group", "Group" }
                        option { value: "individual", "Individual" }
                    }
                }

                div {
                    class: "form-field",
                    label { "Start time" }
                    input {
                        r#type: "datetime-local",
                        value: start_time(),
                        oninput: move |evt: FormEvent| start_time.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "End time" }
                    input {
                        r#type: "datetime-local",
                        value: end_time(),
                        oninput: move |evt: FormEvent| end_time.set(evt.value()),
                    }
                }
            }

            button {
                class: "primary",
                r#type: "submit",
                disabled: busy,
                if busy { "Saving..." } else { "{submit_label}" }
            }
        }
    }
}
