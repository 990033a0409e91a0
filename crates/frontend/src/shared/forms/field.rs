//! Generic field renderer: one `FieldMetadata` in, one form-group out

use super::FormState;
use contracts::shared::metadata::{FieldMetadata, InputKind};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

fn static_options(meta: &FieldMetadata) -> Vec<SelectOption> {
    meta.options
        .unwrap_or_default()
        .iter()
        .map(|o| SelectOption::new(*o, *o))
        .collect()
}

/// Одно поле формы по его метаданным.
///
/// `options` перекрывает статические варианты схемы (например, список
/// родительских категорий, загруженный с сервера).
#[component]
pub fn SchemaField(
    meta: FieldMetadata,
    state: FormState,
    #[prop(optional, into)] options: Option<Signal<Vec<SelectOption>>>,
) -> impl IntoView {
    let name = meta.name;
    let placeholder = meta.ui.placeholder.unwrap_or("");

    let input = match meta.input {
        InputKind::Checkbox => view! {
            <input
                type="checkbox"
                id=name
                prop:checked=move || state.checked(name)
                on:change=move |ev| state.set(name, event_target_checked(&ev))
            />
        }
        .into_any(),
        InputKind::Textarea => view! {
            <textarea
                id=name
                rows="3"
                placeholder=placeholder
                prop:value=move || state.value(name)
                on:input=move |ev| state.set_input(&meta, &event_target_value(&ev))
            />
        }
        .into_any(),
        InputKind::Select => {
            let options = options.unwrap_or_else(|| Signal::derive(move || static_options(&meta)));
            let empty_label = if meta.is_optional() { "—" } else { "Выберите значение" };
            view! {
                <select
                    id=name
                    prop:value=move || state.value(name)
                    on:change=move |ev| state.set_input(&meta, &event_target_value(&ev))
                >
                    <option value="">{empty_label}</option>
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|option| {
                                let value = option.value.clone();
                                view! {
                                    <option
                                        value=option.value
                                        selected=move || state.value(name) == value
                                    >
                                        {option.label}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            }
            .into_any()
        }
        InputKind::Text | InputKind::Number | InputKind::Url => view! {
            <input
                type=meta.input.html_type()
                id=name
                step=meta.input.is_numeric().then_some("any")
                placeholder=placeholder
                prop:value=move || state.value(name)
                on:input=move |ev| state.set_input(&meta, &event_target_value(&ev))
            />
        }
        .into_any(),
    };

    // авто/вручную для полей, которые формируются из других
    let mode_badge = state.is_dependent(name).then(|| {
        view! {
            <span
                class="form-badge"
                class:form-badge--manual=move || state.is_manually_edited(name)
            >
                {move || if state.is_manually_edited(name) { "вручную" } else { "авто" }}
            </span>
        }
    });

    view! {
        <div
            class="form-group"
            class:form-group--invalid=move || state.field_error(name).is_some()
        >
            <label for=name>
                {meta.label_with_unit()}
                {meta.validation.required.then_some(" *")}
                {mode_badge}
            </label>
            {input}
            {meta.ui.hint.map(|hint| view! { <div class="form-hint">{hint}</div> })}
            {move || state.field_error(name).map(|e| view! { <div class="field-error">{e}</div> })}
        </div>
    }
}

/// Все поля схемы подряд
#[component]
pub fn SchemaFields(schema: &'static [FieldMetadata], state: FormState) -> impl IntoView {
    schema
        .iter()
        .map(|meta| view! { <SchemaField meta=*meta state=state /> })
        .collect_view()
}

/// Общие сообщения формы (ошибки загрузки и сохранения)
#[component]
pub fn FormMessages(#[prop(into)] messages: Signal<Vec<String>>) -> impl IntoView {
    move || {
        let messages = messages.get();
        (!messages.is_empty()).then(|| {
            view! {
                <div class="error">
                    {messages.into_iter().map(|m| view! { <div>{m}</div> }).collect_view()}
                </div>
            }
        })
    }
}
