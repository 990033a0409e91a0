//! Редактор характеристик товара: группа полей зависит от типа товара

use crate::shared::forms::{FormState, SchemaFields};
use crate::shared::icons::icon;
use contracts::domain::product_spec::ProductType;
use contracts::shared::forms::DerivedFieldController;
use leptos::prelude::*;

fn controller_for(product_type: ProductType) -> DerivedFieldController {
    product_type.controller(None).unwrap_or_else(|e| {
        log::error!("product spec '{}': {}", product_type.key(), e);
        DerivedFieldController::default()
    })
}

#[component]
pub fn ProductSpecEditor() -> impl IntoView {
    let product_type = RwSignal::new(ProductType::Cpu);
    let state = FormState::new(controller_for(ProductType::Cpu));
    let (checked, set_checked) = signal(false);

    let change_type = move |key: String| {
        let Some(next) = ProductType::from_key(&key) else {
            log::warn!("unknown product type '{}'", key);
            return;
        };
        product_type.set(next);
        state.replace(controller_for(next));
        set_checked.set(false);
    };

    let validate = move || {
        let errors = state.validate(product_type.get_untracked().fields());
        let valid = errors.is_empty();
        state.submission.update(|s| {
            if valid {
                s.finish_ok();
            } else {
                s.finish_invalid(errors, None);
            }
        });
        set_checked.set(true);
    };

    let preview = move || {
        state.form.with(|f| {
            serde_json::to_string_pretty(&f.fields().to_json()).unwrap_or_default()
        })
    };

    view! {
        <div class="details-container product-spec-editor">
            <div class="details-header">
                <h3>{"Характеристики товара"}</h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="product_type">{"Тип товара"}</label>
                    <select
                        id="product_type"
                        prop:value=move || product_type.get().key()
                        on:change=move |ev| change_type(event_target_value(&ev))
                    >
                        {ProductType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.key()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                // группа полей пересоздаётся при смене типа
                {move || {
                    let fields = product_type.get().fields();
                    view! { <SchemaFields schema=fields state=state /> }
                }}
            </div>

            {move || {
                (checked.get() && state.submission.with(|s| s.recently_successful))
                    .then(|| view! { <div class="success">{"Характеристики заполнены корректно"}</div> })
            }}

            <div class="details-actions">
                <button class="btn btn-primary" on:click=move |_| validate()>
                    {icon("save")}
                    {"Проверить"}
                </button>
                <button class="btn btn-secondary" on:click=move |_| change_type(product_type.get_untracked().key().to_string())>
                    {icon("cancel")}
                    {"Очистить"}
                </button>
            </div>

            <pre class="json-preview">{preview}</pre>
        </div>
    }
}
