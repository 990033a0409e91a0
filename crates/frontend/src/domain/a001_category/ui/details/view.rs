use super::view_model::CategoryDetailsViewModel;
use crate::shared::forms::{FormMessages, SchemaField};
use crate::shared::icons::icon;
use contracts::domain::a001_category::FIELDS;
use leptos::prelude::*;

#[component]
pub fn CategoryDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new();
    vm.load_if_needed(id);
    let state = vm.base.state;

    view! {
        <div class="details-container category-details">
            <div class="details-header">
                <h3>
                    {move || if vm.base.is_edit_mode() { "Редактирование категории" } else { "Новая категория" }}
                </h3>
            </div>

            <FormMessages messages=Signal::derive(move || vm.base.general_messages()) />

            <div class="details-form">
                {FIELDS
                    .iter()
                    .map(|meta| {
                        if meta.name == "parent_id" {
                            view! { <SchemaField meta=*meta state=state options=vm.parents /> }
                                .into_any()
                        } else {
                            view! { <SchemaField meta=*meta state=state /> }.into_any()
                        }
                    })
                    .collect_view()}
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || !vm.base.is_form_valid()
                >
                    {icon("save")}
                    {move || if vm.base.is_edit_mode() { "Сохранить" } else { "Создать" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    {"Отмена"}
                </button>
            </div>
        </div>
    }
}
