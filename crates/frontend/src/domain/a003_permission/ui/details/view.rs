use crate::shared::forms::{FormMessages, FormViewModel, SchemaFields};
use crate::shared::icons::icon;
use contracts::domain::a003_permission::{Permission, PermissionDto, FIELDS};
use leptos::prelude::*;

#[component]
pub fn PermissionDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = FormViewModel::<PermissionDto>::new();
    vm.load_if_needed::<Permission>(id);

    view! {
        <div class="details-container permission-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Редактирование права доступа" } else { "Новое право доступа" }}
                </h3>
            </div>

            <FormMessages messages=Signal::derive(move || vm.general_messages()) />

            <div class="details-form">
                <SchemaFields schema=FIELDS state=vm.state />
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={move |_| vm.save_command::<Permission>(on_saved)}
                    disabled=move || !vm.is_form_valid()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Сохранить" } else { "Создать" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    {"Отмена"}
                </button>
            </div>
        </div>
    }
}
