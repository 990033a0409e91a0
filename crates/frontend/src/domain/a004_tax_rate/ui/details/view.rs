use crate::shared::forms::{FormMessages, FormViewModel, SchemaFields};
use crate::shared::icons::icon;
use contracts::domain::a004_tax_rate::{TaxRate, TaxRateDto, FIELDS};
use leptos::prelude::*;

#[component]
pub fn TaxRateDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = FormViewModel::<TaxRateDto>::new();
    vm.load_if_needed::<TaxRate>(id);

    view! {
        <div class="details-container tax-rate-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Редактирование налоговой ставки" } else { "Новая налоговая ставка" }}
                </h3>
            </div>

            <FormMessages messages=Signal::derive(move || vm.general_messages()) />

            <div class="details-form">
                <SchemaFields schema=FIELDS state=vm.state />
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={move |_| vm.save_command::<TaxRate>(on_saved)}
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
