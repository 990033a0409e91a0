pub mod state;

use self::state::create_state;
use super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_ignore_case, get_sort_indicator, sort_list, Sortable};
use contracts::domain::a004_tax_rate::TaxRate;
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct TaxRateRow {
    pub id: String,
    pub name: String,
    pub rate: f64,
    pub rate_display: String,
    pub country_code: String,
    pub region: String,
    pub priority: i32,
    pub is_compound: bool,
    pub is_active: bool,
}

impl From<TaxRate> for TaxRateRow {
    fn from(t: TaxRate) -> Self {
        Self {
            id: t.id.as_string(),
            rate_display: t.rate_display(),
            name: t.name,
            rate: t.rate,
            country_code: t.country_code,
            region: if t.region.is_empty() { "*".to_string() } else { t.region },
            priority: t.priority,
            is_compound: t.is_compound,
            is_active: t.is_active,
        }
    }
}

impl Sortable for TaxRateRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_ignore_case(&self.name, &other.name),
            "rate" => self.rate.total_cmp(&other.rate),
            "country_code" => self
                .country_code
                .cmp(&other.country_code)
                .then_with(|| self.priority.cmp(&other.priority)),
            "priority" => self.priority.cmp(&other.priority),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TaxRateList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();
    let (items, set_items) = signal::<Vec<TaxRateRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_all().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let list_key = TaxRate::full_name();
    Effect::new(move |_| {
        if ctx.active.get().as_deref() == Some(list_key.as_str()) {
            fetch();
        }
    });

    let open_details = move |id: Option<String>, title: String| {
        let key = format!(
            "{}_detail_{}",
            TaxRate::full_name(),
            id.as_deref().unwrap_or("new")
        );
        ctx.open_tab(&key, &title);
    };

    let delete_one = move |id: String, name: String| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Удалить ставку «{}»?", name)).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match model::delete_by_id(&id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(format!("Ошибка удаления: {}", e))),
            }
        });
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let sort_header = move |field: &'static str, label: &'static str| {
        view! {
            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort(field)>
                {label}
                <span class="table__sort-indicator">
                    {move || {
                        let s = state.get();
                        get_sort_indicator(&s.sort_field, field, s.sort_ascending)
                    }}
                </span>
            </th>
        }
    };

    let visible_items = move || {
        let s = state.get();
        let mut rows = items.get();
        if s.only_active {
            rows.retain(|r| r.is_active);
        }
        sort_list(&mut rows, &s.sort_field, s.sort_ascending);
        rows
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{TaxRate::list_name()}</h2>
                <div class="header__actions">
                    <label class="header__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || state.get().only_active
                            on:change=move |ev| state.update(|s| s.only_active = event_target_checked(&ev))
                        />
                        {"Только активные"}
                    </label>
                    <button
                        class="button button--primary"
                        on:click=move |_| open_details(None, "Новая налоговая ставка".to_string())
                    >
                        {icon("plus")}
                        {"Новая ставка"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {sort_header("name", "Наименование")}
                            {sort_header("rate", "Ставка")}
                            {sort_header("country_code", "Страна")}
                            <th class="table__header-cell">{"Регион"}</th>
                            {sort_header("priority", "Приоритет")}
                            <th class="table__header-cell">{"Составная"}</th>
                            <th class="table__header-cell">{"Активна"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_items().into_iter().map(|row| {
                            let id_for_click = row.id.clone();
                            let id_for_delete = row.id.clone();
                            let name_for_delete = row.name.clone();
                            let title = row.name.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--inactive=!row.is_active
                                    on:click=move |_| open_details(Some(id_for_click.clone()), title.clone())
                                >
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell table__cell--number">{row.rate_display}</td>
                                    <td class="table__cell table__cell--mono">{row.country_code}</td>
                                    <td class="table__cell">{row.region}</td>
                                    <td class="table__cell">{row.priority}</td>
                                    <td class="table__cell">{if row.is_compound { "Да" } else { "" }}</td>
                                    <td class="table__cell">{if row.is_active { "Да" } else { "Нет" }}</td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--icon"
                                            title="Удалить"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete_one(id_for_delete.clone(), name_for_delete.clone());
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
