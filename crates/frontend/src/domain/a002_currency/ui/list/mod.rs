pub mod state;

use self::state::create_state;
use super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_ignore_case, get_sort_indicator, sort_list, Sortable};
use contracts::domain::a002_currency::Currency;
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct CurrencyRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub exchange_rate: f64,
    pub decimal_places: i32,
    pub is_default: bool,
}

impl From<Currency> for CurrencyRow {
    fn from(c: Currency) -> Self {
        Self {
            id: c.id.as_string(),
            code: c.code,
            name: c.name,
            symbol: c.symbol,
            exchange_rate: c.exchange_rate,
            decimal_places: c.decimal_places,
            is_default: c.is_default,
        }
    }
}

impl Sortable for CurrencyRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.cmp(&other.code),
            "name" => cmp_ignore_case(&self.name, &other.name),
            "exchange_rate" => self.exchange_rate.total_cmp(&other.exchange_rate),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CurrencyList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();
    let (items, set_items) = signal::<Vec<CurrencyRow>>(Vec::new());
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

    let list_key = Currency::full_name();
    Effect::new(move |_| {
        if ctx.active.get().as_deref() == Some(list_key.as_str()) {
            fetch();
        }
    });

    let open_details = move |id: Option<String>, title: String| {
        let key = format!(
            "{}_detail_{}",
            Currency::full_name(),
            id.as_deref().unwrap_or("new")
        );
        ctx.open_tab(&key, &title);
    };

    let delete_one = move |id: String, code: String| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Удалить валюту {}?", code)).ok())
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

    let sorted_items = move || {
        let mut rows = items.get();
        let s = state.get();
        sort_list(&mut rows, &s.sort_field, s.sort_ascending);
        rows
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{Currency::list_name()}</h2>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| open_details(None, "Новая валюта".to_string())
                    >
                        {icon("plus")}
                        {"Новая валюта"}
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
                            {sort_header("code", "Код")}
                            {sort_header("name", "Наименование")}
                            <th class="table__header-cell">{"Символ"}</th>
                            {sort_header("exchange_rate", "Курс")}
                            <th class="table__header-cell">{"Знаков"}</th>
                            <th class="table__header-cell">{"Основная"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|row| {
                            let id_for_click = row.id.clone();
                            let id_for_delete = row.id.clone();
                            let code_for_delete = row.code.clone();
                            let title = format!("{} {}", row.code, row.name);
                            let rate = format!("{:.4}", row.exchange_rate);
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| open_details(Some(id_for_click.clone()), title.clone())
                                >
                                    <td class="table__cell table__cell--mono">{row.code}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.symbol}</td>
                                    <td class="table__cell table__cell--number">{rate}</td>
                                    <td class="table__cell">{row.decimal_places}</td>
                                    <td class="table__cell">{if row.is_default { "Да" } else { "" }}</td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--icon"
                                            title="Удалить"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete_one(id_for_delete.clone(), code_for_delete.clone());
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
