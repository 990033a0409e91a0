pub mod state;

use self::state::create_state;
use super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_ignore_case, filter_list, get_sort_indicator, sort_list, Searchable, Sortable,
};
use contracts::domain::a001_category::Category;
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub parent: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: String,
}

impl CategoryRow {
    fn from_category(c: &Category, names: &HashMap<String, String>) -> Self {
        let parent = c
            .parent_id
            .and_then(|p| names.get(&p.as_string()).cloned())
            .unwrap_or_else(|| "-".to_string());
        Self {
            id: c.id.as_string(),
            name: c.name.clone(),
            slug: c.slug.clone(),
            parent,
            sort_order: c.sort_order,
            is_active: c.is_active,
            created_at: c.metadata.created_display(),
        }
    }
}

impl Sortable for CategoryRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_ignore_case(&self.name, &other.name),
            "slug" => self.slug.cmp(&other.slug),
            "parent" => cmp_ignore_case(&self.parent, &other.parent),
            "sort_order" => self.sort_order.cmp(&other.sort_order),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for CategoryRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter) || self.slug.contains(filter)
    }
}

fn to_rows(categories: Vec<Category>) -> Vec<CategoryRow> {
    let names: HashMap<String, String> = categories
        .iter()
        .map(|c| (c.id.as_string(), c.name.clone()))
        .collect();
    categories
        .iter()
        .map(|c| CategoryRow::from_category(c, &names))
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();
    let (items, set_items) = signal::<Vec<CategoryRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_all().await {
                Ok(v) => {
                    set_items.set(to_rows(v));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    // список перечитывается каждый раз, когда вкладка становится активной
    let list_key = Category::full_name();
    Effect::new(move |_| {
        if ctx.active.get().as_deref() == Some(list_key.as_str()) {
            fetch();
        }
    });

    let open_details = move |id: Option<String>, title: String| {
        let key = format!(
            "{}_detail_{}",
            Category::full_name(),
            id.as_deref().unwrap_or("new")
        );
        ctx.open_tab(&key, &title);
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
        let mut rows = filter_list(items.get(), &s.filter);
        sort_list(&mut rows, &s.sort_field, s.sort_ascending);
        rows
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!(
                    "Удалить выбранные категории? Количество: {}",
                    ids.len()
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            for id in ids {
                if let Err(e) = model::delete_by_id(&id).await {
                    log::error!("delete category {}: {}", id, e);
                    set_error.set(Some(format!("Ошибка удаления: {}", e)));
                }
            }
            set_selected.set(HashSet::new());
            fetch();
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{Category::list_name()}</h2>
                <div class="header__actions">
                    <input
                        type="text"
                        class="header__search"
                        placeholder="Поиск..."
                        prop:value=move || state.get().filter
                        on:input=move |ev| state.update(|s| s.filter = event_target_value(&ev))
                    />
                    <button
                        class="button button--primary"
                        on:click=move |_| open_details(None, "Новая категория".to_string())
                    >
                        {icon("plus")}
                        {"Новая категория"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| delete_selected()
                        disabled=move || selected.get().is_empty()
                    >
                        {icon("delete")}
                        {move || format!("Удалить ({})", selected.get().len())}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox"></th>
                            {sort_header("name", "Наименование")}
                            {sort_header("slug", "Slug")}
                            {sort_header("parent", "Родитель")}
                            {sort_header("sort_order", "Порядок")}
                            <th class="table__header-cell">{"Активна"}</th>
                            {sort_header("created_at", "Создано")}
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_items().into_iter().map(|row| {
                            let id_for_checkbox = row.id.clone();
                            let id_for_toggle = row.id.clone();
                            let id_for_selected = row.id.clone();
                            let id_for_click = row.id.clone();
                            let title = row.name.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected=move || selected.get().contains(&id_for_selected)
                                    on:click=move |_| open_details(Some(id_for_click.clone()), title.clone())
                                >
                                    <td class="table__cell table__cell--checkbox" on:click=|ev| ev.stop_propagation()>
                                        <input
                                            type="checkbox"
                                            prop:checked=move || selected.get().contains(&id_for_checkbox)
                                            on:change=move |ev| {
                                                let checked = event_target_checked(&ev);
                                                let id = id_for_toggle.clone();
                                                set_selected.update(|s| {
                                                    if checked {
                                                        s.insert(id);
                                                    } else {
                                                        s.remove(&id);
                                                    }
                                                });
                                            }
                                        />
                                    </td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell table__cell--mono">{row.slug}</td>
                                    <td class="table__cell">{row.parent}</td>
                                    <td class="table__cell">{row.sort_order}</td>
                                    <td class="table__cell">{if row.is_active { "Да" } else { "Нет" }}</td>
                                    <td class="table__cell">{row.created_at}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
