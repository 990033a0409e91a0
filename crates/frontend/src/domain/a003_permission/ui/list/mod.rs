pub mod state;

use self::state::create_state;
use super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_ignore_case, filter_list, sort_list, Searchable, Sortable};
use contracts::domain::a003_permission::Permission;
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeSet;

#[derive(Clone, Debug)]
pub struct PermissionRow {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub group: String,
    pub description: String,
}

impl From<Permission> for PermissionRow {
    fn from(p: Permission) -> Self {
        Self {
            id: p.id.as_string(),
            name: p.name,
            slug: p.slug,
            group: p.group,
            description: p.description,
        }
    }
}

// группа, затем наименование
impl Sortable for PermissionRow {
    fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
        cmp_ignore_case(&self.group, &other.group).then_with(|| cmp_ignore_case(&self.name, &other.name))
    }
}

impl Searchable for PermissionRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
            || self.slug.contains(filter)
            || self.description.to_lowercase().contains(filter)
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PermissionList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();
    let (items, set_items) = signal::<Vec<PermissionRow>>(Vec::new());
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

    let list_key = Permission::full_name();
    Effect::new(move |_| {
        if ctx.active.get().as_deref() == Some(list_key.as_str()) {
            fetch();
        }
    });

    let open_details = move |id: Option<String>, title: String| {
        let key = format!(
            "{}_detail_{}",
            Permission::full_name(),
            id.as_deref().unwrap_or("new")
        );
        ctx.open_tab(&key, &title);
    };

    let delete_one = move |id: String, name: String| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Удалить право «{}»?", name)).ok())
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

    let groups = move || {
        items.with(|rows| {
            rows.iter()
                .map(|r| r.group.clone())
                .filter(|g| !g.is_empty())
                .collect::<BTreeSet<_>>()
        })
    };

    let visible_items = move || {
        let s = state.get();
        let mut rows = filter_list(items.get(), &s.filter);
        if !s.group.is_empty() {
            rows.retain(|r| r.group == s.group);
        }
        sort_list(&mut rows, "group", true);
        rows
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{Permission::list_name()}</h2>
                <div class="header__actions">
                    <select
                        class="header__filter"
                        prop:value=move || state.get().group
                        on:change=move |ev| state.update(|s| s.group = event_target_value(&ev))
                    >
                        <option value="">{"Все группы"}</option>
                        {move || groups().into_iter().map(|g| {
                            let label = g.clone();
                            view! { <option value=g>{label}</option> }
                        }).collect_view()}
                    </select>
                    <input
                        type="text"
                        class="header__search"
                        placeholder="Поиск..."
                        prop:value=move || state.get().filter
                        on:input=move |ev| state.update(|s| s.filter = event_target_value(&ev))
                    />
                    <button
                        class="button button--primary"
                        on:click=move |_| open_details(None, "Новое право доступа".to_string())
                    >
                        {icon("plus")}
                        {"Новое право"}
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
                            <th class="table__header-cell">{"Группа"}</th>
                            <th class="table__header-cell">{"Наименование"}</th>
                            <th class="table__header-cell">{"Slug"}</th>
                            <th class="table__header-cell">{"Описание"}</th>
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
                                    on:click=move |_| open_details(Some(id_for_click.clone()), title.clone())
                                >
                                    <td class="table__cell">{row.group}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell table__cell--mono">{row.slug}</td>
                                    <td class="table__cell">{row.description}</td>
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
