//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::PRODUCT_SPEC_TAB;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalog",
            label: "Каталог",
            icon: "folder",
            items: vec![("a001_category", "folder"), (PRODUCT_SPEC_TAB, "cpu")],
        },
        MenuGroup {
            id: "finance",
            label: "Финансы",
            icon: "coins",
            items: vec![("a002_currency", "coins"), ("a004_tax_rate", "percent")],
        },
        MenuGroup {
            id: "access",
            label: "Доступ",
            icon: "shield",
            items: vec![("a003_permission", "shield")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let expanded_groups = RwSignal::new(vec!["catalog", "finance", "access"]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                let items = StoredValue::new(group.items);
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(key, icon_name)| {
                                    let label = tab_label_for_key(key);
                                    let label_for_click = label.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            }
                                            on:click=move |_| ctx.open_tab(key, &label_for_click)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
