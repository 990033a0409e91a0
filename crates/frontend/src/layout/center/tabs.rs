use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let key_for_active = tab.key.clone();
    let is_active =
        Memo::new(move |_| tabs_store.active.get().as_deref() == Some(key_for_active.as_str()));

    let key_for_click = tab.key.clone();
    let on_click = move |_| tabs_store.activate_tab(&key_for_click);

    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key_for_close);
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{tab.title}</span>
            <button class="tab-close" on:click=on_close>"×"</button>
        </div>
    }
}

/// Панель вкладок и их содержимое
#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <Tab tab=tab /> }
                />
            </div>
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                />
            </div>
        </div>
    }
}
