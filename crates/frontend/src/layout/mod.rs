pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;

use crate::shared::icons::icon;
use global_context::AppGlobalContext;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |               Header                     |
/// +------------------------------------------+
/// |  Sidebar  |          Center (tabs)       |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <div class="app-header">
                <button class="app-header__toggle" on:click=move |_| ctx.toggle_left()>
                    {icon("chevron-right")}
                </button>
                <span class="app-header__title">{"Панель администратора"}</span>
            </div>

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>
        </div>
    }
}
