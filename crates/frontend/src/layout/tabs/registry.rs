//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! Ключи списков совпадают с `AggregateRoot::full_name()` ("a001_category"),
//! ключи карточек: `{full_name}_detail_{id}`, для новой записи `{full_name}_detail_new`.

use super::tab_labels::{tab_label_for_key, PRODUCT_SPEC_TAB};
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_currency::ui::details::CurrencyDetails;
use crate::domain::a002_currency::ui::list::CurrencyList;
use crate::domain::a003_permission::ui::details::PermissionDetails;
use crate::domain::a003_permission::ui::list::PermissionList;
use crate::domain::a004_tax_rate::ui::details::TaxRateDetails;
use crate::domain::a004_tax_rate::ui::list::TaxRateList;
use crate::domain::product_spec::ui::ProductSpecEditor;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// `Some(id)` для существующей записи, `None` для новой
fn detail_id(key: &str, list_key: &str) -> Option<String> {
    match key.strip_prefix(list_key)?.strip_prefix("_detail_")? {
        "new" => None,
        id => Some(id.to_string()),
    }
}

/// Рендерит контент таба по его ключу.
///
/// Карточка после сохранения закрывается и возвращает пользователя к списку,
/// список при активации перечитывает данные.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let close = {
        let key = key.to_string();
        Callback::new(move |_| tabs_store.close_tab(&key))
    };
    let back_to_list = |list_key: &'static str| {
        let key = key.to_string();
        Callback::new(move |_| {
            tabs_store.close_tab(&key);
            tabs_store.open_tab(list_key, &tab_label_for_key(list_key));
        })
    };

    match key {
        "a001_category" => view! { <CategoryList /> }.into_any(),
        "a002_currency" => view! { <CurrencyList /> }.into_any(),
        "a003_permission" => view! { <PermissionList /> }.into_any(),
        "a004_tax_rate" => view! { <TaxRateList /> }.into_any(),
        PRODUCT_SPEC_TAB => view! { <ProductSpecEditor /> }.into_any(),

        k if k.starts_with("a001_category_detail_") => view! {
            <CategoryDetails
                id=detail_id(k, "a001_category")
                on_saved=back_to_list("a001_category")
                on_cancel=close
            />
        }
        .into_any(),
        k if k.starts_with("a002_currency_detail_") => view! {
            <CurrencyDetails
                id=detail_id(k, "a002_currency")
                on_saved=back_to_list("a002_currency")
                on_cancel=close
            />
        }
        .into_any(),
        k if k.starts_with("a003_permission_detail_") => view! {
            <PermissionDetails
                id=detail_id(k, "a003_permission")
                on_saved=back_to_list("a003_permission")
                on_cancel=close
            />
        }
        .into_any(),
        k if k.starts_with("a004_tax_rate_detail_") => view! {
            <TaxRateDetails
                id=detail_id(k, "a004_tax_rate")
                on_saved=back_to_list("a004_tax_rate")
                on_cancel=close
            />
        }
        .into_any(),

        _ => {
            log::warn!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Раздел не найден"}</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_id() {
        assert_eq!(detail_id("a001_category_detail_new", "a001_category"), None);
        assert_eq!(
            detail_id("a002_currency_detail_5b0c", "a002_currency"),
            Some("5b0c".to_string())
        );
        assert_eq!(detail_id("a002_currency", "a002_currency"), None);
    }
}
