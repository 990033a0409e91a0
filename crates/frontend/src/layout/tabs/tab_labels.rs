//! Tab labels - заголовки табов по ключу.
//!
//! Для справочников берётся `list_name` агрегата из contracts.

use contracts::domain::a001_category::Category;
use contracts::domain::a002_currency::Currency;
use contracts::domain::a003_permission::Permission;
use contracts::domain::a004_tax_rate::TaxRate;
use contracts::domain::common::AggregateRoot;

pub const PRODUCT_SPEC_TAB: &str = "product_spec";

/// Возвращает читаемый заголовок таба для данного ключа. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> String {
    match key {
        "a001_category" => Category::list_name().to_string(),
        "a002_currency" => Currency::list_name().to_string(),
        "a003_permission" => Permission::list_name().to_string(),
        "a004_tax_rate" => TaxRate::list_name().to_string(),
        PRODUCT_SPEC_TAB => "Характеристики товаров".to_string(),
        k if k.ends_with("_detail_new") => "Новая запись".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_keys_match_aggregates() {
        assert_eq!(Category::full_name(), "a001_category");
        assert_eq!(Currency::full_name(), "a002_currency");
        assert_eq!(Permission::full_name(), "a003_permission");
        assert_eq!(TaxRate::full_name(), "a004_tax_rate");
        assert_eq!(tab_label_for_key("a002_currency"), "Валюты");
        assert_eq!(tab_label_for_key("a004_tax_rate_detail_new"), "Новая запись");
        assert_eq!(tab_label_for_key("unknown"), "unknown");
    }
}
