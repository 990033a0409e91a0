/// Утилиты для списков справочников (поиск, сортировка)
use std::cmp::Ordering;

/// Минимальная длина строки поиска
pub const MIN_FILTER_LEN: usize = 2;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу (запрос уже в нижнем регистре)
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сравнение строк без учёта регистра
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim().to_lowercase();
    if filter.chars().count() < MIN_FILTER_LEN {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(&filter))
        .collect()
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        code: &'static str,
        rate: f64,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "code" => cmp_ignore_case(self.code, other.code),
                "rate" => self.rate.total_cmp(&other.rate),
                _ => Ordering::Equal,
            }
        }
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.code.to_lowercase().contains(filter)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { code: "usd", rate: 92.5 },
            Row { code: "EUR", rate: 99.1 },
            Row { code: "rub", rate: 1.0 },
        ]
    }

    #[test]
    fn test_sort_list() {
        let mut items = rows();
        sort_list(&mut items, "code", true);
        let codes: Vec<_> = items.iter().map(|r| r.code).collect();
        assert_eq!(codes, vec!["EUR", "rub", "usd"]);

        sort_list(&mut items, "rate", false);
        assert_eq!(items[0].code, "EUR");
        assert_eq!(items[2].code, "rub");
    }

    #[test]
    fn test_filter_list() {
        assert_eq!(filter_list(rows(), "u").len(), 3);
        let found = filter_list(rows(), " US ");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "usd");
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("code", "code", true), " ▲");
        assert_eq!(get_sort_indicator("code", "code", false), " ▼");
        assert_eq!(get_sort_indicator("rate", "code", true), " ⇅");
    }
}
