use super::EntityMetadata;

/// Трейт для корня агрегата
///
/// Определяет обязательные методы и метаданные для всех агрегатов системы
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id;

    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Получить метаданные жизненного цикла
    fn metadata(&self) -> &EntityMetadata;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "category"), она же сегмент API
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Категория")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Категории")
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя агрегата для системы (например, "a001_category")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Путь коллекции в API (например, "/api/category")
    fn api_path() -> String {
        format!("/api/{}", Self::collection_name())
    }

    /// Путь записи в API (например, "/api/category/{id}")
    fn api_item_path(id: &str) -> String {
        format!("{}/{}", Self::api_path(), id)
    }
}
