use crate::domain::common::{AdminForm, AggregateId, AggregateRoot, EntityMetadata};
use crate::shared::forms::{DerivationRule, Transform};
use crate::shared::metadata::{FieldMetadata, InputKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор категории
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория товаров (дерево каталога)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// URL-идентификатор, уникален в пределах каталога
    pub slug: String,
    pub parent_id: Option<CategoryId>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sort_order: i32,
    pub is_active: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "category"
    }

    fn element_name() -> &'static str {
        "Категория"
    }

    fn list_name() -> &'static str {
        "Категории"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<String>,
    pub description: String,
    pub sort_order: i32,
    pub is_active: bool,
}

impl Default for CategoryDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            slug: String::new(),
            parent_id: None,
            description: String::new(),
            sort_order: 0,
            is_active: true,
        }
    }
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        Self {
            id: Some(category.id.as_string()),
            name: category.name.clone(),
            slug: category.slug.clone(),
            parent_id: category.parent_id.map(|p| p.as_string()),
            description: category.description.clone(),
            sort_order: category.sort_order,
            is_active: category.is_active,
        }
    }
}

/// Поля формы категории
pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("name", "Наименование")
        .required()
        .max_length(255)
        .placeholder("Например, Видеокарты"),
    FieldMetadata::text("slug", "Slug")
        .required()
        .max_length(255)
        .hint("Формируется из наименования, можно изменить вручную"),
    // варианты подгружаются из списка категорий
    FieldMetadata::new("parent_id", "Родительская категория", InputKind::Select),
    FieldMetadata::textarea("description", "Описание")
        .max_length(2000),
    FieldMetadata::number("sort_order", "Порядок сортировки")
        .required()
        .range(0.0, 100_000.0)
        .integer(),
    FieldMetadata::checkbox("is_active", "Активна"),
];

impl AdminForm for CategoryDto {
    fn schema() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn derivation_rules() -> Vec<DerivationRule> {
        vec![DerivationRule::slug("name", "slug")]
    }

    fn normalizers() -> Vec<(&'static str, Transform)> {
        vec![("parent_id", Transform::null_if_blank())]
    }

    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::FieldValue;
    use crate::shared::metadata::validate_fields;

    #[test]
    fn test_new_category_derives_slug() {
        let mut form = CategoryDto::default().controller().unwrap();
        form.set_value("name", "Материнские платы AM5");
        // кириллица в slug не попадает
        assert_eq!(form.display_value("slug"), "am5");

        form.set_value("name", "Cooling & Fans");
        assert_eq!(form.display_value("slug"), "cooling-fans");
        assert!(validate_fields(FIELDS, form.fields()).is_empty());

        let dto: CategoryDto = form.decode().unwrap();
        assert_eq!(dto.slug, "cooling-fans");
        assert!(dto.is_active);
        assert_eq!(dto.parent_id, None);
    }

    #[test]
    fn test_existing_category_keeps_slug() {
        let existing = CategoryDto {
            id: Some(CategoryId::new_v4().as_string()),
            name: "Graphics Cards".to_string(),
            slug: "gpu".to_string(),
            ..CategoryDto::default()
        };
        let mut form = existing.controller().unwrap();
        assert!(form.is_manually_edited("slug"));

        form.set_value("name", "Video Cards");
        assert_eq!(form.display_value("slug"), "gpu");
    }

    #[test]
    fn test_empty_parent_is_null() {
        let mut form = CategoryDto::default().controller().unwrap();
        let parent = CategoryId::new_v4().as_string();

        form.set_value("parent_id", parent.as_str());
        assert_eq!(form.decode::<CategoryDto>().unwrap().parent_id, Some(parent));

        form.set_value("parent_id", "");
        assert_eq!(form.value("parent_id"), Some(&FieldValue::Null));
        assert_eq!(form.decode::<CategoryDto>().unwrap().parent_id, None);
    }

    #[test]
    fn test_fractional_sort_order_is_reported_on_field() {
        let mut form = CategoryDto::default().controller().unwrap();
        form.set_value("name", "Cooling");
        form.set_value("sort_order", 1.5);
        let errors = validate_fields(FIELDS, form.fields());
        assert_eq!(
            errors.get("sort_order"),
            Some("Порядок сортировки должно быть целым числом")
        );

        form.set_value("sort_order", 2.0);
        assert!(validate_fields(FIELDS, form.fields()).is_empty());
        assert_eq!(form.decode::<CategoryDto>().unwrap().sort_order, 2);
    }

    #[test]
    fn test_api_paths() {
        assert_eq!(Category::full_name(), "a001_category");
        assert_eq!(Category::api_path(), "/api/category");
        assert_eq!(Category::api_item_path("42"), "/api/category/42");
    }
}
