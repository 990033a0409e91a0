use crate::domain::common::{AdminForm, AggregateId, AggregateRoot, EntityMetadata};
use crate::shared::forms::DerivationRule;
use crate::shared::metadata::FieldMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор права доступа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionId(pub Uuid);

impl PermissionId {
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

impl AggregateId for PermissionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PermissionId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Право доступа к разделу админки
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub id: PermissionId,
    pub name: String,
    /// Машинное имя, по нему проверяются права ("manage-orders")
    pub slug: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl AggregateRoot for Permission {
    type Id = PermissionId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "permission"
    }

    fn element_name() -> &'static str {
        "Право доступа"
    }

    fn list_name() -> &'static str {
        "Права доступа"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления права доступа
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PermissionDto {
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    pub group: String,
    pub description: String,
}

impl From<&Permission> for PermissionDto {
    fn from(permission: &Permission) -> Self {
        Self {
            id: Some(permission.id.as_string()),
            name: permission.name.clone(),
            slug: permission.slug.clone(),
            group: permission.group.clone(),
            description: permission.description.clone(),
        }
    }
}

/// Поля формы права доступа
pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("name", "Наименование")
        .required()
        .max_length(150)
        .placeholder("Manage Orders"),
    FieldMetadata::text("slug", "Slug")
        .required()
        .max_length(150)
        .hint("Машинное имя права, формируется из наименования"),
    FieldMetadata::text("group", "Группа").max_length(100).placeholder("Orders"),
    FieldMetadata::textarea("description", "Описание")
        .max_length(1000),
];

impl AdminForm for PermissionDto {
    fn schema() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn derivation_rules() -> Vec<DerivationRule> {
        vec![DerivationRule::slug("name", "slug")]
    }

    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_tracks_name_until_edited() {
        let mut form = PermissionDto::default().controller().unwrap();
        form.set_value("name", "Manage Orders");
        assert_eq!(form.display_value("slug"), "manage-orders");

        form.set_value("slug", "orders.manage");
        form.set_value("name", "Manage All Orders");
        assert_eq!(form.display_value("slug"), "orders.manage");

        form.set_value("name", "");
        form.set_value("name", "View Reports");
        assert_eq!(form.display_value("slug"), "view-reports");

        let dto: PermissionDto = form.decode().unwrap();
        assert_eq!(dto.name, "View Reports");
        assert_eq!(dto.slug, "view-reports");
    }
}
