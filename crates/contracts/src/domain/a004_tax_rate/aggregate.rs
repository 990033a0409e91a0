use crate::domain::common::{AdminForm, AggregateId, AggregateRoot, EntityMetadata};
use crate::shared::forms::Transform;
use crate::shared::metadata::FieldMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор налоговой ставки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxRateId(pub Uuid);

impl TaxRateId {
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

impl AggregateId for TaxRateId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(TaxRateId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Налоговая ставка (НДС / sales tax)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRate {
    pub id: TaxRateId,
    pub name: String,
    /// Ставка в процентах, 0..=100
    pub rate: f64,
    /// ISO 3166-1 alpha-2, пусто = для всех стран
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub region: String,
    /// Порядок применения при нескольких ставках
    pub priority: i32,
    /// Начисляется поверх предыдущих налогов
    pub is_compound: bool,
    pub is_active: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl TaxRate {
    /// Ставка для колонки списка: "20 %"
    pub fn rate_display(&self) -> String {
        format!("{} %", self.rate)
    }
}

impl AggregateRoot for TaxRate {
    type Id = TaxRateId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "tax_rate"
    }

    fn element_name() -> &'static str {
        "Налоговая ставка"
    }

    fn list_name() -> &'static str {
        "Налоговые ставки"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления налоговой ставки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRateDto {
    pub id: Option<String>,
    pub name: String,
    pub rate: f64,
    pub country_code: String,
    pub region: String,
    pub priority: i32,
    pub is_compound: bool,
    pub is_active: bool,
}

impl Default for TaxRateDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            rate: 0.0,
            country_code: String::new(),
            region: String::new(),
            priority: 1,
            is_compound: false,
            is_active: true,
        }
    }
}

impl From<&TaxRate> for TaxRateDto {
    fn from(tax_rate: &TaxRate) -> Self {
        Self {
            id: Some(tax_rate.id.as_string()),
            name: tax_rate.name.clone(),
            rate: tax_rate.rate,
            country_code: tax_rate.country_code.clone(),
            region: tax_rate.region.clone(),
            priority: tax_rate.priority,
            is_compound: tax_rate.is_compound,
            is_active: tax_rate.is_active,
        }
    }
}

/// Поля формы налоговой ставки
pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("name", "Наименование")
        .required()
        .max_length(100)
        .placeholder("НДС 20%"),
    FieldMetadata::number("rate", "Ставка")
        .required()
        .range(0.0, 100.0)
        .unit("%"),
    FieldMetadata::text("country_code", "Страна")
        .length(2, 2)
        .placeholder("RU")
        .hint("Код ISO 3166-1, пусто — для всех стран"),
    FieldMetadata::text("region", "Регион").max_length(100),
    FieldMetadata::number("priority", "Приоритет")
        .required()
        .range(0.0, 1000.0)
        .integer(),
    FieldMetadata::checkbox("is_compound", "Составной налог"),
    FieldMetadata::checkbox("is_active", "Активна"),
];

impl AdminForm for TaxRateDto {
    fn schema() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn normalizers() -> Vec<(&'static str, Transform)> {
        vec![("country_code", Transform::uppercase_code())]
    }

    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::validate_fields;

    #[test]
    fn test_country_code_uppercased_and_optional() {
        let mut form = TaxRateDto::default().controller().unwrap();
        form.set_value("name", "VAT");
        form.set_value("rate", 20.0);
        assert!(validate_fields(FIELDS, form.fields()).is_empty());

        form.set_value("country_code", "de");
        assert_eq!(form.display_value("country_code"), "DE");
        assert!(validate_fields(FIELDS, form.fields()).is_empty());

        let dto: TaxRateDto = form.decode().unwrap();
        assert_eq!(dto.country_code, "DE");
        assert_eq!(dto.rate, 20.0);
        assert_eq!(dto.priority, 1);
    }

    #[test]
    fn test_rate_above_hundred_is_rejected() {
        let mut form = TaxRateDto::default().controller().unwrap();
        form.set_value("name", "Broken");
        form.set_value("rate", 120.5);
        form.set_value("country_code", "deu");
        let errors = validate_fields(FIELDS, form.fields());
        assert_eq!(errors.get("rate"), Some("Ставка должен быть не более 100"));
        assert!(errors.has("country_code"));
    }
}
