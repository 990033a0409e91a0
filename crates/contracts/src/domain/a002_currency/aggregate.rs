use crate::domain::common::{AdminForm, AggregateId, AggregateRoot, EntityMetadata};
use crate::shared::forms::Transform;
use crate::shared::metadata::FieldMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор валюты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyId(pub Uuid);

impl CurrencyId {
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

impl AggregateId for CurrencyId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CurrencyId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Валюта (ISO 4217)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    pub id: CurrencyId,
    /// Буквенный код ISO 4217, всегда в верхнем регистре ("USD")
    pub code: String,
    pub name: String,
    pub symbol: String,
    /// Курс к базовой валюте
    pub exchange_rate: f64,
    pub decimal_places: i32,
    /// Базовая валюта магазина (ровно одна)
    pub is_default: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl AggregateRoot for Currency {
    type Id = CurrencyId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "currency"
    }

    fn element_name() -> &'static str {
        "Валюта"
    }

    fn list_name() -> &'static str {
        "Валюты"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления валюты
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyDto {
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub exchange_rate: f64,
    pub decimal_places: i32,
    pub is_default: bool,
}

impl Default for CurrencyDto {
    fn default() -> Self {
        Self {
            id: None,
            code: String::new(),
            name: String::new(),
            symbol: String::new(),
            exchange_rate: 1.0,
            decimal_places: 2,
            is_default: false,
        }
    }
}

impl From<&Currency> for CurrencyDto {
    fn from(currency: &Currency) -> Self {
        Self {
            id: Some(currency.id.as_string()),
            code: currency.code.clone(),
            name: currency.name.clone(),
            symbol: currency.symbol.clone(),
            exchange_rate: currency.exchange_rate,
            decimal_places: currency.decimal_places,
            is_default: currency.is_default,
        }
    }
}

/// Поля формы валюты
pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("code", "Код")
        .required()
        .length(3, 3)
        .placeholder("USD")
        .hint("Трёхбуквенный код ISO 4217"),
    FieldMetadata::text("name", "Наименование")
        .required()
        .max_length(100)
        .placeholder("Доллар США"),
    FieldMetadata::text("symbol", "Символ").required().max_length(8).placeholder("$"),
    FieldMetadata::number("exchange_rate", "Курс")
        .required()
        .range(0.000001, 1_000_000_000.0)
        .hint("Сколько единиц валюты за единицу базовой"),
    FieldMetadata::number("decimal_places", "Знаков после запятой")
        .required()
        .range(0.0, 8.0)
        .integer(),
    FieldMetadata::checkbox("is_default", "Базовая валюта"),
];

impl AdminForm for CurrencyDto {
    fn schema() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn normalizers() -> Vec<(&'static str, Transform)> {
        vec![("code", Transform::uppercase_code())]
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
    fn test_code_is_uppercased() {
        let mut form = CurrencyDto::default().controller().unwrap();
        form.set_value("code", "eur");
        form.set_value("name", "Евро");
        form.set_value("symbol", "€");
        assert_eq!(form.display_value("code"), "EUR");
        assert!(validate_fields(FIELDS, form.fields()).is_empty());

        let dto: CurrencyDto = form.decode().unwrap();
        assert_eq!(dto.code, "EUR");
        assert_eq!(dto.decimal_places, 2);
        assert_eq!(dto.exchange_rate, 1.0);
    }

    #[test]
    fn test_code_length_and_rate_bounds() {
        let mut form = CurrencyDto::default().controller().unwrap();
        form.set_value("code", "euro");
        form.set_value("exchange_rate", 0.0);
        let errors = validate_fields(FIELDS, form.fields());
        assert!(errors.has("code"));
        assert!(errors.has("exchange_rate"));
        assert!(errors.has("name"));
    }

    #[test]
    fn test_fractional_rate_survives_decode() {
        let mut form = CurrencyDto::default().controller().unwrap();
        form.set_value("exchange_rate", 92.35);
        form.set_value("decimal_places", 0.0);
        let dto: CurrencyDto = form.decode().unwrap();
        assert_eq!(dto.exchange_rate, 92.35);
        assert_eq!(dto.decimal_places, 0);
    }
}
