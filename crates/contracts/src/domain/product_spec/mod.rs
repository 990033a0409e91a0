//! Характеристики товара по типу: группа полей на каждый тип
//!
//! Каждый модуль содержит статическую схему `FIELDS`, отражающую колонки
//! таблицы характеристик на сервере. Форма товара рендерит группу полей
//! выбранного типа и отправляет её как плоский JSON-объект.

pub mod accessory;
pub mod cpu;
pub mod gpu;
pub mod license;
pub mod motherboard;
pub mod nic;
pub mod psu;
pub mod ram;
pub mod software;
pub mod storage;

use crate::shared::forms::{DerivedFieldController, FieldSet, FormError, Transform, ValidationErrors};
use crate::shared::metadata::{validate_fields, FieldMetadata, InputKind};
use serde::{Deserialize, Serialize};

pub(crate) const CPU_SOCKETS: &[&str] = &["AM4", "AM5", "LGA1200", "LGA1700", "LGA1851", "sTR5"];

pub(crate) const MEMORY_TYPES: &[&str] = &["DDR3", "DDR4", "DDR5"];

pub(crate) const BOARD_FORM_FACTORS: &[&str] = &["E-ATX", "ATX", "Micro-ATX", "Mini-ITX"];

/// Тип товара, определяет набор характеристик
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Cpu,
    Ram,
    Motherboard,
    Psu,
    Gpu,
    Storage,
    Nic,
    License,
    Software,
    Accessory,
}

impl ProductType {
    pub const ALL: [ProductType; 10] = [
        Self::Cpu,
        Self::Ram,
        Self::Motherboard,
        Self::Psu,
        Self::Gpu,
        Self::Storage,
        Self::Nic,
        Self::License,
        Self::Software,
        Self::Accessory,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Ram => "ram",
            Self::Motherboard => "motherboard",
            Self::Psu => "psu",
            Self::Gpu => "gpu",
            Self::Storage => "storage",
            Self::Nic => "nic",
            Self::License => "license",
            Self::Software => "software",
            Self::Accessory => "accessory",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cpu => "Процессор",
            Self::Ram => "Оперативная память",
            Self::Motherboard => "Материнская плата",
            Self::Psu => "Блок питания",
            Self::Gpu => "Видеокарта",
            Self::Storage => "Накопитель",
            Self::Nic => "Сетевая карта",
            Self::License => "Лицензия",
            Self::Software => "Программное обеспечение",
            Self::Accessory => "Аксессуар",
        }
    }

    pub fn fields(&self) -> &'static [FieldMetadata] {
        match self {
            Self::Cpu => cpu::FIELDS,
            Self::Ram => ram::FIELDS,
            Self::Motherboard => motherboard::FIELDS,
            Self::Psu => psu::FIELDS,
            Self::Gpu => gpu::FIELDS,
            Self::Storage => storage::FIELDS,
            Self::Nic => nic::FIELDS,
            Self::License => license::FIELDS,
            Self::Software => software::FIELDS,
            Self::Accessory => accessory::FIELDS,
        }
    }

    /// URL-поля получают префикс `https://`
    pub fn normalizers(&self) -> Vec<(&'static str, Transform)> {
        self.fields()
            .iter()
            .filter(|f| f.input == InputKind::Url)
            .map(|f| (f.name, Transform::url()))
            .collect()
    }

    /// Пустая группа полей для создания товара
    pub fn empty_fields(&self) -> FieldSet {
        self.fields()
            .iter()
            .fold(FieldSet::new(), |set, f| set.with(f.name, f.empty_value()))
    }

    /// Контроллер формы; `existing` перекрывает пустые значения, поля вне схемы отбрасываются
    pub fn controller(&self, existing: Option<&FieldSet>) -> Result<DerivedFieldController, FormError> {
        let mut fields = self.empty_fields();
        if let Some(existing) = existing {
            for (name, value) in existing.iter() {
                if fields.contains(name) {
                    fields = fields.with(name, value.clone());
                }
            }
        }

        let mut controller = DerivedFieldController::new(fields, Vec::new())?;
        for (field, transform) in self.normalizers() {
            controller = controller.with_normalizer(field, transform)?;
        }
        Ok(controller)
    }

    pub fn validate(&self, fields: &FieldSet) -> ValidationErrors {
        validate_fields(self.fields(), fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::FieldValue;
    use std::collections::HashSet;

    #[test]
    fn test_keys_round_trip_and_are_unique() {
        let keys: HashSet<&str> = ProductType::ALL.iter().map(|t| t.key()).collect();
        assert_eq!(keys.len(), ProductType::ALL.len());
        for product_type in ProductType::ALL {
            assert_eq!(ProductType::from_key(product_type.key()), Some(product_type));
        }
        assert_eq!(ProductType::from_key("monitor"), None);
    }

    #[test]
    fn test_schemas_are_well_formed() {
        for product_type in ProductType::ALL {
            let fields = product_type.fields();
            assert!(!fields.is_empty(), "{:?}", product_type);

            let names: HashSet<&str> = fields.iter().map(|f| f.name).collect();
            assert_eq!(names.len(), fields.len(), "duplicate field in {:?}", product_type);

            for field in fields {
                if let (Some(min), Some(max)) = (field.validation.min, field.validation.max) {
                    assert!(min <= max, "{:?}.{}", product_type, field.name);
                }
                if field.input == InputKind::Select {
                    assert!(field.options.map_or(false, |o| !o.is_empty()), "{:?}.{}", product_type, field.name);
                }
            }
        }
    }

    #[test]
    fn test_empty_group_reports_required_fields() {
        let cpu = ProductType::Cpu;
        let errors = cpu.validate(&cpu.empty_fields());
        assert!(errors.has("socket"));
        assert!(errors.has("cores"));
        assert!(!errors.has("boost_clock"));
        assert!(!errors.has("integrated_graphics"));
    }

    #[test]
    fn test_filled_cpu_group_is_valid() {
        let mut form = ProductType::Cpu.controller(None).unwrap();
        form.set_value("socket", "AM5");
        form.set_value("cores", 8);
        form.set_value("threads", 16);
        form.set_value("base_clock", 4.2);
        form.set_value("tdp", 105);
        assert!(ProductType::Cpu.validate(form.fields()).is_empty());
        assert_eq!(
            form.fields().to_json()["integrated_graphics"],
            serde_json::Value::Bool(false)
        );
    }

    #[test]
    fn test_url_fields_are_prefixed() {
        let mut form = ProductType::Software.controller(None).unwrap();
        form.set_value("publisher_url", "jetbrains.com");
        form.set_value("download_url", "http://example.org/setup.exe");
        assert_eq!(form.display_value("publisher_url"), "https://jetbrains.com");
        assert_eq!(form.display_value("download_url"), "http://example.org/setup.exe");

        let mut license = ProductType::License.controller(None).unwrap();
        license.set_value("vendor_url", "");
        assert_eq!(license.display_value("vendor_url"), "");
    }

    #[test]
    fn test_existing_values_overlay_schema() {
        let existing = FieldSet::new()
            .with("wattage", 750)
            .with("legacy_column", "dropped");
        let form = ProductType::Psu.controller(Some(&existing)).unwrap();
        assert_eq!(form.value("wattage"), Some(&FieldValue::Number(750.0)));
        assert_eq!(form.value("legacy_column"), None);
        assert_eq!(form.value("atx3"), Some(&FieldValue::Bool(false)));
    }

    #[test]
    fn test_serde_key() {
        assert_eq!(serde_json::to_string(&ProductType::Motherboard).unwrap(), "\"motherboard\"");
    }
}
