use crate::shared::metadata::FieldMetadata;

const ACCESSORY_TYPES: &[&str] = &[
    "Кабель",
    "Переходник",
    "Кулер",
    "Термопаста",
    "Крепление",
    "Прочее",
];

const CONNECTIVITY: &[&str] = &["Проводное", "Беспроводное", "Нет"];

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::select("accessory_type", "Тип", ACCESSORY_TYPES).required(),
    FieldMetadata::text("compatibility", "Совместимость").max_length(255),
    FieldMetadata::select("connectivity", "Подключение", CONNECTIVITY),
    FieldMetadata::text("color", "Цвет").max_length(50),
    FieldMetadata::number("length", "Длина").range(0.0, 100_000.0).unit("мм"),
];
