use crate::shared::metadata::FieldMetadata;

const LICENSE_TYPES: &[&str] = &["Бессрочная", "Подписка", "OEM", "Корпоративная"];

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::select("license_type", "Тип лицензии", LICENSE_TYPES).required(),
    FieldMetadata::number("seats", "Количество мест").required().range(1.0, 100_000.0),
    FieldMetadata::number("duration_months", "Срок действия")
        .range(1.0, 120.0)
        .unit("мес.")
        .hint("Пусто для бессрочной лицензии"),
    FieldMetadata::url("vendor_url", "Сайт правообладателя")
        .max_length(500)
        .placeholder("vendor.com"),
    FieldMetadata::checkbox("electronic_delivery", "Электронная доставка ключа"),
];
