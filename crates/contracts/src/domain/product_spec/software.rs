use crate::shared::metadata::FieldMetadata;

const PLATFORMS: &[&str] = &["Windows", "macOS", "Linux", "Кроссплатформенное"];

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("publisher", "Издатель").required().max_length(150),
    FieldMetadata::text("version", "Версия").max_length(50).placeholder("2024.1"),
    FieldMetadata::select("platform", "Платформа", PLATFORMS).required(),
    FieldMetadata::url("publisher_url", "Сайт издателя").max_length(500),
    FieldMetadata::url("download_url", "Ссылка на загрузку").max_length(1000),
    FieldMetadata::textarea("system_requirements", "Системные требования").max_length(2000),
];
