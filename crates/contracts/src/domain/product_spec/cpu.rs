use super::{CPU_SOCKETS, MEMORY_TYPES};
use crate::shared::metadata::FieldMetadata;

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::select("socket", "Сокет", CPU_SOCKETS).required(),
    FieldMetadata::text("series", "Серия").max_length(100).placeholder("Ryzen 7"),
    FieldMetadata::number("cores", "Ядра").required().range(1.0, 256.0),
    FieldMetadata::number("threads", "Потоки").required().range(1.0, 512.0),
    FieldMetadata::number("base_clock", "Базовая частота")
        .required()
        .range(0.1, 10.0)
        .unit("ГГц"),
    FieldMetadata::number("boost_clock", "Частота в бусте")
        .range(0.1, 10.0)
        .unit("ГГц"),
    FieldMetadata::number("l3_cache", "Кэш L3").range(0.0, 1024.0).unit("МБ"),
    FieldMetadata::number("tdp", "TDP").required().range(1.0, 1000.0).unit("Вт"),
    FieldMetadata::select("memory_type", "Поддерживаемая память", MEMORY_TYPES),
    FieldMetadata::checkbox("integrated_graphics", "Встроенная графика"),
];
