use super::MEMORY_TYPES;
use crate::shared::metadata::FieldMetadata;

const MODULE_FORM_FACTORS: &[&str] = &["DIMM", "SO-DIMM"];

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::select("memory_type", "Тип памяти", MEMORY_TYPES).required(),
    FieldMetadata::select("form_factor", "Форм-фактор", MODULE_FORM_FACTORS).required(),
    FieldMetadata::number("capacity", "Объём комплекта")
        .required()
        .range(1.0, 4096.0)
        .unit("ГБ"),
    FieldMetadata::number("modules", "Модулей в комплекте")
        .required()
        .range(1.0, 16.0),
    FieldMetadata::number("speed", "Частота").required().range(100.0, 20_000.0).unit("МГц"),
    FieldMetadata::number("cas_latency", "CAS Latency").range(1.0, 100.0),
    FieldMetadata::number("voltage", "Напряжение").range(0.5, 3.0).unit("В"),
    FieldMetadata::checkbox("ecc", "ECC"),
    FieldMetadata::checkbox("heatsink", "Радиатор"),
];
