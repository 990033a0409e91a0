use crate::shared::metadata::FieldMetadata;

const STORAGE_TYPES: &[&str] = &["HDD", "SSD"];

const STORAGE_INTERFACES: &[&str] = &["SATA III", "NVMe PCIe 3.0", "NVMe PCIe 4.0", "NVMe PCIe 5.0", "SAS"];

const STORAGE_FORM_FACTORS: &[&str] = &["2.5\"", "3.5\"", "M.2 2242", "M.2 2280", "U.2"];

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::select("storage_type", "Тип накопителя", STORAGE_TYPES).required(),
    FieldMetadata::select("interface", "Интерфейс", STORAGE_INTERFACES).required(),
    FieldMetadata::select("form_factor", "Форм-фактор", STORAGE_FORM_FACTORS).required(),
    FieldMetadata::number("capacity", "Объём").required().range(1.0, 100_000.0).unit("ГБ"),
    FieldMetadata::number("read_speed", "Скорость чтения").range(1.0, 20_000.0).unit("МБ/с"),
    FieldMetadata::number("write_speed", "Скорость записи").range(1.0, 20_000.0).unit("МБ/с"),
    FieldMetadata::number("rpm", "Скорость вращения")
        .range(0.0, 20_000.0)
        .unit("об/мин")
        .hint("Только для HDD"),
    FieldMetadata::number("tbw", "Ресурс записи").range(0.0, 100_000.0).unit("ТБ"),
];
