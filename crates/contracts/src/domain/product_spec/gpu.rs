use crate::shared::metadata::FieldMetadata;

const GPU_MEMORY_TYPES: &[&str] = &["GDDR5", "GDDR6", "GDDR6X", "GDDR7", "HBM2", "HBM3"];

const GPU_INTERFACES: &[&str] = &["PCIe 3.0 x16", "PCIe 4.0 x8", "PCIe 4.0 x16", "PCIe 5.0 x16"];

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("chipset", "Графический процессор")
        .required()
        .max_length(100)
        .placeholder("GeForce RTX 4070"),
    FieldMetadata::number("memory", "Видеопамять").required().range(1.0, 192.0).unit("ГБ"),
    FieldMetadata::select("memory_type", "Тип памяти", GPU_MEMORY_TYPES).required(),
    FieldMetadata::select("interface", "Интерфейс", GPU_INTERFACES),
    FieldMetadata::number("core_clock", "Частота ядра").range(100.0, 5000.0).unit("МГц"),
    FieldMetadata::number("boost_clock", "Частота в бусте").range(100.0, 5000.0).unit("МГц"),
    FieldMetadata::number("tdp", "Энергопотребление").range(1.0, 1500.0).unit("Вт"),
    FieldMetadata::number("length", "Длина").range(50.0, 500.0).unit("мм"),
    FieldMetadata::number("slots", "Занимаемые слоты").range(1.0, 5.0),
];
