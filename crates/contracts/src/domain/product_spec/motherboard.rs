use super::{BOARD_FORM_FACTORS, CPU_SOCKETS, MEMORY_TYPES};
use crate::shared::metadata::FieldMetadata;

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::select("socket", "Сокет", CPU_SOCKETS).required(),
    FieldMetadata::text("chipset", "Чипсет").required().max_length(50).placeholder("B650"),
    FieldMetadata::select("form_factor", "Форм-фактор", BOARD_FORM_FACTORS).required(),
    FieldMetadata::select("memory_type", "Тип памяти", MEMORY_TYPES).required(),
    FieldMetadata::number("memory_slots", "Слоты памяти").required().range(1.0, 16.0),
    FieldMetadata::number("max_memory", "Максимум памяти")
        .range(1.0, 8192.0)
        .unit("ГБ"),
    FieldMetadata::number("m2_slots", "Слоты M.2").range(0.0, 10.0),
    FieldMetadata::number("sata_ports", "Порты SATA").range(0.0, 16.0),
    FieldMetadata::checkbox("wifi", "Wi-Fi"),
    FieldMetadata::checkbox("bluetooth", "Bluetooth"),
];
