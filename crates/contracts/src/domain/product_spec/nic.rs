use crate::shared::metadata::FieldMetadata;

const NIC_INTERFACES: &[&str] = &["PCIe", "USB", "M.2", "OCP"];

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::select("interface", "Интерфейс", NIC_INTERFACES).required(),
    FieldMetadata::number("ports", "Порты").required().range(1.0, 8.0),
    FieldMetadata::number("speed", "Скорость порта").required().range(0.01, 800.0).unit("Гбит/с"),
    FieldMetadata::text("connector", "Разъём").max_length(50).placeholder("RJ-45, SFP+"),
    FieldMetadata::text("controller", "Контроллер").max_length(100),
    FieldMetadata::checkbox("wireless", "Беспроводной"),
];
