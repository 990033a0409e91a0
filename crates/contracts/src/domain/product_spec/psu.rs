use crate::shared::metadata::FieldMetadata;

const EFFICIENCY_RATINGS: &[&str] = &[
    "80 PLUS",
    "80 PLUS Bronze",
    "80 PLUS Silver",
    "80 PLUS Gold",
    "80 PLUS Platinum",
    "80 PLUS Titanium",
];

const MODULARITY: &[&str] = &["Немодульный", "Полумодульный", "Модульный"];

const PSU_FORM_FACTORS: &[&str] = &["ATX", "SFX", "SFX-L", "TFX"];

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::number("wattage", "Мощность")
        .required()
        .range(100.0, 3000.0)
        .unit("Вт"),
    FieldMetadata::select("efficiency_rating", "Сертификат", EFFICIENCY_RATINGS),
    FieldMetadata::select("modularity", "Модульность", MODULARITY).required(),
    FieldMetadata::select("form_factor", "Форм-фактор", PSU_FORM_FACTORS).required(),
    FieldMetadata::number("fan_size", "Вентилятор").range(40.0, 200.0).unit("мм"),
    FieldMetadata::number("pcie_connectors", "Разъёмы PCIe").range(0.0, 16.0),
    FieldMetadata::checkbox("atx3", "ATX 3.0 / 12VHPWR"),
];
