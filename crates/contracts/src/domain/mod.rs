pub mod common;

pub mod a001_category;
pub mod a002_currency;
pub mod a003_permission;
pub mod a004_tax_rate;
pub mod product_spec;
