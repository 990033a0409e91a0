pub mod aggregate;

pub use aggregate::{TaxRate, TaxRateDto, TaxRateId, FIELDS};
