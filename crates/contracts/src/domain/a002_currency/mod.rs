pub mod aggregate;

pub use aggregate::{Currency, CurrencyDto, CurrencyId, FIELDS};
