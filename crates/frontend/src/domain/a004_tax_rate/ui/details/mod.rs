mod view;

pub use view::TaxRateDetails;
