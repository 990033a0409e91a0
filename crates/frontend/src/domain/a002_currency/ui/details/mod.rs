mod view;

pub use view::CurrencyDetails;
