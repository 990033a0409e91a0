use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct TaxRateListState {
    pub sort_field: String,
    pub sort_ascending: bool,
    pub only_active: bool,
}

impl Default for TaxRateListState {
    fn default() -> Self {
        Self {
            sort_field: "country_code".to_string(),
            sort_ascending: true,
            only_active: false,
        }
    }
}

pub fn create_state() -> RwSignal<TaxRateListState> {
    RwSignal::new(TaxRateListState::default())
}
