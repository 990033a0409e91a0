use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct CurrencyListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for CurrencyListState {
    fn default() -> Self {
        Self {
            sort_field: "code".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<CurrencyListState> {
    RwSignal::new(CurrencyListState::default())
}
