use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct CategoryListState {
    pub sort_field: String,
    pub sort_ascending: bool,
    pub filter: String,
}

impl Default for CategoryListState {
    fn default() -> Self {
        Self {
            sort_field: "sort_order".to_string(),
            sort_ascending: true,
            filter: String::new(),
        }
    }
}

pub fn create_state() -> RwSignal<CategoryListState> {
    RwSignal::new(CategoryListState::default())
}
