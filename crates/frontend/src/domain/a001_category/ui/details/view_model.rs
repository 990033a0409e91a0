use super::super::model;
use crate::shared::forms::{FormViewModel, SelectOption};
use contracts::domain::a001_category::{Category, CategoryDto};
use leptos::prelude::*;

/// ViewModel for Category details form
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub base: FormViewModel<CategoryDto>,
    pub parents: RwSignal<Vec<SelectOption>>,
}

impl CategoryDetailsViewModel {
    pub fn new() -> Self {
        Self {
            base: FormViewModel::new(),
            parents: RwSignal::new(Vec::new()),
        }
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        self.load_parents(id.clone());
        self.base.load_if_needed::<Category>(id);
    }

    fn load_parents(&self, own_id: Option<String>) {
        let parents = self.parents;
        let error = self.base.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_all().await {
                Ok(categories) => {
                    parents.set(model::parent_options(&categories, own_id.as_deref()));
                }
                Err(e) => error.set(Some(format!("Ошибка загрузки категорий: {}", e))),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        self.base.save_command::<Category>(on_saved);
    }
}
