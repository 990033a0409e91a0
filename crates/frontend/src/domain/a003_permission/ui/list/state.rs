use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct PermissionListState {
    pub filter: String,
    /// Пустая строка: все группы
    pub group: String,
}

pub fn create_state() -> RwSignal<PermissionListState> {
    RwSignal::new(PermissionListState::default())
}
