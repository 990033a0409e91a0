use super::FormState;
use crate::shared::http::{self, ApiError};
use contracts::domain::common::{AdminForm, AggregateRoot};
use contracts::shared::forms::FormError;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Banner text for a form that could not be built or decoded
fn form_error_message(e: &FormError) -> String {
    format!("Ошибка формы: {}", e)
}

/// ViewModel for an admin details form over DTO `T`
pub struct FormViewModel<T> {
    pub state: FormState,
    /// Load failures and broken form wiring
    pub error: RwSignal<Option<String>>,
    record_id: RwSignal<Option<String>>,
    _dto: PhantomData<fn() -> T>,
}

impl<T> Clone for FormViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FormViewModel<T> {}

impl<T: AdminForm + 'static> FormViewModel<T> {
    pub fn new() -> Self {
        let vm = Self {
            state: FormState::new(Default::default()),
            error: RwSignal::new(None),
            record_id: RwSignal::new(None),
            _dto: PhantomData,
        };
        vm.reset(&T::default());
        vm
    }

    /// Re-seed the form from `dto`; existing records keep their dependent values
    pub fn reset(&self, dto: &T) {
        match dto.controller() {
            Ok(controller) => {
                self.state.replace(controller);
                self.record_id.set(dto.record_id().map(str::to_string));
            }
            Err(e) => {
                log::error!("{}: {}", std::any::type_name::<T>(), e);
                self.error.set(Some(form_error_message(&e)));
            }
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.record_id.with(Option::is_some)
    }

    pub fn record_id(&self) -> Option<String> {
        self.record_id.get()
    }

    pub fn is_form_valid(&self) -> bool {
        self.state.is_valid(T::schema()) && !self.state.is_processing()
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed<A>(&self, id: Option<String>)
    where
        A: AggregateRoot + DeserializeOwned + 'static,
        T: for<'a> From<&'a A>,
    {
        let Some(existing_id) = id else {
            return;
        };
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match http::fetch_by_id::<A>(&existing_id).await {
                Ok(aggregate) => vm.reset(&T::from(&aggregate)),
                Err(e) => vm.error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    /// Save form data to server
    pub fn save_command<A>(&self, on_saved: Callback<()>)
    where
        A: AggregateRoot + 'static,
    {
        self.error.set(None);
        let submission = self.state.submission;

        let errors = self.state.validate(T::schema());
        if !errors.is_empty() {
            submission.update(|s| {
                s.finish_invalid(errors, Some("Проверьте правильность заполнения полей".to_string()))
            });
            return;
        }

        let dto: T = match self.state.form.with_untracked(|f| f.decode()) {
            Ok(dto) => dto,
            Err(e) => {
                log::error!("{}: {}", std::any::type_name::<T>(), e);
                self.error.set(Some(form_error_message(&e)));
                return;
            }
        };

        let mut started = false;
        submission.update(|s| started = s.try_begin());
        if !started {
            log::debug!("submit ignored, request already in flight");
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match http::save::<A, T>(&dto).await {
                Ok(()) => {
                    submission.update(|s| s.finish_ok());
                    on_saved.run(());
                }
                Err(ApiError::Validation(body)) => {
                    submission.update(|s| s.finish_invalid(body.errors, body.message));
                }
                Err(e) => {
                    log::error!("save {} failed: {}", A::full_name(), e);
                    submission.update(|s| s.finish_failed(e.to_string()));
                }
            }
        });
    }

    /// Banner lines: load/save failures and messages for fields not on the form
    pub fn general_messages(&self) -> Vec<String> {
        let rendered: Vec<&str> = T::schema().iter().map(|f| f.name).collect();
        let mut messages: Vec<String> = self.error.get().into_iter().collect();
        self.state.submission.with(|s| {
            messages.extend(s.message.clone());
            messages.extend(s.errors.unmatched(&rendered).map(str::to_string));
        });
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_error_message_is_prefixed() {
        let e = FormError::Decode("invalid type: floating point `1.5`, expected i32".to_string());
        let message = form_error_message(&e);
        assert!(message.starts_with("Ошибка формы: "));
        assert!(message.ends_with("expected i32"));
    }
}
