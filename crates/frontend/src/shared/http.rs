//! JSON CRUD over `/api/{collection}` for the admin screens

use crate::shared::api_utils::api_url;
use contracts::domain::common::{AdminForm, AggregateRoot};
use contracts::shared::forms::ValidationErrorResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

const NOT_FOUND: u16 = 404;
const UNPROCESSABLE_ENTITY: u16 = 422;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 422 with per-field messages
    #[error("{}", .0.message.as_deref().unwrap_or("Проверьте правильность заполнения полей"))]
    Validation(ValidationErrorResponse),

    #[error("Запись не найдена")]
    NotFound,

    #[error("Ошибка сервера: HTTP {0}")]
    Http(u16),

    #[error("Не удалось выполнить запрос: {0}")]
    Network(String),

    #[error("Не удалось разобрать ответ: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    match response.status() {
        NOT_FOUND => Err(ApiError::NotFound),
        UNPROCESSABLE_ENTITY => {
            let body = response
                .json::<ValidationErrorResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            log::debug!("validation failed: {} field(s)", body.errors.len());
            Err(ApiError::Validation(body))
        }
        status => Err(ApiError::Http(status)),
    }
}

pub async fn fetch_list<A>() -> Result<Vec<A>, ApiError>
where
    A: AggregateRoot + DeserializeOwned,
{
    let response = Request::get(&api_url(&A::api_path())).send().await?;
    Ok(check(response).await?.json::<Vec<A>>().await?)
}

pub async fn fetch_by_id<A>(id: &str) -> Result<A, ApiError>
where
    A: AggregateRoot + DeserializeOwned,
{
    let response = Request::get(&api_url(&A::api_item_path(id))).send().await?;
    Ok(check(response).await?.json::<A>().await?)
}

pub async fn create<A, D>(dto: &D) -> Result<(), ApiError>
where
    A: AggregateRoot,
    D: Serialize,
{
    let response = Request::post(&api_url(&A::api_path()))
        .json(dto)?
        .send()
        .await?;
    check(response).await?;
    Ok(())
}

pub async fn update<A, D>(id: &str, dto: &D) -> Result<(), ApiError>
where
    A: AggregateRoot,
    D: Serialize,
{
    let response = Request::put(&api_url(&A::api_item_path(id)))
        .json(dto)?
        .send()
        .await?;
    check(response).await?;
    Ok(())
}

/// POST for a new record, PUT for an existing one
pub async fn save<A, D>(dto: &D) -> Result<(), ApiError>
where
    A: AggregateRoot,
    D: AdminForm,
{
    match dto.record_id() {
        Some(id) => update::<A, D>(id, dto).await,
        None => create::<A, D>(dto).await,
    }
}

pub async fn delete<A>(id: &str) -> Result<(), ApiError>
where
    A: AggregateRoot,
{
    let response = Request::delete(&api_url(&A::api_item_path(id))).send().await?;
    check(response).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_falls_back() {
        let err = ApiError::Validation(ValidationErrorResponse::default());
        assert_eq!(err.to_string(), "Проверьте правильность заполнения полей");

        let err = ApiError::Validation(ValidationErrorResponse {
            message: Some("Данные не прошли проверку".to_string()),
            ..Default::default()
        });
        assert_eq!(err.to_string(), "Данные не прошли проверку");
        assert_eq!(ApiError::Http(500).to_string(), "Ошибка сервера: HTTP 500");
    }
}
