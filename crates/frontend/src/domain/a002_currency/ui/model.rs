use crate::shared::http::{self, ApiError};
use contracts::domain::a002_currency::Currency;

pub async fn fetch_all() -> Result<Vec<Currency>, ApiError> {
    http::fetch_list::<Currency>().await
}

pub async fn delete_by_id(id: &str) -> Result<(), ApiError> {
    http::delete::<Currency>(id).await
}
