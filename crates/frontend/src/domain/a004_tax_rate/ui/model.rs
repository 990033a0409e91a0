use crate::shared::http::{self, ApiError};
use contracts::domain::a004_tax_rate::TaxRate;

pub async fn fetch_all() -> Result<Vec<TaxRate>, ApiError> {
    http::fetch_list::<TaxRate>().await
}

pub async fn delete_by_id(id: &str) -> Result<(), ApiError> {
    http::delete::<TaxRate>(id).await
}
