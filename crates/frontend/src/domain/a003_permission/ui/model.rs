use crate::shared::http::{self, ApiError};
use contracts::domain::a003_permission::Permission;

pub async fn fetch_all() -> Result<Vec<Permission>, ApiError> {
    http::fetch_list::<Permission>().await
}

pub async fn delete_by_id(id: &str) -> Result<(), ApiError> {
    http::delete::<Permission>(id).await
}
