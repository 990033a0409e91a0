use crate::shared::forms::SelectOption;
use crate::shared::http::{self, ApiError};
use contracts::domain::a001_category::Category;
use contracts::domain::common::AggregateId;

pub async fn fetch_all() -> Result<Vec<Category>, ApiError> {
    http::fetch_list::<Category>().await
}

pub async fn delete_by_id(id: &str) -> Result<(), ApiError> {
    http::delete::<Category>(id).await
}

/// Варианты родительской категории; сама категория в список не попадает
pub fn parent_options(categories: &[Category], exclude_id: Option<&str>) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = categories
        .iter()
        .map(|c| (c.id.as_string(), c))
        .filter(|(id, _)| Some(id.as_str()) != exclude_id)
        .map(|(id, c)| SelectOption::new(id, c.name.clone()))
        .collect();
    options.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
    options
}
