pub mod api_utils;
pub mod forms;
pub mod http;
pub mod icons;
pub mod list_utils;
