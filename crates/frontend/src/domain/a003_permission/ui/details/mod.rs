mod view;

pub use view::PermissionDetails;
