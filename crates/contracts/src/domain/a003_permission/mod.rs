pub mod aggregate;

pub use aggregate::{Permission, PermissionDto, PermissionId, FIELDS};
