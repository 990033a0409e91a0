pub mod forms;
pub mod metadata;
pub mod shaping;
