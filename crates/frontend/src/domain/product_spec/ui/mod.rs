mod editor;

pub use editor::ProductSpecEditor;
