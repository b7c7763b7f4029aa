pub mod error;
pub mod item;
pub mod note;
pub mod text;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use item::{Item, ItemDraft};
pub use note::{NewNote, Note, NotePage};
