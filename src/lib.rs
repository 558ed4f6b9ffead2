// Editable buffer library - exposes all core modules for testing

pub mod buffer;
pub mod char_array;
pub mod error;
pub mod history;

// Re-export commonly used types
pub use buffer::EditableBuffer;
pub use char_array::{BufferConfig, CharArray, DEFAULT_CAPACITY};
pub use error::IndexError;
pub use history::History;
