// Line editor module
// Single-line command buffer with a cursor

mod line_editor;

pub use line_editor::{completion_token, LineEditor};
