// CLI module
//
// Keymap:    logical keys to prompt actions
// Render:    one frame of the screen into a Canvas
// EventLoop: key handling, dispatch to the resolver, redraws

mod event_loop;
pub mod help;
mod keymap;
mod render;

pub use event_loop::{EventLoop, LoopExit};
pub use keymap::{key_action, KeyAction};
pub use render::{Body, Screen};
