// Process module
// Running editors, scripts and external commands

mod runner;
mod system;

pub use runner::{ProcessRunner, RunError};
pub use system::SystemRunner;
