// Configuration module
// Public interface for configuration loading

mod colors;
pub mod constants;
mod loader;
mod settings;

pub use colors::{ColorScheme, ColorSpec, ListingColors, PromptColors};
pub use loader::{config_path, load_config, load_config_from};
pub use settings::{Config, FileConfig};
