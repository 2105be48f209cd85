// Color Scheme Configuration - Customizable screen colors
//
// Every element MegaCLI draws takes its color from here, so a `[colors]`
// table in the config file can restyle the prompt, the listing and the
// messages.

use crossterm::style::Color;
use serde::{Deserialize, Serialize};

/// Color scheme for everything drawn on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// `---=[ MegaCLI ]=---`
    #[serde(default = "default_light_magenta")]
    pub header: ColorSpec,

    /// Tracked directory index line
    #[serde(default = "default_light_yellow")]
    pub dir_index: ColorSpec,

    /// Prompt, listing and cursor colors
    #[serde(default)]
    pub prompt: PromptColors,

    #[serde(default)]
    pub listing: ListingColors,

    /// Command output
    #[serde(default = "default_reset")]
    pub output: ColorSpec,

    /// Error messages
    #[serde(default = "default_red")]
    pub error: ColorSpec,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header: default_light_magenta(),
            dir_index: default_light_yellow(),
            prompt: PromptColors::default(),
            listing: ListingColors::default(),
            output: default_reset(),
            error: default_red(),
        }
    }
}

impl ColorScheme {
    /// Names of colors that do not parse, for validation.
    pub fn unknown_colors(&self) -> Vec<String> {
        let specs = [
            &self.header,
            &self.dir_index,
            &self.prompt.path,
            &self.prompt.marker,
            &self.prompt.input,
            &self.prompt.cursor_fg,
            &self.prompt.cursor_bg,
            &self.listing.file,
            &self.listing.directory,
            &self.listing.executable,
            &self.listing.symlink,
            &self.listing.binary,
            &self.listing.suffix,
            &self.output,
            &self.error,
        ];
        specs
            .into_iter()
            .filter_map(|spec| match spec {
                ColorSpec::Named(name) if parse_named_color(name).is_none() => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Prompt line colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptColors {
    /// Current directory
    #[serde(default = "default_light_green")]
    pub path: ColorSpec,

    /// The `>` after the directory
    #[serde(default = "default_light_red")]
    pub marker: ColorSpec,

    /// Typed text
    #[serde(default = "default_light_yellow")]
    pub input: ColorSpec,

    #[serde(default = "default_black")]
    pub cursor_fg: ColorSpec,

    #[serde(default = "default_green")]
    pub cursor_bg: ColorSpec,
}

impl Default for PromptColors {
    fn default() -> Self {
        Self {
            path: default_light_green(),
            marker: default_light_red(),
            input: default_light_yellow(),
            cursor_fg: default_black(),
            cursor_bg: default_green(),
        }
    }
}

/// Directory listing colors, one per entry kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingColors {
    #[serde(default = "default_reset")]
    pub file: ColorSpec,

    #[serde(default = "default_blue")]
    pub directory: ColorSpec,

    #[serde(default = "default_light_green")]
    pub executable: ColorSpec,

    #[serde(default = "default_light_red")]
    pub symlink: ColorSpec,

    #[serde(default = "default_light_magenta")]
    pub binary: ColorSpec,

    /// The `/`, `*`, `^` and `¤` markers after names
    #[serde(default = "default_white")]
    pub suffix: ColorSpec,
}

impl Default for ListingColors {
    fn default() -> Self {
        Self {
            file: default_reset(),
            directory: default_blue(),
            executable: default_light_green(),
            symlink: default_light_red(),
            binary: default_light_magenta(),
            suffix: default_white(),
        }
    }
}

/// Color specification - supports named colors and RGB
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (e.g., "red", "lightgreen", "default")
    Named(String),
    /// RGB color (e.g., [255, 0, 0])
    Rgb(u8, u8, u8),
}

impl ColorSpec {
    /// Convert to a crossterm color. Unknown names fall back to the
    /// terminal default.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Named(name) => parse_named_color(name).unwrap_or(Color::Reset),
            ColorSpec::Rgb(r, g, b) => Color::Rgb {
                r: *r,
                g: *g,
                b: *b,
            },
        }
    }
}

/// Parse a color name. The plain names are the normal-intensity ANSI
/// colors and the `light` names the bright ones.
fn parse_named_color(name: &str) -> Option<Color> {
    let color = match name.to_lowercase().replace(['_', '-', ' '], "").as_str() {
        "default" | "reset" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::DarkRed,
        "green" => Color::DarkGreen,
        "yellow" => Color::DarkYellow,
        "blue" => Color::DarkBlue,
        "magenta" => Color::DarkMagenta,
        "cyan" => Color::DarkCyan,
        "gray" | "grey" => Color::Grey,
        "darkgray" | "darkgrey" => Color::DarkGrey,
        "lightred" => Color::Red,
        "lightgreen" => Color::Green,
        "lightyellow" => Color::Yellow,
        "lightblue" => Color::Blue,
        "lightmagenta" => Color::Magenta,
        "lightcyan" => Color::Cyan,
        "white" => Color::White,
        _ => return None,
    };
    Some(color)
}

// Default color constructors
fn default_reset() -> ColorSpec {
    ColorSpec::Named("default".to_string())
}

fn default_black() -> ColorSpec {
    ColorSpec::Named("black".to_string())
}

fn default_red() -> ColorSpec {
    ColorSpec::Named("red".to_string())
}

fn default_green() -> ColorSpec {
    ColorSpec::Named("green".to_string())
}

fn default_blue() -> ColorSpec {
    ColorSpec::Named("blue".to_string())
}

fn default_white() -> ColorSpec {
    ColorSpec::Named("white".to_string())
}

fn default_light_red() -> ColorSpec {
    ColorSpec::Named("lightred".to_string())
}

fn default_light_green() -> ColorSpec {
    ColorSpec::Named("lightgreen".to_string())
}

fn default_light_yellow() -> ColorSpec {
    ColorSpec::Named("lightyellow".to_string())
}

fn default_light_magenta() -> ColorSpec {
    ColorSpec::Named("lightmagenta".to_string())
}
