pub mod config;
pub mod util;

pub use config::theme::{Theme, ThemeMode};
pub use config::{Config, ConfigError};
pub use util::{Trend, format_change, format_usd};

use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "cryptoscope";

pub fn config_path(path_name: &str) -> Option<PathBuf> {
    dirs_next::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(path_name))
}
