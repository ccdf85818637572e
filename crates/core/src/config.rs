//! Settings file handling for CakeCollate.
//!
//! The settings file is YAML and only says where the data files live. Every
//! path may use `~`, which is expanded when the storage is built.

use std::fs::File;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::file_handling::JsonStorage;

/// Default path for the settings file
const DEFAULT_CONFIG_PATH: &str = "~/.cakecollate/config.yml";
/// Default path for the orders data file
const DEFAULT_ORDERS_PATH: &str = "~/.cakecollate/data/cakecollate.json";
/// Default path for the order items data file
const DEFAULT_ORDER_ITEMS_PATH: &str = "~/.cakecollate/data/orderItems.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub orders_path: String,
    pub order_items_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orders_path: DEFAULT_ORDERS_PATH.to_string(),
            order_items_path: DEFAULT_ORDER_ITEMS_PATH.to_string(),
        }
    }
}

impl Settings {
    /// Replaces the paths that were given explicitly, e.g. on the command line.
    ///
    /// # Arguments
    ///
    /// * `orders_path` - Orders data file to use instead of the configured one
    /// * `order_items_path` - Order items data file to use instead of the configured one
    #[must_use]
    pub fn with_overrides(
        self,
        orders_path: Option<String>,
        order_items_path: Option<String>,
    ) -> Self {
        Self {
            orders_path: orders_path.unwrap_or(self.orders_path),
            order_items_path: order_items_path.unwrap_or(self.order_items_path),
        }
    }

    /// Builds the JSON storage for these paths, with `~` expanded.
    #[must_use]
    pub fn storage(&self) -> JsonStorage {
        JsonStorage::new(
            expand_path(&self.orders_path),
            expand_path(&self.order_items_path),
        )
    }
}

/// Resolves the settings file path.
///
/// Uses `config_path_arg` when given and the default path otherwise, with
/// `~` expanded either way.
///
/// # Arguments
///
/// * `config_path_arg` - Optional custom settings file path
///
/// # Returns
///
/// The resolved path to the settings file
///
/// # Examples
///
/// ```
/// use cake_collate_core::config::get_config_path;
///
/// let custom_path = get_config_path(Some("/path/to/config.yml"));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
#[must_use]
pub fn get_config_path(config_path_arg: Option<&str>) -> String {
    expand_path(config_path_arg.unwrap_or(DEFAULT_CONFIG_PATH))
}

/// Expands a leading `~` to the home directory.
///
/// # Arguments
///
/// * `path` - Path that may start with `~`
///
/// # Returns
///
/// The path with `~` replaced, or `path` unchanged if it has none
///
/// # Examples
///
/// ```
/// use cake_collate_core::config::expand_path;
///
/// assert_eq!(expand_path("/tmp/orders.json"), "/tmp/orders.json");
/// assert!(!expand_path("~/orders.json").starts_with('~'));
/// ```
#[must_use]
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

/// Reads the settings at `config_path`, or the defaults if there is no such file.
///
/// # Arguments
///
/// * `config_path` - Path to the YAML settings file, already expanded
///
/// # Errors
///
/// Returns a [`StorageError`] if the file exists but cannot be read or is not
/// valid settings YAML.
pub fn load_settings(config_path: &str) -> Result<Settings, StorageError> {
    if !Path::new(config_path).exists() {
        info!("Settings file `{config_path}` not found. Using default settings.");
        return Ok(Settings::default());
    }

    let reader =
        File::open(config_path).map_err(|e| StorageError::io_error("settings", config_path, e))?;
    let settings: Settings = serde_yaml::from_reader(reader)
        .map_err(|e| StorageError::yaml_error("reading", "settings", config_path, e))?;

    debug!("Loaded settings: {settings:?}");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(None);
        assert!(result.ends_with(".cakecollate/config.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_config_path_with_tilde() {
        let result = get_config_path(Some("~/my-config.yml"));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-config.yml"));
    }

    #[test]
    fn test_missing_settings_file_uses_defaults() {
        let settings = load_settings("/this/path/does/not/exist.yml").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_settings_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "orders_path: /data/orders.json").unwrap();

        let settings = load_settings(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings.orders_path, "/data/orders.json");
        assert_eq!(settings.order_items_path, DEFAULT_ORDER_ITEMS_PATH);
    }

    #[test]
    fn test_invalid_settings_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "orders_path: [unclosed").unwrap();

        let result = load_settings(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(StorageError::Yaml { .. })));
    }

    #[test]
    fn test_overrides_and_expansion() {
        let settings = Settings::default().with_overrides(Some("~/o.json".to_string()), None);
        let storage = settings.storage();

        assert!(!storage.orders_path().starts_with('~'));
        assert!(storage.orders_path().ends_with("o.json"));
        assert!(storage.order_items_path().ends_with(".cakecollate/data/orderItems.json"));
    }
}
