use crate::shared::list_query::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use crate::shared::theme::PREPAINT_STORAGE_KEY;
use anyhow::bail;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub theme: ThemeConfig,
    pub orders: OrderListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeConfig {
    /// localStorage key holding "light" or "dark".
    pub storage_key: String,
}

impl ThemeConfig {
    /// Whether the pre-paint script and the store read the same key.
    pub fn matches_prepaint_key(&self) -> bool {
        self.storage_key == PREPAINT_STORAGE_KEY
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OrderListConfig {
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
    /// Rows checked when the order list first opens.
    #[serde(default)]
    pub initial_selection: Vec<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r##"
[theme]
storage_key = "theme"

[orders]
page_size_options = [5, 10, 25, 50]
default_page_size = 10
initial_selection = ["#CM9804"]
"##;

impl DashboardConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: DashboardConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.theme.storage_key.trim().is_empty() {
            bail!("theme.storage_key must not be empty");
        }
        let orders = &self.orders;
        if orders.page_size_options.is_empty() || orders.page_size_options.contains(&0) {
            bail!("orders.page_size_options must be non-empty and positive");
        }
        if !orders.page_size_options.contains(&orders.default_page_size) {
            bail!(
                "orders.default_page_size {} is not one of {:?}",
                orders.default_page_size,
                orders.page_size_options
            );
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig {
                storage_key: PREPAINT_STORAGE_KEY.to_string(),
            },
            orders: OrderListConfig {
                page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
                default_page_size: DEFAULT_PAGE_SIZE,
                initial_selection: vec!["#CM9804".to_string()],
            },
        }
    }
}

/// Load the embedded configuration, falling back to the compiled-in defaults.
pub fn load_config() -> DashboardConfig {
    match DashboardConfig::from_toml(DEFAULT_CONFIG) {
        Ok(config) => {
            if !config.theme.matches_prepaint_key() {
                log::warn!(
                    "config: theme.storage_key {:?} differs from the pre-paint key {:?}; \
                     the first paint may show the wrong theme",
                    config.theme.storage_key,
                    PREPAINT_STORAGE_KEY
                );
            }
            config
        }
        Err(e) => {
            log::warn!("config: embedded configuration rejected, using defaults: {e:#}");
            DashboardConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = DashboardConfig::from_toml(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_storage_key_matches_prepaint_key() {
        assert!(load_config().theme.matches_prepaint_key());
        assert!(DashboardConfig::default().theme.matches_prepaint_key());

        let custom = ThemeConfig {
            storage_key: "dashboard-theme".to_string(),
        };
        assert!(!custom.matches_prepaint_key());
    }

    #[test]
    fn test_load_config() {
        let config = load_config();
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.orders.default_page_size, 10);
        assert_eq!(config.orders.initial_selection, vec!["#CM9804"]);
    }

    #[test]
    fn test_default_page_size_must_be_an_option() {
        let err = DashboardConfig::from_toml(
            r#"
[theme]
storage_key = "theme"

[orders]
page_size_options = [5, 10]
default_page_size = 25
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("default_page_size"));
    }

    #[test]
    fn test_initial_selection_is_optional() {
        let config = DashboardConfig::from_toml(
            r#"
[theme]
storage_key = "app-theme"

[orders]
page_size_options = [20]
default_page_size = 20
"#,
        )
        .unwrap();
        assert!(config.orders.initial_selection.is_empty());
        assert_eq!(config.theme.storage_key, "app-theme");
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(DashboardConfig::from_toml("[orders").is_err());
        assert!(DashboardConfig::from_toml("").is_err());
    }
}
