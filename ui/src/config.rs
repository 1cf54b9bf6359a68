//! Build-time settings for the console.

use store::StoreConfig;
use store::config::{DEFAULT_COUNTRY_CODE, DEFAULT_KEY_PREFIX, DEFAULT_PAGE_SIZE};

pub const DEFAULT_LOG_FILTER: &str = "error,ui=debug,store=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub store: StoreConfig,
    /// `EnvFilter` directives for the browser console.
    pub log_filter: String,
}

impl ConsoleConfig {
    /// Read the optional `FIELDBOOK_*` variables baked in at compile time.
    /// There is no runtime environment in the browser.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("FIELDBOOK_STORAGE_PREFIX"),
            option_env!("FIELDBOOK_LOG_FILTER"),
            option_env!("FIELDBOOK_COUNTRY_CODE"),
        )
    }

    fn from_values(
        prefix: Option<&str>,
        log_filter: Option<&str>,
        country_code: Option<&str>,
    ) -> Self {
        let country_code = country_code
            .map(|cc| cc.trim().trim_start_matches('+'))
            .filter(|cc| !cc.is_empty() && cc.chars().all(|c| c.is_ascii_digit()))
            .unwrap_or(DEFAULT_COUNTRY_CODE);

        Self {
            store: StoreConfig {
                key_prefix: prefix.unwrap_or(DEFAULT_KEY_PREFIX).to_string(),
                default_page_size: DEFAULT_PAGE_SIZE,
                default_country_code: country_code.to_string(),
            },
            log_filter: log_filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or(DEFAULT_LOG_FILTER)
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::from_values(None, None, None);
        assert_eq!(config.store, StoreConfig::default());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_overrides() {
        let config =
            ConsoleConfig::from_values(Some("acme."), Some("debug"), Some("+1"));
        assert_eq!(config.store.key_prefix, "acme.");
        assert_eq!(config.store.default_country_code, "1");
        assert_eq!(config.log_filter, "debug");

        let config = ConsoleConfig::from_values(None, Some(" "), Some("uk"));
        assert_eq!(config.store.default_country_code, DEFAULT_COUNTRY_CODE);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
