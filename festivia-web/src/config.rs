//! Frontend configuration module
//!
//! Build-time configuration for the API origin and the global
//! maintenance switch.

/// Frontend configuration for URLs and global switches.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL every role namespace hangs off.
    pub api_base_url: String,
    /// When set, the entire routed application is replaced by a static
    /// maintenance notice before any routing occurs.
    pub maintenance_mode: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("FESTIVIA_API_BASE_URL")
                .unwrap_or("/api")
                .to_string(),
            maintenance_mode: matches!(
                option_env!("FESTIVIA_MAINTENANCE"),
                Some("1") | Some("true")
            ),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.is_empty());
    }

    #[test]
    fn test_maintenance_defaults_off() {
        let config = FrontendConfig::new();
        assert!(!config.maintenance_mode);
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.api_base_url(), config2.api_base_url());
    }
}
