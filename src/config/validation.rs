use crate::config::types::Config;
use crate::ConfigError;

/// Validates a parsed configuration
///
/// Checks that timing values are sane before any network work starts:
///
/// - `page-timeout-secs` must be at least 1
/// - `site-budget-secs` must be at least 1
/// - the per-page timeout must not exceed the per-site budget
/// - `crawl-max-pages` must be at least 1 when the crawl strategy is on
/// - the rendered strategy requires the `rendered` cargo feature
///
/// # Arguments
///
/// * `config` - The configuration to validate
///
/// # Returns
///
/// * `Ok(())` - Configuration is valid
/// * `Err(ConfigError::Validation)` - A check failed
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.discovery.page_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "page-timeout-secs must be at least 1".to_string(),
        ));
    }

    if config.discovery.site_budget_secs == 0 {
        return Err(ConfigError::Validation(
            "site-budget-secs must be at least 1".to_string(),
        ));
    }

    if config.discovery.page_timeout_secs > config.discovery.site_budget_secs {
        return Err(ConfigError::Validation(format!(
            "page-timeout-secs ({}) exceeds site-budget-secs ({})",
            config.discovery.page_timeout_secs, config.discovery.site_budget_secs
        )));
    }

    if config.strategies.crawl && config.discovery.crawl_max_pages == 0 {
        return Err(ConfigError::Validation(
            "crawl-max-pages must be at least 1 when the crawl strategy is enabled".to_string(),
        ));
    }

    #[cfg(not(feature = "rendered"))]
    if config.strategies.rendered {
        return Err(ConfigError::Validation(
            "the rendered strategy requires building with the 'rendered' feature".to_string(),
        ));
    }

    if config.user_agent.client_name.is_empty() {
        return Err(ConfigError::Validation(
            "client-name must not be empty".to_string(),
        ));
    }

    Ok(())
}
