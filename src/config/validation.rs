use crate::config::types::{Config, CrawlConfig, HttpConfig, OutputConfig};
use crate::product::SiteRules;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawl_config(&config.crawl)?;
    validate_site_rules(&config.site)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawl configuration
fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    validate_seed_url(&config.seed_url)
}

/// Validates a seed URL: it must parse and use the HTTP or HTTPS scheme
pub fn validate_seed_url(seed_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(seed_url).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed_url, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Seed URL '{}' must use HTTP or HTTPS scheme",
            seed_url
        )));
    }

    Ok(())
}

/// Validates the per-site extraction rules
fn validate_site_rules(rules: &SiteRules) -> Result<(), ConfigError> {
    validate_token("domain_token", &rules.domain_token)?;
    validate_token("product_marker_class", &rules.product_marker_class)?;
    validate_token("current_price_class", &rules.current_price_class)?;
    validate_token("original_price_class", &rules.original_price_class)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Class names and the domain token are matched literally, so they must be a
/// single non-empty word
fn validate_token(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{} cannot be empty", field)));
    }

    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "{} must not contain whitespace, got '{}'",
            field, value
        )));
    }

    Ok(())
}
