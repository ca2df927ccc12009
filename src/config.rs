//! Storefront configuration, read from `STOREFRONT_*` environment variables.

use crate::payment::Payee;
use crate::pricing::DeliveryPolicy;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const ENV_STORE_URL: &str = "STOREFRONT_STORE_URL";
pub const ENV_STORE_KEY: &str = "STOREFRONT_STORE_KEY";
pub const ENV_STORE_TIMEOUT_SECS: &str = "STOREFRONT_STORE_TIMEOUT_SECS";
pub const ENV_DELIVERY_FEE: &str = "STOREFRONT_DELIVERY_FEE";
pub const ENV_FREE_DELIVERY_ABOVE: &str = "STOREFRONT_FREE_DELIVERY_ABOVE";
pub const ENV_UPI_ID: &str = "STOREFRONT_UPI_ID";
pub const ENV_PAYEE_NAME: &str = "STOREFRONT_PAYEE_NAME";
pub const ENV_CATEGORY_ORDER: &str = "STOREFRONT_CATEGORY_ORDER";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Connection settings for the remote table store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Project base URL, without the `/rest/v1` suffix.
    pub base_url: String,
    /// Sent as both `apikey` and bearer token.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorefrontConfig {
    /// `None` runs against the in-memory store.
    pub store: Option<StoreConfig>,
    pub delivery: DeliveryPolicy,
    pub payee: Payee,
    /// Category display order. Empty keeps the order the store returns.
    pub category_order: Vec<String>,
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let store = match get(ENV_STORE_URL) {
            Some(url) => {
                let timeout = parse_or(get(ENV_STORE_TIMEOUT_SECS), ENV_STORE_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS)?;
                let mut store = StoreConfig::new(url).with_timeout(Duration::from_secs(timeout));
                if let Some(key) = get(ENV_STORE_KEY) {
                    store = store.with_api_key(key);
                }
                Some(store)
            }
            None => None,
        };

        let defaults = DeliveryPolicy::default();
        let delivery = DeliveryPolicy::new(
            parse_amount(get(ENV_DELIVERY_FEE), ENV_DELIVERY_FEE, defaults.fee)?,
            parse_amount(get(ENV_FREE_DELIVERY_ABOVE), ENV_FREE_DELIVERY_ABOVE, defaults.free_above)?,
        );

        let mut payee = Payee::default();
        if let Some(upi_id) = get(ENV_UPI_ID) {
            payee.upi_id = upi_id;
        }
        if let Some(name) = get(ENV_PAYEE_NAME) {
            payee.name = name;
        }

        let category_order = get(ENV_CATEGORY_ORDER)
            .map(|raw| {
                raw.split('|')
                    .map(str::trim)
                    .filter(|label| !label.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            store,
            delivery,
            payee,
            category_order,
        })
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

/// Money settings must be finite and not negative.
fn parse_amount(raw: Option<String>, key: &'static str, default: f64) -> Result<f64, ConfigError> {
    let amount = parse_or(raw, key, default)?;
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(ConfigError::Invalid {
            key,
            value: amount.to_string(),
        })
    }
}
