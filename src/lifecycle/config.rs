//! Runtime configuration read from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `CATALOG_CHANNEL_CAPACITY` | 32 |
//! | `CATALOG_DEFAULT_PAGE_SIZE` | 25 |
//! | `CATALOG_MAX_PAGE_SIZE` | 1000 |

use actor_framework::page::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use actor_framework::PageLimits;
use thiserror::Error;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("default page size {default_size} exceeds maximum page size {max_size}")]
    InconsistentPageLimits { default_size: usize, max_size: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Mailbox size of every actor.
    pub channel_capacity: usize,
    pub page_limits: PageLimits,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            page_limits: PageLimits::default(),
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a configuration from any variable source. Unset variables take their
    /// defaults; set ones must parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &'static str, default: usize| -> Result<usize, ConfigError> {
            match lookup(var) {
                None => Ok(default),
                Some(raw) => match raw.trim().parse::<usize>() {
                    Ok(value) if value > 0 => Ok(value),
                    _ => Err(ConfigError::InvalidNumber { var, value: raw }),
                },
            }
        };

        let channel_capacity = read("CATALOG_CHANNEL_CAPACITY", DEFAULT_CHANNEL_CAPACITY)?;
        let default_size = read("CATALOG_DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let max_size = read("CATALOG_MAX_PAGE_SIZE", MAX_PAGE_SIZE)?;
        if default_size > max_size {
            return Err(ConfigError::InconsistentPageLimits {
                default_size,
                max_size,
            });
        }

        Ok(Self {
            channel_capacity,
            page_limits: PageLimits {
                default_size,
                max_size,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn unset_variables_use_defaults() {
        let config = CatalogConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.page_limits.default_size, 25);
        assert_eq!(config.page_limits.max_size, 1000);
    }

    #[test]
    fn set_variables_override() {
        let config = CatalogConfig::from_lookup(lookup(&[
            ("CATALOG_CHANNEL_CAPACITY", "8"),
            ("CATALOG_MAX_PAGE_SIZE", " 100 "),
        ]))
        .unwrap();
        assert_eq!(config.channel_capacity, 8);
        assert_eq!(config.page_limits.max_size, 100);
        assert_eq!(config.page_limits.default_size, 25);
    }

    #[test]
    fn zero_and_garbage_are_rejected() {
        assert_eq!(
            CatalogConfig::from_lookup(lookup(&[("CATALOG_CHANNEL_CAPACITY", "0")])),
            Err(ConfigError::InvalidNumber {
                var: "CATALOG_CHANNEL_CAPACITY",
                value: "0".into()
            })
        );
        assert!(matches!(
            CatalogConfig::from_lookup(lookup(&[("CATALOG_DEFAULT_PAGE_SIZE", "lots")])),
            Err(ConfigError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn default_page_size_cannot_exceed_maximum() {
        assert_eq!(
            CatalogConfig::from_lookup(lookup(&[
                ("CATALOG_DEFAULT_PAGE_SIZE", "50"),
                ("CATALOG_MAX_PAGE_SIZE", "10"),
            ])),
            Err(ConfigError::InconsistentPageLimits {
                default_size: 50,
                max_size: 10
            })
        );
    }
}
