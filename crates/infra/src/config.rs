//! Environment-driven configuration.
//!
//! | variable | values | default |
//! |---|---|---|
//! | `STOREFRONT_STOCK_WRITE_MODE` | `sequential`, `compensating` | `sequential` |
//! | `STOREFRONT_SEED_PATH` | path to a JSON seed file | unset |

use std::path::PathBuf;

use storefront_orders::StockWriteMode;

pub const STOCK_WRITE_MODE_VAR: &str = "STOREFRONT_STOCK_WRITE_MODE";
pub const SEED_PATH_VAR: &str = "STOREFRONT_SEED_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub stock_write_mode: StockWriteMode,
    pub seed_path: Option<PathBuf>,
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Invalid values fall back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let stock_write_mode = match lookup(STOCK_WRITE_MODE_VAR) {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(
                    "{STOCK_WRITE_MODE_VAR}={raw:?} ignored ({err}); using sequential"
                );
                StockWriteMode::default()
            }),
            None => StockWriteMode::default(),
        };

        let seed_path = lookup(SEED_PATH_VAR)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Self {
            stock_write_mode,
            seed_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> StorefrontConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), StorefrontConfig::default());
    }

    #[test]
    fn reads_both_variables() {
        let cfg = config(&[
            (STOCK_WRITE_MODE_VAR, "compensating"),
            (SEED_PATH_VAR, "/tmp/seed.json"),
        ]);

        assert_eq!(cfg.stock_write_mode, StockWriteMode::Compensating);
        assert_eq!(cfg.seed_path, Some(PathBuf::from("/tmp/seed.json")));
    }

    #[test]
    fn invalid_mode_falls_back_to_sequential() {
        let cfg = config(&[(STOCK_WRITE_MODE_VAR, "two-phase")]);

        assert_eq!(cfg.stock_write_mode, StockWriteMode::Sequential);
    }

    #[test]
    fn blank_seed_path_is_ignored() {
        assert_eq!(config(&[(SEED_PATH_VAR, "  ")]).seed_path, None);
    }
}
