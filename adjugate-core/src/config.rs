//! Engine configuration

use serde::Deserialize;
use std::env;

/// Absolute tolerance for cell comparison and singularity detection
pub const EPS: f64 = 1e-7;

/// Matrix order above which cofactor expansion logs a warning
pub const DEFAULT_EXPANSION_WARN_ORDER: usize = 10;

/// Tunables shared by the `*_with` operations
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub eps: f64,
    pub expansion_warn_order: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            eps: EPS,
            expansion_warn_order: DEFAULT_EXPANSION_WARN_ORDER,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `ADJUGATE_EPS` and `ADJUGATE_WARN_ORDER`, keeping defaults for
    /// anything missing or unparsable
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(eps) = read_var("ADJUGATE_EPS") {
            config = config.with_eps(eps);
        }
        if let Some(order) = read_var("ADJUGATE_WARN_ORDER") {
            config = config.with_expansion_warn_order(order);
        }
        config
    }

    /// Negative or non-finite tolerances are ignored
    pub fn with_eps(mut self, eps: f64) -> Self {
        if eps.is_finite() && eps >= 0.0 {
            self.eps = eps;
        } else {
            tracing::warn!(eps, "ignoring invalid tolerance");
        }
        self
    }

    pub fn with_expansion_warn_order(mut self, order: usize) -> Self {
        self.expansion_warn_order = order;
        self
    }
}

fn read_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(var = name, value = %raw, "ignoring unparsable setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.eps, 1e-7);
        assert_eq!(config.expansion_warn_order, 10);
        assert_eq!(EngineConfig::new(), config);
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::new().with_eps(1e-3).with_expansion_warn_order(6);
        assert_eq!(config.eps, 1e-3);
        assert_eq!(config.expansion_warn_order, 6);

        assert_eq!(EngineConfig::new().with_eps(-1.0).eps, EPS);
        assert_eq!(EngineConfig::new().with_eps(f64::NAN).eps, EPS);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: EngineConfig = serde_json::from_str(r#"{"eps": 0.001}"#).unwrap();
        assert_eq!(config.eps, 0.001);
        assert_eq!(config.expansion_warn_order, DEFAULT_EXPANSION_WARN_ORDER);
    }

    #[test]
    fn test_from_env() {
        env::set_var("ADJUGATE_EPS", "0.5");
        env::set_var("ADJUGATE_WARN_ORDER", "not-a-number");
        let config = EngineConfig::from_env();
        env::remove_var("ADJUGATE_EPS");
        env::remove_var("ADJUGATE_WARN_ORDER");

        assert_eq!(config.eps, 0.5);
        assert_eq!(config.expansion_warn_order, DEFAULT_EXPANSION_WARN_ORDER);
    }
}
