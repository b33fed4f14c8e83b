use crate::Representation;
use anyhow::{ensure, Context, Result};
use std::str::FromStr;

/// Settings of a simulation session.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub interval_ms: u64,
    pub representation: Representation,
    /// `None` seeds from entropy.
    pub seed: Option<u64>,
    pub fill_rate: f64,
    /// Generations to run before the headless binary stops.
    pub generations: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Self::FIELD_SIZE,
            height: Self::FIELD_SIZE,
            interval_ms: Self::INTERVAL_MS,
            representation: Representation::default(),
            seed: None,
            fill_rate: Self::FILL_RATE,
            generations: Self::GENERATIONS,
        }
    }
}

impl Config {
    pub const FIELD_SIZE: usize = 10;
    pub const INTERVAL_MS: u64 = 100;
    pub const FILL_RATE: f64 = 0.3;
    pub const GENERATIONS: u64 = 20;

    pub const ENV_WIDTH: &'static str = "LIFE_WIDTH";
    pub const ENV_HEIGHT: &'static str = "LIFE_HEIGHT";
    pub const ENV_INTERVAL_MS: &'static str = "LIFE_INTERVAL_MS";
    pub const ENV_REPRESENTATION: &'static str = "LIFE_REPRESENTATION";
    pub const ENV_SEED: &'static str = "LIFE_SEED";
    pub const ENV_FILL_RATE: &'static str = "LIFE_FILL_RATE";
    pub const ENV_GENERATIONS: &'static str = "LIFE_GENERATIONS";

    /// Defaults overridden by the `LIFE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the `LIFE_*` keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        override_with(&lookup, Self::ENV_WIDTH, &mut config.width)?;
        override_with(&lookup, Self::ENV_HEIGHT, &mut config.height)?;
        override_with(&lookup, Self::ENV_INTERVAL_MS, &mut config.interval_ms)?;
        override_with(&lookup, Self::ENV_REPRESENTATION, &mut config.representation)?;
        override_with(&lookup, Self::ENV_FILL_RATE, &mut config.fill_rate)?;
        override_with(&lookup, Self::ENV_GENERATIONS, &mut config.generations)?;
        if let Some(raw) = lookup(Self::ENV_SEED) {
            let seed = raw
                .trim()
                .parse()
                .with_context(|| format!("{} is not a seed: {raw:?}", Self::ENV_SEED))?;
            config.seed = Some(seed);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "field size {}x{} must be positive",
            self.width,
            self.height
        );
        ensure!(
            (0.0..=1.0).contains(&self.fill_rate),
            "fill rate {} is not a probability",
            self.fill_rate
        );
        Ok(())
    }
}

fn override_with<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    value: &mut T,
) -> Result<()>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    if let Some(raw) = lookup(key) {
        *value = raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("failed to parse {key}={raw:?}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!((config.width, config.height), (10, 10));
        assert_eq!(config.representation, Representation::Packed);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("LIFE_WIDTH", "64"),
            ("LIFE_HEIGHT", " 48 "),
            ("LIFE_INTERVAL_MS", "0"),
            ("LIFE_REPRESENTATION", "Dense"),
            ("LIFE_SEED", "42"),
            ("LIFE_FILL_RATE", "0.5"),
        ]))
        .unwrap();
        assert_eq!((config.width, config.height), (64, 48));
        assert_eq!(config.interval_ms, 0);
        assert_eq!(config.representation, Representation::Dense);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.fill_rate, 0.5);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_lookup(lookup(&[("LIFE_WIDTH", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("LIFE_HEIGHT", "-3")])).is_err());
        assert!(Config::from_lookup(lookup(&[("LIFE_FILL_RATE", "1.5")])).is_err());
        assert!(Config::from_lookup(lookup(&[("LIFE_REPRESENTATION", "sparse")])).is_err());
        let err = Config::from_lookup(lookup(&[("LIFE_SEED", "x")])).unwrap_err();
        assert!(err.to_string().contains("LIFE_SEED"));
    }
}
