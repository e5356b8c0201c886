use std::str::FromStr;

use anyhow::Context;
use common::logger::LogFormat;
use scorer::ScorerConfig;
use scorer::config::{DEFAULT_THRESHOLD, DEFAULT_TREND_WINDOW};

pub const ENV_THRESHOLD: &str = "PREDICTOR_THRESHOLD";
pub const ENV_TREND_WINDOW: &str = "PREDICTOR_TREND_WINDOW";
pub const ENV_APP_ENV: &str = "APP_ENV";

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Decision boundary between "above" and "under" rounds.
    pub threshold: f64,

    /// How many of the most recent rounds feed the trend signal.
    pub trend_window: usize,

    /// `production` switches logs to JSON.
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let threshold = parse_or(&lookup, ENV_THRESHOLD, DEFAULT_THRESHOLD)?;
        let trend_window = parse_or(&lookup, ENV_TREND_WINDOW, DEFAULT_TREND_WINDOW)?;
        let log_format = LogFormat::for_env(&lookup(ENV_APP_ENV).unwrap_or_default());

        Ok(Self {
            threshold,
            trend_window,
            log_format,
        })
    }

    /// Merges command-line overrides and validates the result.
    pub fn scorer_config(
        &self,
        threshold: Option<f64>,
        trend_window: Option<usize>,
    ) -> anyhow::Result<ScorerConfig> {
        ScorerConfig::new(
            threshold.unwrap_or(self.threshold),
            trend_window.unwrap_or(self.trend_window),
        )
        .context("invalid scorer configuration")
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key}={raw:?} is not valid")),
        None => Ok(default),
    }
}
