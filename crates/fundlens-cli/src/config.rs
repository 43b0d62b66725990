//! JSON config file describing which funds to analyze.
//!
//! The on-disk key names (`URLs`, `TimePeriodInMonths`) are part of the
//! config format and stay as-is.

use std::path::Path;

use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// Fund quotation pages to analyze, one analizy.pl URL each.
    #[serde(rename = "URLs")]
    pub fund_urls: Vec<String>,

    /// Length of the analysis window, counted back from today.
    #[serde(rename = "TimePeriodInMonths")]
    pub time_period_months: u32,
}

impl AnalyzerConfig {
    /// Loads and validates the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        if !path.is_file() {
            return Err(CliError::ConfigMissing {
                path: path.to_owned(),
            });
        }
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|error| CliError::Config(format!("cannot parse {}: {error}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the configured period with a command-line override.
    ///
    /// `None` and `Some(0)` both leave the config value in place.
    pub fn apply_period_override(&mut self, period: Option<u32>) {
        if let Some(period) = period.filter(|months| *months > 0) {
            self.time_period_months = period;
        }
    }

    fn validate(&self) -> Result<(), CliError> {
        if self.fund_urls.is_empty() {
            return Err(CliError::Config("URLs must list at least one fund".into()));
        }
        if self.time_period_months == 0 {
            return Err(CliError::Config(
                "TimePeriodInMonths must be positive".into(),
            ));
        }
        Ok(())
    }
}
