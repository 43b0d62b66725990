//! CLI argument definitions for fundlens.
//!
//! The tool analyzes the funds listed in a JSON config file:
//!
//! ```json
//! {
//!     "URLs": [
//!         "https://www.analizy.pl/<category>/<fund-id>/<fund-name>"
//!     ],
//!     "TimePeriodInMonths": 6
//! }
//! ```
//!
//! For each fund it reports final return, raise ratio, and average
//! increase/decrease over the configured period (plus the same period one
//! year earlier for periods of at most 12 months), then writes a
//! comparison chart.

use std::path::PathBuf;

use clap::Parser;

/// Investment fund analyzer for analizy.pl quotations.
///
/// Fetches each configured fund's price history, derives day-to-day price
/// changes and cumulative return rates, prints summary tables, and renders
/// a comparison chart.
#[derive(Debug, Parser)]
#[command(
    name = "fundlens",
    author,
    version,
    about = "Investment fund analyzer for analizy.pl quotations"
)]
pub struct Cli {
    /// Override the TimePeriodInMonths value from the config file.
    ///
    /// Ignored when zero, matching the config-file semantics.
    #[arg(short = 't', long)]
    pub time_period_months: Option<u32>,

    /// Path to the JSON config file listing fund URLs.
    #[arg(short = 'c', long, default_value = "CONFIG.json")]
    pub config: PathBuf,

    /// Output path for the comparison chart PNG.
    #[arg(long, default_value = "fund-analysis.png")]
    pub chart_out: PathBuf,

    /// Skip chart rendering; print summary tables only.
    #[arg(long, default_value_t = false)]
    pub no_chart: bool,

    /// Per-request timeout budget in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Log level filter (overridden by RUST_LOG when set).
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cli = Cli::parse_from(["fundlens"]);
        assert_eq!(cli.config, PathBuf::from("CONFIG.json"));
        assert_eq!(cli.chart_out, PathBuf::from("fund-analysis.png"));
        assert_eq!(cli.time_period_months, None);
        assert!(!cli.no_chart);
        assert_eq!(cli.timeout_ms, 10_000);
    }

    #[test]
    fn parses_period_override() {
        let cli = Cli::parse_from(["fundlens", "-t", "6", "--no-chart"]);
        assert_eq!(cli.time_period_months, Some(6));
        assert!(cli.no_chart);
    }
}
