//! Indicator engines and aggregation.
//!
//! The computation pipeline, leaves first:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`change`] | Trailing percentage change per observation for a period |
//! | [`return_rate`] | Cumulative return per observation vs. the baseline |
//! | [`fund`] | Per-fund aggregation and plot-ready projections |
//! | [`portfolio`] | Cross-fund summaries and window gating |
//!
//! Everything here is synchronous, pure in-memory arithmetic over series the
//! provider already fetched and validated. No state is shared across funds,
//! so per-fund computation parallelizes trivially if fetching ever does.

pub mod change;
pub mod fund;
pub mod portfolio;
pub mod return_rate;

pub use change::{compute_change, ChangePoint};
pub use fund::{FundAnalysis, IndicatorPair, IndicatorSeries};
pub use portfolio::{FundSummary, PortfolioAnalysis};
pub use return_rate::{compute_return_rate, ReturnPoint};

/// Round to a fixed number of decimal places, half away from zero.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn rounds_to_requested_precision() {
        assert_eq!(round_to(-0.980392, 3), -0.980);
        assert_eq!(round_to(3.960396, 3), 3.960);
        assert_eq!(round_to(66.66666, 2), 66.67);
    }
}
