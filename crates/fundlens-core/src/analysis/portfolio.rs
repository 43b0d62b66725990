use std::collections::BTreeMap;

use serde::Serialize;

use super::fund::FundAnalysis;
use super::round_to;

const SUMMARY_DECIMALS: u32 = 2;

/// Reference-year statistics are only meaningful for windows that fit inside
/// one year.
const REFERENCE_GATE_MONTHS: u32 = 12;

/// Cross-fund summary statistics for one fund in one time window.
///
/// `None` marks a statistic that is undefined for the window (no qualifying
/// change points), as opposed to a computed zero. Rendering decides how to
/// display the gap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundSummary {
    pub fund_id: String,
    pub name: String,
    pub final_return_percent: f64,
    pub raise_ratio_percent: Option<f64>,
    pub avg_increase_percent: Option<f64>,
    pub avg_decrease_percent: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Window {
    Current,
    Reference,
}

/// The full analysis for a set of funds over one configured time period.
///
/// Owns its fund analyses exclusively; summaries are computed once at
/// construction from each fund's trimmed indicator projections. Funds are
/// keyed and iterated by fund id, so output order is deterministic.
#[derive(Debug, Clone)]
pub struct PortfolioAnalysis {
    time_period_months: u32,
    funds: BTreeMap<String, FundAnalysis>,
    summaries: Vec<FundSummary>,
    reference_summaries: Option<Vec<FundSummary>>,
}

impl PortfolioAnalysis {
    pub fn new(funds: Vec<FundAnalysis>, time_period_months: u32) -> Self {
        let funds: BTreeMap<String, FundAnalysis> = funds
            .into_iter()
            .map(|fund| (fund.id().to_owned(), fund))
            .collect();

        let summaries = funds
            .values()
            .map(|fund| summarize(fund, Window::Current))
            .collect();

        // Comparing against "the same window last year" only makes sense
        // when the window itself spans at most a year; longer windows omit
        // reference summaries entirely rather than zeroing them.
        let reference_summaries = (time_period_months <= REFERENCE_GATE_MONTHS).then(|| {
            funds
                .values()
                .map(|fund| summarize(fund, Window::Reference))
                .collect()
        });

        Self {
            time_period_months,
            funds,
            summaries,
            reference_summaries,
        }
    }

    pub fn time_period_months(&self) -> u32 {
        self.time_period_months
    }

    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }

    /// Fund analyses in fund-id order.
    pub fn funds(&self) -> impl Iterator<Item = &FundAnalysis> {
        self.funds.values()
    }

    /// Current-window summaries, one per fund, in fund-id order.
    pub fn summaries(&self) -> &[FundSummary] {
        &self.summaries
    }

    /// Reference-window summaries; `None` when the configured period exceeds
    /// twelve months and the year-over-year comparison is omitted.
    pub fn reference_summaries(&self) -> Option<&[FundSummary]> {
        self.reference_summaries.as_deref()
    }
}

fn summarize(fund: &FundAnalysis, window: Window) -> FundSummary {
    let changes = fund.changes_for_plotting();
    let returns = fund.returns_for_plotting();
    let (change_values, return_values) = match window {
        Window::Current => (changes.current.values, returns.current.values),
        Window::Reference => (changes.historical.values, returns.historical.values),
    };

    let final_return_percent = return_values.last().copied().unwrap_or(0.0);

    // Sentinel zeros fall out of both partitions here, exactly like real
    // zero-change days: they shrink the raise-ratio denominator instead of
    // counting as neutral observations.
    let increases: Vec<f64> = change_values.iter().copied().filter(|v| *v > 0.0).collect();
    let decreases: Vec<f64> = change_values.iter().copied().filter(|v| *v < 0.0).collect();

    let qualifying = increases.len() + decreases.len();
    let raise_ratio_percent = (qualifying > 0)
        .then(|| round_to(increases.len() as f64 / qualifying as f64 * 100.0, SUMMARY_DECIMALS));

    FundSummary {
        fund_id: fund.id().to_owned(),
        name: fund.name().to_owned(),
        final_return_percent,
        raise_ratio_percent,
        avg_increase_percent: mean(&increases),
        avg_decrease_percent: mean(&decreases),
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(round_to(sum / values.len() as f64, SUMMARY_DECIMALS))
}
