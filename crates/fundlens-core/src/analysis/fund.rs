use serde::Serialize;

use crate::{DataIntegrityError, ObservationSeries, QuoteDate};

use super::change::{compute_change, ChangePoint};
use super::return_rate::{compute_return_rate, ReturnPoint};

/// Day gap used for the price-volatility indicator.
const DAY_TO_DAY_PERIOD: i64 = 1;

/// Plotting projections drop the most recent point, so a series needs at
/// least two observations to project anything.
const MIN_SERIES_LEN: usize = 2;

/// Plot-ready column pair for one window of one indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSeries {
    pub dates: Vec<QuoteDate>,
    pub values: Vec<f64>,
}

/// Current-window and reference-window series for one indicator family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorPair {
    pub current: IndicatorSeries,
    pub historical: IndicatorSeries,
}

/// One fund's quotation windows and the indicators derived from them.
///
/// The two observation series stay read-only; the four derived sequences
/// (current/reference × change/return) are separate values computed exactly
/// once, at construction. Construction fails fast when either window cannot
/// support the analysis, so an instance always has complete derived data.
#[derive(Debug, Clone)]
pub struct FundAnalysis {
    id: String,
    name: String,
    currency: String,
    current: ObservationSeries,
    reference: ObservationSeries,
    current_changes: Vec<ChangePoint>,
    reference_changes: Vec<ChangePoint>,
    current_returns: Vec<ReturnPoint>,
    reference_returns: Vec<ReturnPoint>,
}

impl FundAnalysis {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        currency: impl Into<String>,
        current: ObservationSeries,
        reference: ObservationSeries,
    ) -> Result<Self, DataIntegrityError> {
        require_projectable(&current)?;
        require_projectable(&reference)?;

        let current_changes = compute_change(&current, DAY_TO_DAY_PERIOD)?;
        let reference_changes = compute_change(&reference, DAY_TO_DAY_PERIOD)?;
        let current_returns = compute_return_rate(&current)?;
        let reference_returns = compute_return_rate(&reference)?;

        Ok(Self {
            id: id.into(),
            name: name.into(),
            currency: currency.into(),
            current,
            reference,
            current_changes,
            reference_changes,
            current_returns,
            reference_returns,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn current_series(&self) -> &ObservationSeries {
        &self.current
    }

    pub fn reference_series(&self) -> &ObservationSeries {
        &self.reference
    }

    /// Day-to-day change columns for both windows, most recent point
    /// dropped. The final observation may cover an incomplete trading
    /// period, so it is excluded from plotting and statistics alike.
    pub fn changes_for_plotting(&self) -> IndicatorPair {
        IndicatorPair {
            current: trim(&self.current_changes, |p| (p.date, p.change_percent)),
            historical: trim(&self.reference_changes, |p| (p.date, p.change_percent)),
        }
    }

    /// Cumulative return columns for both windows, most recent point dropped.
    pub fn returns_for_plotting(&self) -> IndicatorPair {
        IndicatorPair {
            current: trim(&self.current_returns, |p| (p.date, p.return_percent)),
            historical: trim(&self.reference_returns, |p| (p.date, p.return_percent)),
        }
    }
}

fn require_projectable(series: &ObservationSeries) -> Result<(), DataIntegrityError> {
    if series.is_empty() {
        return Err(DataIntegrityError::EmptySeries);
    }
    if series.len() < MIN_SERIES_LEN {
        return Err(DataIntegrityError::TooFewObservations {
            len: series.len(),
            min: MIN_SERIES_LEN,
        });
    }
    Ok(())
}

fn trim<T>(points: &[T], project: impl Fn(&T) -> (QuoteDate, f64)) -> IndicatorSeries {
    let trimmed = &points[..points.len() - 1];
    let (dates, values) = trimmed.iter().map(project).unzip();
    IndicatorSeries { dates, values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Observation, QuoteDate};

    fn series(points: &[(&str, f64)]) -> ObservationSeries {
        ObservationSeries::new(
            points
                .iter()
                .map(|(date, price)| {
                    Observation::new(QuoteDate::parse(date).expect("valid date"), *price)
                        .expect("valid observation")
                })
                .collect(),
        )
    }

    fn sample_fund() -> FundAnalysis {
        let current = series(&[
            ("2024-01-01", 100.0),
            ("2024-01-02", 102.0),
            ("2024-01-03", 101.0),
            ("2024-01-04", 105.0),
        ]);
        let reference = series(&[
            ("2023-01-01", 50.0),
            ("2023-01-02", 51.0),
            ("2023-01-03", 49.0),
        ]);
        FundAnalysis::new("ABC123", "Sample Fund", "PLN", current, reference)
            .expect("valid fund data")
    }

    #[test]
    fn rejects_empty_window() {
        let err = FundAnalysis::new(
            "X",
            "X",
            "PLN",
            series(&[]),
            series(&[("2023-01-01", 50.0), ("2023-01-02", 51.0)]),
        )
        .expect_err("must fail");
        assert_eq!(err, DataIntegrityError::EmptySeries);
    }

    #[test]
    fn rejects_single_point_window() {
        let err = FundAnalysis::new(
            "X",
            "X",
            "PLN",
            series(&[("2024-01-01", 100.0), ("2024-01-02", 101.0)]),
            series(&[("2023-01-01", 50.0)]),
        )
        .expect_err("must fail");
        assert_eq!(
            err,
            DataIntegrityError::TooFewObservations { len: 1, min: 2 }
        );
    }

    #[test]
    fn projections_drop_last_point() {
        let fund = sample_fund();

        let changes = fund.changes_for_plotting();
        assert_eq!(changes.current.values.len(), fund.current_series().len() - 1);
        assert_eq!(
            changes.historical.values.len(),
            fund.reference_series().len() - 1
        );

        let returns = fund.returns_for_plotting();
        assert_eq!(returns.current.values, vec![0.0, 2.0, 1.0]);
        assert_eq!(
            returns.current.dates.last().map(ToString::to_string),
            Some(String::from("2024-01-03"))
        );
    }

    #[test]
    fn derived_changes_use_one_day_period() {
        let fund = sample_fund();
        let changes = fund.changes_for_plotting();
        assert_eq!(changes.current.values, vec![0.0, 2.0, -0.980]);
    }
}
