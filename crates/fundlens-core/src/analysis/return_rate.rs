use serde::Serialize;

use crate::{DataIntegrityError, ObservationSeries, QuoteDate};

use super::round_to;

const RETURN_DECIMALS: u32 = 2;

/// Cumulative percentage return at one observation relative to the series
/// baseline (its first point).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReturnPoint {
    pub date: QuoteDate,
    pub return_percent: f64,
}

/// Compute the cumulative return at every observation of `series`.
///
/// The baseline is the first observation, so the first output value is
/// always `0.0`. Same length and order as the input; pure and idempotent.
pub fn compute_return_rate(
    series: &ObservationSeries,
) -> Result<Vec<ReturnPoint>, DataIntegrityError> {
    let baseline = series.first().ok_or(DataIntegrityError::EmptySeries)?.price();

    Ok(series
        .iter()
        .map(|observation| ReturnPoint {
            date: observation.date(),
            return_percent: round_to(
                (observation.price() / baseline - 1.0) * 100.0,
                RETURN_DECIMALS,
            ),
        })
        .collect())
}
