use serde::Serialize;

use crate::{DataIntegrityError, ObservationSeries, QuoteDate};

use super::round_to;

const CHANGE_DECIMALS: u32 = 3;

/// Trailing percentage change at one observation for a given period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChangePoint {
    pub date: QuoteDate,
    pub change_percent: f64,
}

/// Compute the trailing change at every observation of `series`.
///
/// For each point the comparison observation is the *nearest* earlier point
/// at least `period_days` whole days older: the backward scan starts at the
/// immediate neighbor and stops at the first candidate satisfying the gap,
/// which yields the tightest qualifying window. Trading calendars have gaps,
/// so a 1-day period may legitimately compare against a point 3 calendar
/// days back.
///
/// When no earlier observation satisfies the gap the change is exactly
/// `0.0`. That sentinel is a normal branch, not missing data: downstream
/// averaging treats it as a real zero.
///
/// The output has the same length and order as the input. The function is
/// pure; calling it twice on the same series yields identical output.
pub fn compute_change(
    series: &ObservationSeries,
    period_days: i64,
) -> Result<Vec<ChangePoint>, DataIntegrityError> {
    if series.is_empty() {
        return Err(DataIntegrityError::EmptySeries);
    }

    let observations = series.as_slice();
    let mut points = Vec::with_capacity(observations.len());

    for (i, current) in observations.iter().enumerate() {
        let mut change_percent = 0.0;
        for candidate in observations[..i].iter().rev() {
            if current.date().days_since(candidate.date()) >= period_days {
                change_percent = round_to(
                    (current.price() / candidate.price() - 1.0) * 100.0,
                    CHANGE_DECIMALS,
                );
                break;
            }
        }

        points.push(ChangePoint {
            date: current.date(),
            change_percent,
        });
    }

    Ok(points)
}
