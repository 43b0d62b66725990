//! Domain types for fund quotation data.
//!
//! All types validate their invariants at construction time, so the
//! analysis engines operate on data that is already known to be sound:
//!
//! | Type | Description |
//! |------|-------------|
//! | [`QuoteDate`] | Calendar date of a quotation (`YYYY-MM-DD`) |
//! | [`Observation`] | One (date, price) sample, price > 0 and finite |
//! | [`ObservationSeries`] | Date-ascending sequence of observations |
//! | [`FundUrl`] | Validated analizy.pl fund address with metadata accessors |

mod fund_url;
mod observation;

pub use fund_url::FundUrl;
pub use observation::{Observation, ObservationSeries, QuoteDate};
