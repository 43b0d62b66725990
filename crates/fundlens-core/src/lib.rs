//! # Fundlens Core
//!
//! Quotation analytics for investment funds tracked on analizy.pl.
//!
//! ## Overview
//!
//! Given a set of fund addresses and a time period in months, this crate
//! fetches each fund's price quotations, splits them into the current window
//! and the matching window one year earlier, and derives two indicators per
//! window: day-to-day price change and cumulative return rate. A portfolio
//! layer folds the indicators into per-fund summary statistics (final
//! return, raise ratio, average increase/decrease).
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`analysis`] | Change/return engines, fund and portfolio aggregation |
//! | [`domain`] | Validated observation, series, and fund-address types |
//! | [`error`] | Data-integrity and provider error taxonomy |
//! | [`provider`] | analizy.pl adapter and HTTP transport |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fundlens_core::{
//!     AnalizyClient, FundAnalysis, FundUrl, PortfolioAnalysis, QuoteDate, ReqwestHttpClient,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AnalizyClient::new(Arc::new(ReqwestHttpClient::new()));
//! let fund = FundUrl::parse("https://www.analizy.pl/fio/ABC123/some-fund")?;
//!
//! let quotation = client.fetch_quotation(&fund, 6, QuoteDate::today()).await?;
//! let analysis = FundAnalysis::new(
//!     quotation.fund_id,
//!     fund.name(),
//!     quotation.currency,
//!     quotation.current,
//!     quotation.reference,
//! )?;
//!
//! let portfolio = PortfolioAnalysis::new(vec![analysis], 6);
//! for summary in portfolio.summaries() {
//!     println!("{}: {:.2}%", summary.name, summary.final_return_percent);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Data-quality problems (non-positive price, unparseable date, empty
//! series) fail fast with [`DataIntegrityError`] before any statistics are
//! computed; a fund that fails validation is dropped whole, never partially
//! summarized. A change point with no qualifying comparison observation is
//! *not* an error: it carries the documented `0.0` sentinel.

pub mod analysis;
pub mod domain;
pub mod error;
pub mod provider;

pub use analysis::{
    compute_change, compute_return_rate, ChangePoint, FundAnalysis, FundSummary, IndicatorPair,
    IndicatorSeries, PortfolioAnalysis, ReturnPoint,
};
pub use domain::{FundUrl, Observation, ObservationSeries, QuoteDate};
pub use error::{DataIntegrityError, ProviderError};
pub use provider::{
    AnalizyClient, FundQuotation, HttpClient, HttpError, HttpRequest, HttpResponse,
    NoopHttpClient, ReqwestHttpClient, QUOTATION_API_BASE,
};
