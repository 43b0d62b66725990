//! Quotation retrieval from the remote data provider.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`analizy`] | analizy.pl quotation API adapter and window filtering |
//! | [`calendar`] | Month/year date shifts with day-of-month clamping |
//! | [`http`] | Transport trait, reqwest client, offline no-op client |

pub mod analizy;
pub mod calendar;
pub mod http;

pub use analizy::{AnalizyClient, FundQuotation, QUOTATION_API_BASE};
pub use http::{HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient};
