use thiserror::Error;

/// Data-quality violations caught before any series arithmetic runs.
///
/// These are fail-fast errors: a fund whose data trips one of them is
/// excluded from the analysis entirely, never partially summarized.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataIntegrityError {
    #[error("observation series is empty")]
    EmptySeries,

    #[error("observation series has {len} point(s), at least {min} required")]
    TooFewObservations { len: usize, min: usize },

    #[error("price must be positive: {price} on {date}")]
    NonPositivePrice { date: String, price: f64 },

    #[error("price must be finite on {date}")]
    NonFinitePrice { date: String },

    #[error("date must be YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },

    #[error("price is not numeric: '{value}'")]
    InvalidPrice { value: String },
}

/// Errors raised while fetching and decoding quotations from the provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("not a valid analizy.pl fund address: '{url}' ({reason})")]
    InvalidFundUrl { url: String, reason: &'static str },

    #[error("transport error calling {endpoint}: {message}")]
    Transport { endpoint: String, message: String },

    #[error("quotation api returned status {status} for {endpoint}")]
    UpstreamStatus { status: u16, endpoint: String },

    #[error("malformed quotation envelope: {0}")]
    MalformedEnvelope(String),

    #[error(transparent)]
    Integrity(#[from] DataIntegrityError),
}
