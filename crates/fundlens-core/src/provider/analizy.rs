use std::sync::Arc;

use serde::Deserialize;

use crate::{
    DataIntegrityError, FundUrl, Observation, ObservationSeries, ProviderError, QuoteDate,
};

use super::calendar::{shift_months, shift_years};
use super::http::{HttpClient, HttpRequest};

pub const QUOTATION_API_BASE: &str = "https://www.analizy.pl/api/quotation";

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Decoded quotation hand-off for one fund: provider metadata plus the two
/// calendar windows the analysis consumes. Downstream code never sees the
/// raw JSON envelope.
#[derive(Debug, Clone)]
pub struct FundQuotation {
    pub fund_id: String,
    pub currency: String,
    pub current: ObservationSeries,
    pub reference: ObservationSeries,
}

/// Adapter for the analizy.pl quotation API.
///
/// Fetches the full quotation history for a fund and filters it into the
/// current window (last `period_months` months up to `today`) and the
/// reference window (the same span shifted back exactly one year).
pub struct AnalizyClient {
    http: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl AnalizyClient {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub async fn fetch_quotation(
        &self,
        fund: &FundUrl,
        period_months: u32,
        today: QuoteDate,
    ) -> Result<FundQuotation, ProviderError> {
        let endpoint = format!(
            "{QUOTATION_API_BASE}/{}/{}",
            fund.category_shortcut(),
            fund.id()
        );
        tracing::debug!(%endpoint, "fetching fund quotation");

        let request = HttpRequest::get(&endpoint)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|error| ProviderError::Transport {
                endpoint: endpoint.clone(),
                message: error.message().to_owned(),
            })?;

        if !response.is_success() {
            return Err(ProviderError::UpstreamStatus {
                status: response.status,
                endpoint,
            });
        }

        let envelope: QuotationEnvelope = serde_json::from_str(&response.body)
            .map_err(|error| ProviderError::MalformedEnvelope(error.to_string()))?;

        let ticks = envelope
            .series
            .into_iter()
            .next()
            .ok_or_else(|| {
                ProviderError::MalformedEnvelope(String::from("quotation series list is empty"))
            })?
            .price;

        let observations = decode_observations(ticks)?;
        let (current, reference) = split_windows(observations, period_months, today);

        tracing::debug!(
            fund_id = %envelope.id,
            current_points = current.len(),
            reference_points = reference.len(),
            "decoded quotation windows"
        );

        Ok(FundQuotation {
            fund_id: envelope.id,
            currency: envelope.currency,
            current,
            reference,
        })
    }
}

/// Provider envelope: `{ "id": …, "currency": …, "series": [ { "price":
/// [ { "date": "YYYY-MM-DD", "value": … } ] } ] }`.
#[derive(Debug, Deserialize)]
struct QuotationEnvelope {
    id: String,
    currency: String,
    #[serde(default)]
    series: Vec<SeriesEnvelope>,
}

#[derive(Debug, Deserialize)]
struct SeriesEnvelope {
    #[serde(default)]
    price: Vec<TickPayload>,
}

#[derive(Debug, Deserialize)]
struct TickPayload {
    date: String,
    value: PriceValue,
}

/// The provider serializes prices inconsistently, sometimes as JSON numbers
/// and sometimes as numeric strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceValue {
    Number(f64),
    Text(String),
}

impl PriceValue {
    fn to_f64(&self) -> Result<f64, DataIntegrityError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| DataIntegrityError::InvalidPrice { value: raw.clone() }),
        }
    }
}

fn decode_observations(ticks: Vec<TickPayload>) -> Result<Vec<Observation>, ProviderError> {
    ticks
        .into_iter()
        .map(|tick| {
            let date = QuoteDate::parse(&tick.date)?;
            let price = tick.value.to_f64()?;
            Ok(Observation::new(date, price)?)
        })
        .collect()
}

fn split_windows(
    observations: Vec<Observation>,
    period_months: u32,
    today: QuoteDate,
) -> (ObservationSeries, ObservationSeries) {
    let start = QuoteDate::from(shift_months(today.as_date(), -(period_months as i32)));
    let reference_start = QuoteDate::from(shift_years(start.as_date(), -1));
    let reference_end = QuoteDate::from(shift_months(
        reference_start.as_date(),
        period_months as i32,
    ));

    let current = observations
        .iter()
        .copied()
        .filter(|observation| observation.date() >= start)
        .collect();
    let reference = observations
        .iter()
        .copied()
        .filter(|observation| {
            observation.date() >= reference_start && observation.date() <= reference_end
        })
        .collect();

    (ObservationSeries::new(current), ObservationSeries::new(reference))
}
