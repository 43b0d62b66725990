//! Behavior-driven tests for quotation retrieval.
//!
//! These tests run the full pipeline against a canned HTTP transport:
//! envelope decoding, window filtering, and the error surface for upstream
//! and data-quality failures.

use fundlens_tests::{
    AnalizyClient, Arc, DataIntegrityError, FixedHttpClient, FundAnalysis, FundUrl,
    PortfolioAnalysis, ProviderError, QuoteDate,
};

fn fund_url() -> FundUrl {
    FundUrl::parse("https://www.analizy.pl/fundusze-inwestycyjne-otwarte/ABC123/some-fund")
        .expect("valid fund url")
}

fn today() -> QuoteDate {
    QuoteDate::parse("2024-03-15").expect("valid date")
}

/// Quotation body with a one-month current window, a matching window one
/// year earlier, and ticks outside both. One price is a numeric string.
fn quotation_body() -> String {
    serde_json::json!({
        "id": "ABC123",
        "currency": "PLN",
        "series": [{
            "price": [
                {"date": "2022-12-01", "value": 1.0},
                {"date": "2023-03-01", "value": 50.0},
                {"date": "2023-03-02", "value": "51.00"},
                {"date": "2023-03-03", "value": 49.0},
                {"date": "2024-01-10", "value": 999.0},
                {"date": "2024-03-10", "value": 100.0},
                {"date": "2024-03-11", "value": "102.00"},
                {"date": "2024-03-12", "value": 101.0},
                {"date": "2024-03-13", "value": 105.0},
                {"date": "2024-03-14", "value": 104.0}
            ]
        }]
    })
    .to_string()
}

// =============================================================================
// Valid responses
// =============================================================================

#[tokio::test]
async fn when_provider_returns_quotations_windows_are_filtered_by_date() {
    // Given: A transport replaying a full quotation history
    let client = AnalizyClient::new(Arc::new(FixedHttpClient::with_body(quotation_body())));

    // When: One month of quotations is requested
    let quotation = client
        .fetch_quotation(&fund_url(), 1, today())
        .await
        .expect("valid envelope should decode");

    // Then: Ticks before 2024-02-15 fall out of the current window and the
    // reference window keeps only the year-earlier span
    assert_eq!(quotation.fund_id, "ABC123");
    assert_eq!(quotation.currency, "PLN");
    assert_eq!(quotation.current.len(), 5);
    assert_eq!(quotation.reference.len(), 3);
    assert_eq!(
        quotation
            .current
            .first()
            .map(|observation| observation.price()),
        Some(100.0)
    );
}

#[tokio::test]
async fn when_quotations_decode_the_full_pipeline_produces_summaries() {
    // Given: A decoded quotation
    let client = AnalizyClient::new(Arc::new(FixedHttpClient::with_body(quotation_body())));
    let fund_url = fund_url();
    let quotation = client
        .fetch_quotation(&fund_url, 1, today())
        .await
        .expect("valid envelope should decode");

    // When: The quotation flows through analysis and aggregation
    let analysis = FundAnalysis::new(
        quotation.fund_id,
        fund_url.name(),
        quotation.currency,
        quotation.current,
        quotation.reference,
    )
    .expect("windows support analysis");
    let portfolio = PortfolioAnalysis::new(vec![analysis], 1);

    // Then: Summary statistics match the trimmed windows
    let summary = &portfolio.summaries()[0];
    assert_eq!(summary.name, "Some Fund");
    assert_eq!(summary.final_return_percent, 5.0);
    assert_eq!(summary.raise_ratio_percent, Some(66.67));
    assert_eq!(summary.avg_increase_percent, Some(2.98));
    assert_eq!(summary.avg_decrease_percent, Some(-0.98));

    let reference = portfolio
        .reference_summaries()
        .expect("1-month period qualifies for a reference table");
    assert_eq!(reference[0].final_return_percent, 2.0);
}

#[tokio::test]
async fn string_encoded_prices_decode_like_numeric_ones() {
    let client = AnalizyClient::new(Arc::new(FixedHttpClient::with_body(quotation_body())));
    let quotation = client
        .fetch_quotation(&fund_url(), 1, today())
        .await
        .expect("valid envelope should decode");

    let prices: Vec<f64> = quotation
        .current
        .iter()
        .map(|observation| observation.price())
        .collect();
    assert_eq!(prices, vec![100.0, 102.0, 101.0, 105.0, 104.0]);
}

// =============================================================================
// Upstream and data-quality failures
// =============================================================================

#[tokio::test]
async fn when_upstream_returns_5xx_the_status_is_surfaced() {
    let client = AnalizyClient::new(Arc::new(FixedHttpClient::with_status(503)));

    let error = client
        .fetch_quotation(&fund_url(), 1, today())
        .await
        .expect_err("5xx must fail");
    assert!(matches!(
        error,
        ProviderError::UpstreamStatus { status: 503, .. }
    ));
}

#[tokio::test]
async fn when_transport_fails_the_error_names_the_endpoint() {
    let client = AnalizyClient::new(Arc::new(FixedHttpClient::failing("connection refused")));

    let error = client
        .fetch_quotation(&fund_url(), 1, today())
        .await
        .expect_err("transport failure must fail");
    match error {
        ProviderError::Transport { endpoint, message } => {
            assert!(endpoint.contains("/fio/ABC123"));
            assert!(message.contains("connection refused"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn when_body_is_not_a_quotation_envelope_decoding_fails() {
    let client = AnalizyClient::new(Arc::new(FixedHttpClient::with_body("{\"whatever\": 1}")));

    let error = client
        .fetch_quotation(&fund_url(), 1, today())
        .await
        .expect_err("malformed envelope must fail");
    assert!(matches!(error, ProviderError::MalformedEnvelope(_)));
}

#[tokio::test]
async fn when_a_price_is_non_positive_the_fund_is_rejected() {
    let body = serde_json::json!({
        "id": "ABC123",
        "currency": "PLN",
        "series": [{
            "price": [
                {"date": "2024-03-10", "value": 100.0},
                {"date": "2024-03-11", "value": 0.0}
            ]
        }]
    })
    .to_string();
    let client = AnalizyClient::new(Arc::new(FixedHttpClient::with_body(body)));

    let error = client
        .fetch_quotation(&fund_url(), 1, today())
        .await
        .expect_err("zero price must fail");
    assert!(matches!(
        error,
        ProviderError::Integrity(DataIntegrityError::NonPositivePrice { .. })
    ));
}

// =============================================================================
// Fund address metadata
// =============================================================================

#[test]
fn fund_url_metadata_drives_endpoint_and_display_name() {
    let fund_url = fund_url();
    assert_eq!(fund_url.id(), "ABC123");
    assert_eq!(fund_url.category_shortcut(), "fio");
    assert_eq!(fund_url.name(), "Some Fund");
}

#[test]
fn fund_urls_without_expected_segments_are_rejected() {
    let error =
        FundUrl::parse("https://www.analizy.pl/only-category").expect_err("short url must fail");
    assert!(matches!(error, ProviderError::InvalidFundUrl { .. }));
}
