//! Orchestration of one analyzer run: config, fetch, analyze, present.

use std::io::Write as _;
use std::sync::Arc;

use fundlens_core::{
    AnalizyClient, FundAnalysis, FundUrl, PortfolioAnalysis, QuoteDate, ReqwestHttpClient,
};

use crate::cli::Cli;
use crate::config::AnalyzerConfig;
use crate::error::CliError;
use crate::output::{chart, table};

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let mut config = AnalyzerConfig::load(&cli.config)?;
    config.apply_period_override(cli.time_period_months);
    let period = config.time_period_months;

    let client =
        AnalizyClient::new(Arc::new(ReqwestHttpClient::new())).with_timeout_ms(cli.timeout_ms);
    let today = QuoteDate::today();

    // A fund that fails to fetch or validate is skipped with a warning;
    // the run only fails when no fund survives.
    let mut funds = Vec::new();
    for raw_url in &config.fund_urls {
        match analyze_fund(&client, raw_url, period, today).await {
            Ok(analysis) => {
                tracing::info!(fund = analysis.name(), "fund analyzed");
                funds.push(analysis);
            }
            Err(error) => {
                tracing::warn!(url = raw_url.as_str(), %error, "skipping fund");
            }
        }
    }
    if funds.is_empty() {
        return Err(CliError::NoUsableFunds);
    }

    let portfolio = PortfolioAnalysis::new(funds, period);
    print_summaries(&portfolio)?;

    if !cli.no_chart {
        chart::render_chart(&cli.chart_out, &portfolio)?;
        tracing::info!(path = %cli.chart_out.display(), "comparison chart written");
    }
    Ok(())
}

async fn analyze_fund(
    client: &AnalizyClient,
    raw_url: &str,
    period_months: u32,
    today: QuoteDate,
) -> Result<FundAnalysis, CliError> {
    let fund_url = FundUrl::parse(raw_url)?;
    let quotation = client.fetch_quotation(&fund_url, period_months, today).await?;
    let analysis = FundAnalysis::new(
        quotation.fund_id,
        fund_url.name(),
        quotation.currency,
        quotation.current,
        quotation.reference,
    )?;
    Ok(analysis)
}

/// Prints the reference-window table (when the period qualifies for one)
/// followed by the current-window table.
fn print_summaries(portfolio: &PortfolioAnalysis) -> Result<(), CliError> {
    let period = portfolio.time_period_months();
    let mut stdout = std::io::stdout().lock();

    if let Some(reference) = portfolio.reference_summaries() {
        writeln!(stdout)?;
        stdout.write_all(
            table::render_summary_table(&format!("Same {period} months last year"), reference)
                .as_bytes(),
        )?;
    }

    writeln!(stdout)?;
    stdout.write_all(
        table::render_summary_table(&format!("Last {period} months"), portfolio.summaries())
            .as_bytes(),
    )?;
    writeln!(stdout)?;
    Ok(())
}
