use crate::error::PricingError;

use super::catalog::{lookup, models};
use super::types::{ComparisonRow, CostProjection, Frequency};

const TOKENS_PER_MILLION: f64 = 1_000_000.0;

/// Highest markup the calculator accepts, in percent
pub(crate) const MAX_MARKUP_PERCENT: i64 = 200;

/// How many tokens one dollar buys at the given price per million.
pub(crate) fn tokens_per_dollar(price_per_million: f64) -> Result<f64, PricingError> {
    if price_per_million == 0.0 {
        return Err(PricingError::DivideByZero);
    }
    Ok(TOKENS_PER_MILLION / price_per_million)
}

fn non_negative(name: &'static str, value: i64) -> Result<(), PricingError> {
    if value < 0 {
        return Err(PricingError::InvalidArgument {
            name,
            reason: format!("must be >= 0, got {value}"),
        });
    }
    Ok(())
}

/// Cost in dollars of a single request. Unrounded.
pub(crate) fn calculate_cost(
    model_name: &str,
    input_tokens: i64,
    output_tokens: i64,
) -> Result<f64, PricingError> {
    non_negative("input_tokens", input_tokens)?;
    non_negative("output_tokens", output_tokens)?;
    let pricing = lookup(model_name)?;

    let input_millions = input_tokens as f64 / TOKENS_PER_MILLION;
    let output_millions = output_tokens as f64 / TOKENS_PER_MILLION;
    Ok(input_millions * pricing.input_price_per_million_tokens
        + output_millions * pricing.output_price_per_million_tokens)
}

/// Scale a per-request cost to one period and, unless per-request, to a month.
pub(crate) fn project_cost(
    per_request_cost: f64,
    frequency: Frequency,
    num_requests: i64,
) -> Result<CostProjection, PricingError> {
    if num_requests < 1 {
        return Err(PricingError::InvalidArgument {
            name: "num_requests",
            reason: format!("must be >= 1, got {num_requests}"),
        });
    }
    let period_cost = per_request_cost * num_requests as f64;
    Ok(CostProjection {
        period_cost,
        monthly_cost: frequency.monthly_factor().map(|f| period_cost * f),
    })
}

/// Suggested resale price: monthly cost plus a percentage markup.
pub(crate) fn apply_markup(monthly_cost: f64, markup_percent: i64) -> Result<f64, PricingError> {
    if !(0..=MAX_MARKUP_PERCENT).contains(&markup_percent) {
        return Err(PricingError::InvalidArgument {
            name: "markup_percent",
            reason: format!("must be within 0..={MAX_MARKUP_PERCENT}, got {markup_percent}"),
        });
    }
    Ok(monthly_cost * (1.0 + markup_percent as f64 / 100.0))
}

fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// One row per catalog model, in catalog order.
pub(crate) fn build_comparison_table() -> Result<Vec<ComparisonRow>, PricingError> {
    models()
        .iter()
        .map(|m| {
            Ok(ComparisonRow {
                model: m.name,
                throughput_tokens_per_second: m.throughput_tokens_per_second,
                input_price: format_price(m.input_price_per_million_tokens),
                output_price: format_price(m.output_price_per_million_tokens),
                input_tokens_per_dollar: tokens_per_dollar(m.input_price_per_million_tokens)?,
                output_tokens_per_dollar: tokens_per_dollar(m.output_price_per_million_tokens)?,
            })
        })
        .collect()
}
