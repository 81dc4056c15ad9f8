//! Render-ready result of one calculator interaction
//!
//! Everything the presentation layer shows for a query is computed here in
//! one pass, so output code never touches the pricing formulas.

use serde::Serialize;
use tracing::debug;

use crate::error::PricingError;

use super::catalog::lookup;
use super::engine::{apply_markup, calculate_cost, project_cost, tokens_per_dollar};
use super::types::{Frequency, ModelPricing};

/// Model and token volumes for one calculation
#[derive(Debug, Clone)]
pub(crate) struct UsageQuery {
    pub(crate) model: String,
    pub(crate) input_tokens: i64,
    pub(crate) output_tokens: i64,
}

/// Pricing analysis inputs
#[derive(Debug, Clone, Copy)]
pub(crate) struct PricingOptions {
    pub(crate) frequency: Frequency,
    pub(crate) num_requests: i64,
    pub(crate) markup_percent: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PricingAnalysis {
    pub(crate) frequency: Frequency,
    pub(crate) num_requests: i64,
    pub(crate) period_cost: f64,
    pub(crate) monthly_cost: f64,
    pub(crate) markup_percent: i64,
    pub(crate) suggested_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Estimate {
    pub(crate) model: &'static ModelPricing,
    pub(crate) input_tokens: i64,
    pub(crate) output_tokens: i64,
    pub(crate) input_tokens_per_dollar: f64,
    pub(crate) output_tokens_per_dollar: f64,
    pub(crate) cost: f64,
    /// Absent for per-request usage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) analysis: Option<PricingAnalysis>,
}

pub(crate) fn estimate(query: &UsageQuery, options: PricingOptions) -> Result<Estimate, PricingError> {
    let model = lookup(&query.model)?;
    let cost = calculate_cost(model.name, query.input_tokens, query.output_tokens)?;
    debug!(model = model.name, cost, "calculated per-request cost");

    let projection = project_cost(cost, options.frequency, options.num_requests)?;
    let analysis = match projection.monthly_cost {
        Some(monthly_cost) => Some(PricingAnalysis {
            frequency: options.frequency,
            num_requests: options.num_requests,
            period_cost: projection.period_cost,
            monthly_cost,
            markup_percent: options.markup_percent,
            suggested_price: apply_markup(monthly_cost, options.markup_percent)?,
        }),
        None => None,
    };

    Ok(Estimate {
        model,
        input_tokens: query.input_tokens,
        output_tokens: query.output_tokens,
        input_tokens_per_dollar: tokens_per_dollar(model.input_price_per_million_tokens)?,
        output_tokens_per_dollar: tokens_per_dollar(model.output_price_per_million_tokens)?,
        cost,
        analysis,
    })
}
