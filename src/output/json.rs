use serde::Serialize;

use crate::error::AppError;
use crate::pricing::{ComparisonRow, Estimate, ModelPricing};

#[derive(Serialize)]
struct ModelInfoJson<'a> {
    #[serde(flatten)]
    model: &'a ModelPricing,
    input_tokens_per_dollar: f64,
    output_tokens_per_dollar: f64,
}

pub(crate) fn output_models_json(names: &[&str]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(names)?)
}

pub(crate) fn output_model_info_json(
    model: &ModelPricing,
    input_tokens_per_dollar: f64,
    output_tokens_per_dollar: f64,
) -> Result<String, AppError> {
    let info = ModelInfoJson {
        model,
        input_tokens_per_dollar,
        output_tokens_per_dollar,
    };
    Ok(serde_json::to_string_pretty(&info)?)
}

pub(crate) fn output_estimate_json(estimate: &Estimate) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(estimate)?)
}

pub(crate) fn output_comparison_json(rows: &[ComparisonRow]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(rows)?)
}
