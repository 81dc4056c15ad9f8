mod catalog;
mod engine;
mod estimate;
mod types;

pub(crate) use catalog::{list_model_names, model_info};
pub(crate) use engine::{build_comparison_table, tokens_per_dollar};
pub(crate) use estimate::{Estimate, PricingOptions, UsageQuery, estimate};
pub(crate) use types::{ComparisonRow, Frequency, ModelPricing};
