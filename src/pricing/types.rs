use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Price and speed record for one catalog model (prices per million tokens)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ModelPricing {
    pub(crate) name: &'static str,
    pub(crate) throughput_tokens_per_second: u32,
    pub(crate) input_price_per_million_tokens: f64,
    pub(crate) output_price_per_million_tokens: f64,
}

/// How often a batch of requests is issued
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Frequency {
    /// Single request, no monthly projection (default)
    #[default]
    PerRequest,
    /// Requests issued every hour
    Hourly,
    /// Requests issued every day
    Daily,
    /// Requests issued every week
    Weekly,
    /// Requests issued every month
    Monthly,
}

impl Frequency {
    /// Multiplier from one period's cost to a month's cost.
    /// Hourly chains through a 24h day and a 30-day month.
    pub(crate) fn monthly_factor(self) -> Option<f64> {
        match self {
            Frequency::PerRequest => None,
            Frequency::Hourly => Some(24.0 * 30.0),
            Frequency::Daily => Some(30.0),
            Frequency::Weekly => Some(4.0),
            Frequency::Monthly => Some(1.0),
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Frequency::PerRequest => "Per Request",
            Frequency::Hourly => "Hourly",
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
        }
    }
}

/// Cost of one period's requests and its monthly equivalent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct CostProjection {
    pub(crate) period_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) monthly_cost: Option<f64>,
}

/// One line of the model comparison table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ComparisonRow {
    pub(crate) model: &'static str,
    pub(crate) throughput_tokens_per_second: u32,
    pub(crate) input_price: String,
    pub(crate) output_price: String,
    pub(crate) input_tokens_per_dollar: f64,
    pub(crate) output_tokens_per_dollar: f64,
}
