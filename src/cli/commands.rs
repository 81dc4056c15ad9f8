//! CLI subcommand definitions

use clap::{Args, Subcommand};

use crate::pricing::Frequency;

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Compare all models side by side (default)
    Compare,
    /// List available model names
    Models,
    /// Show speed and tokens per dollar for a model
    Info {
        /// Model name, exactly as listed by `llmcalc models`
        model: String,
    },
    /// Estimate request cost and monthly pricing for a model
    Cost(CostArgs),
}

#[derive(Debug, Args)]
pub(crate) struct CostArgs {
    /// Model name, exactly as listed by `llmcalc models`
    pub(crate) model: String,

    /// Input tokens per request [default: 1000000]
    #[arg(short, long, allow_negative_numbers = true)]
    pub(crate) input: Option<i64>,

    /// Output tokens per request [default: 100000]
    #[arg(short, long, allow_negative_numbers = true)]
    pub(crate) output: Option<i64>,

    /// Usage frequency [default: per-request]
    #[arg(short, long, value_enum)]
    pub(crate) frequency: Option<Frequency>,

    /// Number of requests per period [default: 1]
    #[arg(short, long, allow_negative_numbers = true)]
    pub(crate) requests: Option<i64>,

    /// Markup percentage for the suggested price, 0-200 [default: 30]
    #[arg(short, long, allow_negative_numbers = true)]
    pub(crate) markup: Option<i64>,
}
