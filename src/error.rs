use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub(crate) enum PricingError {
    #[error("Unknown model \"{name}\" (run `llmcalc models` to list available models)")]
    UnknownModel { name: String },

    #[error("Invalid {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("Price per million tokens is zero (corrupt catalog entry)")]
    DivideByZero,
}

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    Pricing(#[from] PricingError),

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}
