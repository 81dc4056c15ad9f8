/// Input tokens per request when neither CLI nor config sets one
pub(crate) const DEFAULT_INPUT_TOKENS: i64 = 1_000_000;

pub(crate) const DEFAULT_OUTPUT_TOKENS: i64 = 100_000;

pub(crate) const DEFAULT_NUM_REQUESTS: i64 = 1;

/// Markup percentage for the suggested monthly price
pub(crate) const DEFAULT_MARKUP_PERCENT: i64 = 30;
