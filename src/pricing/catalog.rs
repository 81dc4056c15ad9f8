use crate::error::PricingError;

use super::types::ModelPricing;

/// Compiled-in price list, in display order
static CATALOG: &[ModelPricing] = &[
    ModelPricing {
        name: "Llama 3.2 1B (Preview) 8k",
        throughput_tokens_per_second: 3100,
        input_price_per_million_tokens: 0.04,
        output_price_per_million_tokens: 0.04,
    },
    ModelPricing {
        name: "Llama 3.2 3B (Preview) 8k",
        throughput_tokens_per_second: 1600,
        input_price_per_million_tokens: 0.06,
        output_price_per_million_tokens: 0.06,
    },
    ModelPricing {
        name: "Llama 3.1 70B Versatile 128k",
        throughput_tokens_per_second: 250,
        input_price_per_million_tokens: 0.59,
        output_price_per_million_tokens: 0.79,
    },
    ModelPricing {
        name: "Llama 3.1 8B Instant 128k",
        throughput_tokens_per_second: 750,
        input_price_per_million_tokens: 0.05,
        output_price_per_million_tokens: 0.08,
    },
    ModelPricing {
        name: "Llama 3 70B 8k",
        throughput_tokens_per_second: 330,
        input_price_per_million_tokens: 0.59,
        output_price_per_million_tokens: 0.79,
    },
    ModelPricing {
        name: "Llama 3 8B 8k",
        throughput_tokens_per_second: 1250,
        input_price_per_million_tokens: 0.05,
        output_price_per_million_tokens: 0.08,
    },
    ModelPricing {
        name: "Mixtral 8x7B Instruct 32k",
        throughput_tokens_per_second: 575,
        input_price_per_million_tokens: 0.24,
        output_price_per_million_tokens: 0.24,
    },
    ModelPricing {
        name: "Gemma 7B 8k Instruct",
        throughput_tokens_per_second: 950,
        input_price_per_million_tokens: 0.07,
        output_price_per_million_tokens: 0.07,
    },
    ModelPricing {
        name: "Gemma 2 9B 8k",
        throughput_tokens_per_second: 500,
        input_price_per_million_tokens: 0.20,
        output_price_per_million_tokens: 0.20,
    },
    ModelPricing {
        name: "Llama 3 Groq 70B Tool Use Preview 8k",
        throughput_tokens_per_second: 335,
        input_price_per_million_tokens: 0.89,
        output_price_per_million_tokens: 0.89,
    },
    ModelPricing {
        name: "Llama 3 Groq 8B Tool Use Preview 8k",
        throughput_tokens_per_second: 1250,
        input_price_per_million_tokens: 0.19,
        output_price_per_million_tokens: 0.19,
    },
    ModelPricing {
        name: "Llama Guard 3 8B 8k",
        throughput_tokens_per_second: 765,
        input_price_per_million_tokens: 0.20,
        output_price_per_million_tokens: 0.20,
    },
];

/// All catalog entries in display order.
pub(crate) fn models() -> &'static [ModelPricing] {
    CATALOG
}

pub(crate) fn list_model_names() -> Vec<&'static str> {
    CATALOG.iter().map(|m| m.name).collect()
}

/// Find a model by its exact catalog name.
pub(crate) fn lookup(model_name: &str) -> Result<&'static ModelPricing, PricingError> {
    CATALOG
        .iter()
        .find(|m| m.name == model_name)
        .ok_or_else(|| PricingError::UnknownModel {
            name: model_name.to_string(),
        })
}

/// Same as [`lookup`]; the name the presentation layer uses before a calculation.
pub(crate) fn model_info(model_name: &str) -> Result<&'static ModelPricing, PricingError> {
    lookup(model_name)
}
