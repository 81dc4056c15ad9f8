use std::fmt::Write as _;

use comfy_table::Color;

use crate::output::format::{
    NumberFormat, create_styled_table, format_cost, format_decimal, format_number, header_cell,
    localize_price, right_cell, styled_cell,
};
use crate::pricing::{ComparisonRow, Estimate, ModelPricing};

/// Decimals shown for the per-request cost
const REQUEST_COST_DECIMALS: usize = 4;
/// Decimals shown for period, monthly and suggested prices
const PERIOD_COST_DECIMALS: usize = 2;

const NOTES: &[&str] = &[
    "All prices and calculations are based on per million tokens",
    "Speeds are theoretical maximums and may vary based on actual usage",
    "Consider other costs such as infrastructure, development, and support for pricing",
];

#[derive(Debug, Clone, Copy)]
pub(crate) struct DisplayOptions {
    pub(crate) use_color: bool,
    pub(crate) number_format: NumberFormat,
}

impl DisplayOptions {
    fn cost_color(&self) -> Option<Color> {
        if self.use_color { Some(Color::Green) } else { None }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.use_color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

pub(crate) fn render_model_list(names: &[&str]) -> String {
    let mut out = String::new();
    for name in names {
        let _ = writeln!(out, "{name}");
    }
    out
}

fn write_model_info(
    out: &mut String,
    model: &ModelPricing,
    input_tokens_per_dollar: f64,
    output_tokens_per_dollar: f64,
    options: DisplayOptions,
) {
    let nf = options.number_format;
    let _ = writeln!(out, "\n  {}\n", options.paint(model.name, "1;36"));
    let _ = writeln!(
        out,
        "  Input tokens per $1: {}",
        format_decimal(input_tokens_per_dollar, 2, nf)
    );
    let _ = writeln!(
        out,
        "  Output tokens per $1: {}",
        format_decimal(output_tokens_per_dollar, 2, nf)
    );
    let _ = writeln!(
        out,
        "  Speed: {} tokens/second",
        format_number(i64::from(model.throughput_tokens_per_second), nf)
    );
}

pub(crate) fn render_model_info(
    model: &ModelPricing,
    input_tokens_per_dollar: f64,
    output_tokens_per_dollar: f64,
    options: DisplayOptions,
) -> String {
    let mut out = String::new();
    write_model_info(
        &mut out,
        model,
        input_tokens_per_dollar,
        output_tokens_per_dollar,
        options,
    );
    out
}

pub(crate) fn render_estimate(estimate: &Estimate, options: DisplayOptions) -> String {
    let nf = options.number_format;
    let money = |value: f64, decimals: usize| options.paint(&format_cost(value, decimals, nf), "32");

    let mut out = String::new();
    write_model_info(
        &mut out,
        estimate.model,
        estimate.input_tokens_per_dollar,
        estimate.output_tokens_per_dollar,
        options,
    );
    let _ = writeln!(
        out,
        "\n  Input tokens: {}  Output tokens: {}",
        format_number(estimate.input_tokens, nf),
        format_number(estimate.output_tokens, nf)
    );
    let _ = writeln!(
        out,
        "  Estimated LLM Cost: {}",
        money(estimate.cost, REQUEST_COST_DECIMALS)
    );

    if let Some(a) = &estimate.analysis {
        let _ = writeln!(out, "\n  {}\n", options.paint("Pricing Analysis", "1;36"));
        let _ = writeln!(
            out,
            "  Number of Requests: {}",
            format_number(a.num_requests, nf)
        );
        let _ = writeln!(
            out,
            "  Total {} Cost: {}",
            a.frequency.label(),
            money(a.period_cost, PERIOD_COST_DECIMALS)
        );
        let _ = writeln!(
            out,
            "  Estimated Monthly Cost: {}",
            money(a.monthly_cost, PERIOD_COST_DECIMALS)
        );
        let _ = writeln!(
            out,
            "  Suggested Monthly Price (with {}% markup): {}",
            a.markup_percent,
            money(a.suggested_price, PERIOD_COST_DECIMALS)
        );
    }
    out
}

pub(crate) fn render_comparison_table(rows: &[ComparisonRow], options: DisplayOptions) -> String {
    let c = options.use_color;
    let nf = options.number_format;
    let cost_color = options.cost_color();

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Model", c),
        header_cell("Speed (tokens/sec)", c),
        header_cell("Input Price (per 1M tokens)", c),
        header_cell("Output Price (per 1M tokens)", c),
        header_cell("Tokens per $1 (Input)", c),
        header_cell("Tokens per $1 (Output)", c),
    ]);

    for row in rows {
        table.add_row(vec![
            styled_cell(row.model, None, false),
            right_cell(
                &format_number(i64::from(row.throughput_tokens_per_second), nf),
                None,
                false,
            ),
            right_cell(&localize_price(&row.input_price, nf), cost_color, false),
            right_cell(&localize_price(&row.output_price, nf), cost_color, false),
            right_cell(&format_decimal(row.input_tokens_per_dollar, 0, nf), None, false),
            right_cell(&format_decimal(row.output_tokens_per_dollar, 0, nf), None, false),
        ]);
    }

    let mut out = String::new();
    let _ = writeln!(out, "\n  Model Comparison\n");
    let _ = writeln!(out, "{table}");
    let _ = writeln!(out, "\n  Notes");
    for note in NOTES {
        let _ = writeln!(out, "  - {note}");
    }
    out
}
