use tracing::debug;

use crate::cli::{Cli, Commands, CostArgs};
use crate::error::AppError;
use crate::output::{
    DisplayOptions, NumberFormat, output_comparison_json, output_estimate_json,
    output_model_info_json, output_models_json, render_comparison_table, render_estimate,
    render_model_info, render_model_list,
};
use crate::pricing::{
    build_comparison_table, estimate, list_model_names, model_info, tokens_per_dollar,
};

pub(crate) struct CommandContext {
    pub(crate) json: bool,
    pub(crate) display: DisplayOptions,
}

impl CommandContext {
    pub(crate) fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        Ok(Self {
            json: cli.json,
            display: DisplayOptions {
                use_color: cli.use_color(),
                number_format: NumberFormat::from_locale(cli.locale.as_deref())?,
            },
        })
    }
}

fn handle_models(ctx: &CommandContext) -> Result<String, AppError> {
    let names = list_model_names();
    if ctx.json {
        output_models_json(&names)
    } else {
        Ok(render_model_list(&names))
    }
}

fn handle_info(model: &str, ctx: &CommandContext) -> Result<String, AppError> {
    let info = model_info(model)?;
    let input_tpd = tokens_per_dollar(info.input_price_per_million_tokens)?;
    let output_tpd = tokens_per_dollar(info.output_price_per_million_tokens)?;
    if ctx.json {
        output_model_info_json(info, input_tpd, output_tpd)
    } else {
        Ok(render_model_info(info, input_tpd, output_tpd, ctx.display))
    }
}

fn handle_cost(args: &CostArgs, ctx: &CommandContext) -> Result<String, AppError> {
    let query = args.query();
    let options = args.options();
    debug!(?query, ?options, "estimating");

    let result = estimate(&query, options)?;
    if ctx.json {
        output_estimate_json(&result)
    } else {
        Ok(render_estimate(&result, ctx.display))
    }
}

fn handle_compare(ctx: &CommandContext) -> Result<String, AppError> {
    let rows = build_comparison_table()?;
    if ctx.json {
        output_comparison_json(&rows)
    } else {
        Ok(render_comparison_table(&rows, ctx.display))
    }
}

/// Run one command and return the text to print on stdout
pub(crate) fn run_command(
    command: Option<&Commands>,
    ctx: &CommandContext,
) -> Result<String, AppError> {
    match command {
        None | Some(Commands::Compare) => handle_compare(ctx),
        Some(Commands::Models) => handle_models(ctx),
        Some(Commands::Info { model }) => handle_info(model, ctx),
        Some(Commands::Cost(args)) => handle_cost(args, ctx),
    }
}
