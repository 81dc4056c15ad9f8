//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::{
    DEFAULT_INPUT_TOKENS, DEFAULT_MARKUP_PERCENT, DEFAULT_NUM_REQUESTS, DEFAULT_OUTPUT_TOKENS,
};
use crate::pricing::{PricingOptions, UsageQuery};

use super::commands::{Commands, CostArgs};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "llmcalc")]
#[command(about = "LLM pricing calculator: request cost, monthly projection and markup", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Locale for number formatting (e.g., "en", "de", "fr")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Ignore config files
    #[arg(long, global = true)]
    pub(crate) no_config: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.json && config.json {
            self.json = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }

        if let Some(Commands::Cost(args)) = &mut self.command {
            args.input = args.input.or(config.input_tokens);
            args.output = args.output.or(config.output_tokens);
            args.frequency = args.frequency.or(config.frequency);
            args.requests = args.requests.or(config.requests);
            args.markup = args.markup.or(config.markup);
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

impl CostArgs {
    /// Query with built-in defaults filled in for unset values
    pub(crate) fn query(&self) -> UsageQuery {
        UsageQuery {
            model: self.model.clone(),
            input_tokens: self.input.unwrap_or(DEFAULT_INPUT_TOKENS),
            output_tokens: self.output.unwrap_or(DEFAULT_OUTPUT_TOKENS),
        }
    }

    pub(crate) fn options(&self) -> PricingOptions {
        PricingOptions {
            frequency: self.frequency.unwrap_or_default(),
            num_requests: self.requests.unwrap_or(DEFAULT_NUM_REQUESTS),
            markup_percent: self.markup.unwrap_or(DEFAULT_MARKUP_PERCENT),
        }
    }
}
