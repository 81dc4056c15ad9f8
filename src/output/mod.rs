mod format;
mod json;
mod table;

pub(crate) use format::NumberFormat;
pub(crate) use json::{
    output_comparison_json, output_estimate_json, output_model_info_json, output_models_json,
};
pub(crate) use table::{
    DisplayOptions, render_comparison_table, render_estimate, render_model_info, render_model_list,
};
