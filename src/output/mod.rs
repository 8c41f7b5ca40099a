mod format;
mod json;
mod models;
mod period;
mod quota;
mod statusline;
mod table;

pub(crate) use format::NumberFormat;
pub(crate) use json::output_period_json;
pub(crate) use models::{output_models_json, print_models_table};
pub(crate) use period::Period;
pub(crate) use quota::{QuotaReport, output_quota_json, print_quota_table};
pub(crate) use statusline::{output_statusline_json, print_statusline};
pub(crate) use table::{SummaryOptions, UnitsTableOptions, print_period_table};
