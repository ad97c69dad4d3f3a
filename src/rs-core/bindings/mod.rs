pub(crate) mod formatters;
mod js_functions;
mod js_host;

pub use js_functions::*;
pub(crate) use js_host::{log_quality_levels, JsHost};
