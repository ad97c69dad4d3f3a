use wasm_bindgen::prelude::*;

mod bindings;
pub mod host;
pub mod menu;
pub mod quality_level;
pub mod selector;
mod utils;

pub use utils::logger::{Logger, LoggerLevel};
