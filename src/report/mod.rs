pub mod text;

pub use text::{format_values, write_layer, write_predictions, DEFAULT_THRESHOLD};
