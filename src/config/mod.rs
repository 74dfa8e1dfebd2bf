//! JSON configuration for batch runs.
pub mod plot;

pub use plot::{load_config, parse_config, PlotToolConfig};
