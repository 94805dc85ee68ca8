pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use coordinates::{degrees_to_half_units, half_units_to_degrees, parse_coordinate};
pub use filename::{derive_output_path, OutputPaths};
pub use progress::ProgressReporter;
