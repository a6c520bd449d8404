pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{CsvTable, MemoryTable};
pub use config::{cli::CliConfig, TomlConfig};
pub use core::geo::{
    bearing, bearing_between, distance, distance_between, friendly_bearing,
    friendly_bearing_between, CompassPoint, DistanceUnit,
};
pub use core::validate::{valid, valid_fragment};
pub use domain::model::{Coordinates, Fragments, LocationRecord, Postcode};
pub use domain::ports::LocationProvider;
pub use utils::error::{PostcodeError, Result};
