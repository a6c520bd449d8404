use clap::{Parser, Subcommand, ValueEnum};

use crate::core::geo::DistanceUnit;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};

#[derive(Debug, Parser)]
#[command(name = "geo-postcode")]
#[command(about = "Validate, decompose and geolocate UK postcodes")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Lookup table file (overrides the config file)")]
    pub table: Option<String>,

    #[arg(long, help = "Emit results as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a postcode against the BS7666 structural rules
    Validate { postcode: String },
    /// Print every resolution of a postcode, most specific first
    Analyse { postcode: String },
    /// Look up the coordinates for a postcode
    Locate { postcode: String },
    /// Distance between two postcodes
    Distance {
        from: String,
        to: String,
        #[arg(long, value_enum, default_value_t = UnitArg::Kilometres)]
        unit: UnitArg,
    },
    /// Bearing from one postcode to another
    Bearing {
        from: String,
        to: String,
        #[arg(long, help = "Report a compass label instead of degrees")]
        friendly: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    Metres,
    Kilometres,
    Miles,
}

impl From<UnitArg> for DistanceUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Metres => DistanceUnit::Metres,
            UnitArg::Kilometres => DistanceUnit::Kilometres,
            UnitArg::Miles => DistanceUnit::Miles,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        if let Some(table) = &self.table {
            validate_path("table", table)?;
        }
        Ok(())
    }
}
