use clap::Parser;
use geo_postcode::config::cli::{CliConfig, Command};
use geo_postcode::core::{geo, locate};
use geo_postcode::utils::{logger, validation::Validate};
use geo_postcode::{CsvTable, Postcode, PostcodeError, TomlConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting geo-postcode CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let file_config = match load_file_config(&config) {
        Ok(file_config) => file_config,
        Err(e) => {
            tracing::error!("Could not load configuration file: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    match run(&config, &file_config) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn load_file_config(config: &CliConfig) -> geo_postcode::Result<TomlConfig> {
    let Some(path) = &config.config else {
        return Ok(TomlConfig::default());
    };
    let file_config = TomlConfig::from_file(path)?;
    file_config.validate()?;
    Ok(file_config)
}

fn build_postcode(code: &str, file_config: &TomlConfig) -> Postcode {
    match file_config.special_cases() {
        Some(cases) => Postcode::with_special_cases(code, cases.to_vec()),
        None => Postcode::new(code),
    }
}

// The lookup table is required for any geolocation command; asking without
// one configured is a hard failure, not an empty answer.
fn load_table(config: &CliConfig, file_config: &TomlConfig) -> geo_postcode::Result<CsvTable> {
    let path = config
        .table
        .as_deref()
        .or_else(|| file_config.table_path())
        .ok_or_else(|| PostcodeError::MissingConfigError {
            field: "table".to_string(),
        })?;
    CsvTable::open(path)
}

fn run(config: &CliConfig, file_config: &TomlConfig) -> geo_postcode::Result<()> {
    match &config.command {
        Command::Validate { postcode } => {
            let value = build_postcode(postcode, file_config);
            match value.valid() {
                Some(canonical) => {
                    if config.json {
                        println!(
                            "{}",
                            serde_json::json!({
                                "postcode": value.raw(),
                                "valid": true,
                                "canonical": canonical,
                            })
                        );
                    } else {
                        println!("✅ {}", canonical);
                    }
                }
                None => {
                    if config.json {
                        println!(
                            "{}",
                            serde_json::json!({
                                "postcode": value.raw(),
                                "valid": false,
                            })
                        );
                    } else {
                        println!("❌ {} is not a valid postcode", value.raw());
                    }
                    std::process::exit(1);
                }
            }
        }
        Command::Analyse { postcode } => {
            let value = build_postcode(postcode, file_config);
            let resolutions = value.analyse();
            if config.json {
                println!("{}", serde_json::json!(resolutions));
            } else {
                for resolution in resolutions.into_iter().flatten() {
                    println!("{}", resolution);
                }
            }
        }
        Command::Locate { postcode } => {
            let table = load_table(config, file_config)?;
            let coordinates = locate::resolve(&table, postcode)?;
            if config.json {
                println!("{}", serde_json::to_string(&coordinates)?);
            } else {
                println!(
                    "{}: easting {}, northing {}",
                    Postcode::new(postcode.as_str()),
                    coordinates.easting,
                    coordinates.northing
                );
            }
        }
        Command::Distance { from, to, unit } => {
            let table = load_table(config, file_config)?;
            let result = geo::distance_between(&table, from, to, (*unit).into())?;
            if config.json {
                println!("{}", serde_json::json!({ "distance": result }))
            } else {
                println!("{:.3}", result);
            }
        }
        Command::Bearing { from, to, friendly } => {
            let table = load_table(config, file_config)?;
            if *friendly {
                let label = geo::friendly_bearing_between(&table, from, to)?;
                if config.json {
                    println!("{}", serde_json::json!({ "bearing": label.as_str() }));
                } else {
                    println!("{}", label);
                }
            } else {
                let degrees = geo::bearing_between(&table, from, to)?;
                if config.json {
                    println!("{}", serde_json::json!({ "bearing": degrees }));
                } else {
                    println!("{:.1}", degrees);
                }
            }
        }
    }

    Ok(())
}
