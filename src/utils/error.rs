use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostcodeError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Lookup table error: {message}")]
    TableError { message: String },

    #[error("No location data for postcode: {postcode}")]
    LookupError { postcode: String },

    #[error("Import error: {message}")]
    ImportError { message: String },
}

pub type Result<T> = std::result::Result<T, PostcodeError>;
