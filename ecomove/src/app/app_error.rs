use ecomove_core::model::trip::InvalidInputError;
use ecomove_core::model::FactorTableError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failure reading {0}: {1}")]
    FileReadError(String, std::io::Error),
    #[error("failure parsing config file {0}: {1}")]
    ConfigParseError(String, toml::de::Error),
    #[error("failure parsing query file {0}: {1}")]
    QueryParseError(String, serde_json::Error),
    #[error(transparent)]
    FactorTableError(#[from] FactorTableError),
    #[error(transparent)]
    InvalidInputError(#[from] InvalidInputError),
    #[error(transparent)]
    ResultFormatError(#[from] serde_json::Error),
    #[error("trip query requires a transport mode but none was provided")]
    MissingTransportMode,
}
