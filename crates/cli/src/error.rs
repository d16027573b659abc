use query::QueryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the params file: {0}")]
    ParamsFileRead(#[from] std::io::Error),

    #[error("Failed to parse the params file as JSON: {0}")]
    ParamsParse(#[from] serde_json::Error),

    #[error("Invalid params: {0}")]
    Config(String),

    #[error("Failed to build the filter query: {0}")]
    Query(#[from] QueryError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),
}
