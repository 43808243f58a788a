use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmokeError {
    #[error("Unknown meat type: {name} (did you mean '{suggestion}'?)")]
    UnknownMeat { name: String, suggestion: String },

    #[error("Unknown wrap strategy: {name} (did you mean '{suggestion}'?)")]
    UnknownWrap { name: String, suggestion: String },

    #[error("Invalid serve time: {0}")]
    InvalidServeTime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SmokeError>;
