#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("roster load error: {0}")]
    RosterLoad(#[from] reqwest::Error),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
