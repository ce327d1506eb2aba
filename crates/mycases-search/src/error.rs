use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("data root does not exist: {0}")]
    DataRootMissing(String),
}
