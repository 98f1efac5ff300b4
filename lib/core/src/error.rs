use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Catalog load error: {0}")]
    CatalogLoad(String),

    #[error("Catalog contains no templates")]
    EmptyCatalog,

    #[error("Vectorizer not initialized: call fit before transform")]
    NotInitialized,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
