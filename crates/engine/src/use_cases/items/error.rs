//! Magic item operation errors.

use crate::infrastructure::ports::RepoError;
use crate::use_cases::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Item name already used: {0}")]
    NameTaken(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
