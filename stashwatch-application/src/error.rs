use thiserror::Error;

use stashwatch_domain::FilterError;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("invalid filter: {0}")]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}
