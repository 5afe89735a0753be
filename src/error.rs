use thiserror::Error;

use crate::models::ArticleId;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VotingError {
    #[error("Article {0} does not exist")]
    ArticleNotFound(ArticleId),

    #[error("Invalid value '{value}' for {key}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("Voting engine lock poisoned")]
    LockPoisoned,
}
