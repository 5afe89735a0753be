use std::env;
use std::str::FromStr;

use log::info;

use crate::error::VotingError;

const UNKNOWN_ARTICLES_KEY: &str = "VOTING_UNKNOWN_ARTICLES";

/// What to do when a vote targets an article id that was never registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownArticlePolicy {
    /// Track score and ranking for the id anyway.
    #[default]
    Permissive,
    /// Fail the vote with `VotingError::ArticleNotFound`.
    Reject,
}

impl FromStr for UnknownArticlePolicy {
    type Err = VotingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "reject" => Ok(Self::Reject),
            _ => Err(VotingError::InvalidConfig {
                key: UNKNOWN_ARTICLES_KEY,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    pub unknown_articles: UnknownArticlePolicy,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, VotingError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Split out so tests don't have to touch the process environment
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, VotingError> {
        let unknown_articles = match lookup(UNKNOWN_ARTICLES_KEY) {
            Some(value) => value.parse()?,
            None => {
                info!("{} not set, using default", UNKNOWN_ARTICLES_KEY);
                UnknownArticlePolicy::default()
            }
        };

        Ok(Self { unknown_articles })
    }
}
