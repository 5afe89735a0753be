pub mod config;
pub mod error;
pub mod models;
pub mod voting;

pub use config::{EngineConfig, UnknownArticlePolicy};
pub use error::VotingError;
pub use models::{Article, ArticleId, Direction, Score, UserId, Vote};
pub use voting::RankedArticle;
pub use voting::engine::VotingEngine;
pub use voting::record::UserVoteRecord;
pub use voting::shared::SharedVotingEngine;
