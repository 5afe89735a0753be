pub mod engine;
pub mod record;
pub mod shared;

use crate::models::{ArticleId, Score};
use serde::{Deserialize, Serialize};

// One row of the score ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedArticle {
    pub article_id: ArticleId,
    pub score: Score,
}
