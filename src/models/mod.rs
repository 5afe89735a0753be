use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ArticleId = u64;
pub type UserId = u64;
pub type Score = i64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub name: String,
    pub score: Score, // as of when the snapshot was taken
    pub created_at: DateTime<Utc>,
}

/// A user's current vote on a single article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vote {
    #[default]
    None,
    Up,
    Down,
}

/// Direction of a cast vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl From<Direction> for Vote {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Vote::Up,
            Direction::Down => Vote::Down,
        }
    }
}

impl Vote {
    // Contribution of this vote to an article's score
    pub fn weight(self) -> Score {
        match self {
            Vote::None => 0,
            Vote::Up => 1,
            Vote::Down => -1,
        }
    }

    /// True when going from `self` to `next` reverses direction (Up -> Down or Down -> Up).
    pub fn is_flip_to(self, next: Vote) -> bool {
        matches!((self, next), (Vote::Up, Vote::Down) | (Vote::Down, Vote::Up))
    }
}
