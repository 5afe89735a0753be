use crate::models::{ArticleId, Vote};
use std::collections::{HashMap, VecDeque};

// Number of distinct flipped articles kept per user
pub const FLIP_HISTORY_LEN: usize = 3;

/// Per-user vote state: latest vote per article plus the most recent flips.
#[derive(Debug, Clone)]
pub struct UserVoteRecord {
    article_votes: HashMap<ArticleId, Vote>,
    flips: VecDeque<ArticleId>, // most recent at front
    last_voted: Option<ArticleId>,
}

impl Default for UserVoteRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl UserVoteRecord {
    pub fn new() -> Self {
        Self {
            article_votes: HashMap::new(),
            flips: VecDeque::with_capacity(FLIP_HISTORY_LEN),
            last_voted: None,
        }
    }

    /// Moves `article_id` to the front of the flip history, evicting the
    /// least recent entry when the history is full.
    pub fn record_flip(&mut self, article_id: ArticleId) {
        if let Some(pos) = self.flips.iter().position(|&id| id == article_id) {
            self.flips.remove(pos);
        } else if self.flips.len() == FLIP_HISTORY_LEN {
            self.flips.pop_back();
        }
        self.flips.push_front(article_id);
    }

    pub fn recent_flips(&self) -> Vec<ArticleId> {
        self.flips.iter().copied().collect()
    }

    pub fn current_vote(&self, article_id: ArticleId) -> Vote {
        self.article_votes.get(&article_id).copied().unwrap_or_default()
    }

    pub fn last_voted_article(&self) -> Option<ArticleId> {
        self.last_voted
    }

    // Stores the latest vote; called on every vote, flip or not
    pub(crate) fn set_vote(&mut self, article_id: ArticleId, vote: Vote) {
        self.article_votes.insert(article_id, vote);
        self.last_voted = Some(article_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record() {
        let record = UserVoteRecord::new();
        assert!(record.recent_flips().is_empty());
        assert_eq!(record.last_voted_article(), None);
        assert_eq!(record.current_vote(1), Vote::None);
    }

    #[test]
    fn test_default_matches_new() {
        let record = UserVoteRecord::default();
        assert!(record.flips.capacity() >= FLIP_HISTORY_LEN);
        assert!(record.recent_flips().is_empty());
        assert_eq!(record.last_voted_article(), None);
    }

    #[test]
    fn test_flip_goes_to_front() {
        let mut record = UserVoteRecord::new();
        record.record_flip(1);
        record.record_flip(2);
        assert_eq!(record.recent_flips(), vec![2, 1]);
    }

    #[test]
    fn test_repeat_flip_is_promoted_without_duplicate() {
        let mut record = UserVoteRecord::new();
        record.record_flip(1);
        record.record_flip(2);
        record.record_flip(3);
        record.record_flip(2);
        assert_eq!(record.recent_flips(), vec![2, 3, 1]);
    }

    #[test]
    fn test_fourth_flip_evicts_least_recent() {
        let mut record = UserVoteRecord::new();
        for id in 1..=4 {
            record.record_flip(id);
        }
        assert_eq!(record.recent_flips(), vec![4, 3, 2]);

        // 2 is now the oldest
        record.record_flip(5);
        assert_eq!(record.recent_flips(), vec![5, 4, 3]);
    }

    #[test]
    fn test_promoting_oldest_when_full_keeps_others() {
        let mut record = UserVoteRecord::new();
        for id in 1..=3 {
            record.record_flip(id);
        }
        record.record_flip(1);
        assert_eq!(record.recent_flips(), vec![1, 3, 2]);
    }

    #[test]
    fn test_set_vote_updates_last_voted() {
        let mut record = UserVoteRecord::new();
        record.set_vote(4, Vote::Up);
        record.set_vote(9, Vote::Down);
        assert_eq!(record.current_vote(4), Vote::Up);
        assert_eq!(record.current_vote(9), Vote::Down);
        assert_eq!(record.last_voted_article(), Some(9));
        assert!(record.recent_flips().is_empty());
    }
}
