use crate::config::EngineConfig;
use crate::error::VotingError;
use crate::models::{Article, ArticleId, Direction, Score, UserId, Vote};
use crate::voting::engine::VotingEngine;
use crate::voting::RankedArticle;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable handle that serializes every operation behind one engine-wide lock.
#[derive(Clone, Default)]
pub struct SharedVotingEngine {
    inner: Arc<Mutex<VotingEngine>>,
}

impl SharedVotingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VotingEngine::new(config))),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, VotingEngine>, VotingError> {
        self.inner.lock().map_err(|_| VotingError::LockPoisoned)
    }

    pub fn add_article(&self, name: impl Into<String>) -> Result<ArticleId, VotingError> {
        Ok(self.lock()?.add_article(name))
    }

    pub fn upvote(&self, user_id: UserId, article_id: ArticleId) -> Result<(), VotingError> {
        self.vote(user_id, article_id, Direction::Up)
    }

    pub fn downvote(&self, user_id: UserId, article_id: ArticleId) -> Result<(), VotingError> {
        self.vote(user_id, article_id, Direction::Down)
    }

    pub fn vote(
        &self,
        user_id: UserId,
        article_id: ArticleId,
        direction: Direction,
    ) -> Result<(), VotingError> {
        self.lock()?.vote(user_id, article_id, direction)
    }

    pub fn recent_flips(&self, user_id: UserId) -> Result<Vec<ArticleId>, VotingError> {
        Ok(self.lock()?.recent_flips(user_id))
    }

    pub fn last_voted_article(&self, user_id: UserId) -> Result<Option<ArticleId>, VotingError> {
        Ok(self.lock()?.last_voted_article(user_id))
    }

    pub fn current_vote(&self, user_id: UserId, article_id: ArticleId) -> Result<Vote, VotingError> {
        Ok(self.lock()?.current_vote(user_id, article_id))
    }

    pub fn articles_by_score(&self) -> Result<Vec<RankedArticle>, VotingError> {
        Ok(self.lock()?.articles_by_score())
    }

    pub fn article(&self, article_id: ArticleId) -> Result<Option<Article>, VotingError> {
        Ok(self.lock()?.article(article_id))
    }

    pub fn score(&self, article_id: ArticleId) -> Result<Score, VotingError> {
        Ok(self.lock()?.score(article_id))
    }

    pub fn article_count(&self) -> Result<usize, VotingError> {
        Ok(self.lock()?.article_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_votes_keep_scores_consistent() {
        let engine = SharedVotingEngine::default();
        let a = engine.add_article("AI").unwrap();
        let b = engine.add_article("ML").unwrap();

        let handles: Vec<_> = (0..8u64)
            .map(|user| {
                let engine = engine.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        engine.upvote(user, a).unwrap();
                        engine.downvote(user, a).unwrap();
                        engine.upvote(user, b).unwrap();
                    }
                    // Final state: every user has A down, B up
                    engine.downvote(user, a).unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let ranking = engine.articles_by_score().unwrap();
        assert_eq!(
            ranking,
            vec![
                RankedArticle { article_id: b, score: 8 },
                RankedArticle { article_id: a, score: -8 },
            ]
        );
        assert_eq!(engine.recent_flips(3).unwrap(), vec![a]);
        assert_eq!(engine.last_voted_article(3).unwrap(), Some(a));
    }

    #[test]
    fn test_queries_through_handle() {
        let engine = SharedVotingEngine::default();
        let a = engine.add_article("AI").unwrap();
        engine.add_article("ML").unwrap();

        engine.upvote(1, a).unwrap();
        engine.upvote(2, a).unwrap();

        assert_eq!(engine.score(a).unwrap(), 2);
        assert_eq!(engine.current_vote(1, a).unwrap(), Vote::Up);
        assert_eq!(engine.current_vote(3, a).unwrap(), Vote::None);
        assert_eq!(engine.article_count().unwrap(), 2);

        let article = engine.article(a).unwrap().unwrap();
        assert_eq!(article.name, "AI");
        assert_eq!(article.score, 2);
        assert!(engine.article(7).unwrap().is_none());
    }

    #[test]
    fn test_reject_policy_through_handle() {
        let engine = SharedVotingEngine::new(EngineConfig {
            unknown_articles: crate::config::UnknownArticlePolicy::Reject,
        });
        assert_eq!(engine.downvote(1, 5), Err(VotingError::ArticleNotFound(5)));
        assert!(engine.recent_flips(1).unwrap().is_empty());
    }
}
