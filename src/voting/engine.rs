use crate::config::{EngineConfig, UnknownArticlePolicy};
use crate::error::VotingError;
use crate::models::{Article, ArticleId, Direction, Score, UserId, Vote};
use crate::voting::record::UserVoteRecord;
use crate::voting::RankedArticle;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};

// Registered article metadata; scores live in `VotingEngine::scores`
struct ArticleEntry {
    name: String,
    created_at: DateTime<Utc>,
}

pub struct VotingEngine {
    config: EngineConfig,
    next_article_id: ArticleId,
    articles: HashMap<ArticleId, ArticleEntry>,
    users: HashMap<UserId, UserVoteRecord>,
    scores: HashMap<ArticleId, Score>,
    // Highest score first, ties by ascending article id
    ranking: BTreeSet<(Reverse<Score>, ArticleId)>,
}

impl Default for VotingEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl VotingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            next_article_id: 1,
            articles: HashMap::new(),
            users: HashMap::new(),
            scores: HashMap::new(),
            ranking: BTreeSet::new(),
        }
    }

    pub fn add_article(&mut self, name: impl Into<String>) -> ArticleId {
        let id = self.next_article_id;
        self.next_article_id += 1;

        let entry = ArticleEntry {
            name: name.into(),
            created_at: Utc::now(),
        };
        debug!("Created article {} ({})", id, entry.name);
        self.articles.insert(id, entry);

        // Permissive votes may already have scored this id before it was registered
        let score = *self.scores.entry(id).or_insert(0);
        self.ranking.insert((Reverse(score), id));
        id
    }

    pub fn upvote(&mut self, user_id: UserId, article_id: ArticleId) -> Result<(), VotingError> {
        self.vote(user_id, article_id, Direction::Up)
    }

    pub fn downvote(&mut self, user_id: UserId, article_id: ArticleId) -> Result<(), VotingError> {
        self.vote(user_id, article_id, Direction::Down)
    }

    /// Applies a vote, replacing whatever `user_id` previously voted on the article.
    ///
    /// The old vote's contribution is rolled back before the new one is added,
    /// so repeating a vote leaves the score unchanged. Reversing a vote is
    /// recorded in the user's flip history.
    pub fn vote(
        &mut self,
        user_id: UserId,
        article_id: ArticleId,
        direction: Direction,
    ) -> Result<(), VotingError> {
        if !self.articles.contains_key(&article_id) {
            match self.config.unknown_articles {
                UnknownArticlePolicy::Reject => return Err(VotingError::ArticleNotFound(article_id)),
                UnknownArticlePolicy::Permissive => {
                    warn!("User {} voted on unregistered article {}", user_id, article_id)
                }
            }
        }

        let record = self.users.entry(user_id).or_default();
        let previous = record.current_vote(article_id);
        let new_vote = Vote::from(direction);

        // Other users may have moved the score since this user's last vote,
        // so always drop the entry for the current score.
        let score = self.scores.entry(article_id).or_insert(0);
        self.ranking.remove(&(Reverse(*score), article_id));
        let rolled_back = *score - previous.weight();

        if previous.is_flip_to(new_vote) {
            debug!("User {} flipped vote on article {} to {:?}", user_id, article_id, new_vote);
            record.record_flip(article_id);
        }

        let updated = rolled_back + new_vote.weight();
        *score = updated;
        self.ranking.insert((Reverse(updated), article_id));

        record.set_vote(article_id, new_vote);
        Ok(())
    }

    /// Up to three most recently flipped articles, most recent first.
    pub fn recent_flips(&self, user_id: UserId) -> Vec<ArticleId> {
        self.users
            .get(&user_id)
            .map(UserVoteRecord::recent_flips)
            .unwrap_or_default()
    }

    pub fn last_voted_article(&self, user_id: UserId) -> Option<ArticleId> {
        self.users.get(&user_id).and_then(UserVoteRecord::last_voted_article)
    }

    pub fn current_vote(&self, user_id: UserId, article_id: ArticleId) -> Vote {
        self.users
            .get(&user_id)
            .map(|record| record.current_vote(article_id))
            .unwrap_or_default()
    }

    /// All ranked articles by score descending; equal scores by ascending id.
    pub fn articles_by_score(&self) -> Vec<RankedArticle> {
        self.ranking
            .iter()
            .map(|&(Reverse(score), article_id)| RankedArticle { article_id, score })
            .collect()
    }

    /// Snapshot of a registered article with its current score.
    pub fn article(&self, article_id: ArticleId) -> Option<Article> {
        self.articles.get(&article_id).map(|entry| Article {
            id: article_id,
            name: entry.name.clone(),
            score: self.score(article_id),
            created_at: entry.created_at,
        })
    }

    pub fn score(&self, article_id: ArticleId) -> Score {
        self.scores.get(&article_id).copied().unwrap_or(0)
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }
}
