use article_votes::{EngineConfig, VotingEngine, VotingError};
use log::{error, info};

fn run(config: EngineConfig) -> Result<(), VotingError> {
    let mut engine = VotingEngine::new(config);

    let ai = engine.add_article("AI");
    let ml = engine.add_article("ML");

    engine.upvote(1, ai)?;
    engine.downvote(1, ai)?; // flip
    engine.upvote(1, ml)?;
    engine.downvote(1, ml)?; // flip
    engine.upvote(1, ai)?; // flip again, AI becomes most recent

    println!("Last 3 flipped articles for user 1: {:?}", engine.recent_flips(1));
    info!("{} articles ranked", engine.article_count());

    let ranking = engine.articles_by_score();
    println!(
        "Articles by score (desc): {}",
        serde_json::to_string(&ranking).unwrap_or_default()
    );

    match engine.last_voted_article(1) {
        Some(id) => println!("User 1 last voted article: {}", id),
        None => println!("User 1 has not voted"),
    }

    Ok(())
}

fn main() {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return;
        }
    };

    if let Err(e) = run(config) {
        error!("Voting demo failed: {}", e);
    }
}
