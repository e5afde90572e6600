use anyhow::{Context, Result};
use reddit_api::config::Config;
use reddit_api::{logger, storage, RedditApi};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;

    let conn = storage::connect(&config.database)
        .await
        .context("Failed to open database")?;

    let api = RedditApi::new(&conn);
    let posts = api.get_all_posts().await?;
    let subreddits = api.get_all_subreddits().await?;

    let snapshot = serde_json::json!({
        "posts": posts,
        "subreddits": subreddits,
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    conn.close().await?;
    Ok(())
}
