//! Looks up a player, their club and their latest battles.
//!
//! `cargo run --example player_lookup -- 80V2R98CQ` with `BRAWL_STARS_TOKEN`
//! set, or in a `.env` file.

use bstats::{ApiClient, LeaderboardMode, LeaderboardQuery};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tag = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: player_lookup <player tag>"))?;
    let client = ApiClient::from_env()?;

    let (profile, battles) = tokio::join!(client.get_player(&tag), client.get_battlelogs(&tag));
    let profile = profile?;
    println!("{profile}: {} trophies", profile.trophies);

    match &profile.club {
        Some(club) => {
            let club = club.resolve(&client).await?;
            println!("club: {club} [{}], {} members", club.kind, club.members.len());
        }
        None => println!("not in a club"),
    }

    for battle in battles? {
        println!(
            "{} {:<14} {:<20} {:?}",
            battle.battle_time.format("%d/%m/%Y %H:%M"),
            battle.mode().unwrap_or("?"),
            battle.event.map_name(),
            battle.outcome(),
        );
    }

    let top = client
        .get_leaderboards(&LeaderboardQuery::new(LeaderboardMode::Players).limit(3))
        .await?;
    for entry in top {
        println!("{entry}");
    }

    Ok(())
}
