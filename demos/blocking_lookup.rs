//! Prints the current event rotation without an async runtime.

use bstats::BlockingApiClient;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = BlockingApiClient::from_env()?;
    for slot in client.get_event_rotation()? {
        let left = slot.ends_in();
        println!(
            "{:<14} {:<24} ends in {}h{:02}m",
            slot.event.mode.as_deref().unwrap_or("?"),
            slot.event.map.as_deref().unwrap_or("Community Map"),
            left.num_hours(),
            left.num_minutes() % 60,
        );
    }

    Ok(())
}
