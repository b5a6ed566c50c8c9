//! Squadhub Dashboard Client
//!
//! Terminal front end: loads the local mirrors once from the remote
//! store and renders the live streams, clips, squad, and match
//! schedule.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use squadhub::admin;
use squadhub::config::Config;
use squadhub::models::MatchStatus;
use squadhub::store::{HttpStore, SquadStore};
use squadhub::sync::{LoadState, Synchronizer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Squadhub Dashboard Client");
    tracing::info!("Store base URL: {}", config.api_base_url);

    // Derive the admin-mode flag from the page URL, if one is set
    let admin = match &config.page_url {
        Some(url) => admin::admin_mode(url, config.admin_key.as_deref()),
        None => false,
    };
    tracing::info!("Admin affordances: {}", if admin { "shown" } else { "hidden" });

    // Load the local mirrors once; they are never re-fetched
    let store = HttpStore::new(config.api_base_url.clone());
    let mut sync = Synchronizer::new(store);
    sync.load().await;

    if sync.load_state() == LoadState::Failed {
        tracing::warn!("Initial load failed for at least one collection; showing what arrived");
    }

    render(&sync, admin);

    Ok(())
}

/// Render the dashboard summary to stdout.
fn render<S: SquadStore>(sync: &Synchronizer<S>, admin: bool) {
    let live = sync.live_members();

    println!("== W3T B3AnS Squad Hub{} ==", if admin { " [admin]" } else { "" });
    println!();

    println!("Live now ({}):", live.len());
    for member in &live {
        println!("  {} - {} [{}]", member.name, member.stream_title, member.game);
    }
    if live.is_empty() {
        println!("  No one is streaming right now.");
    }
    println!();

    println!("Clips ({}):", sync.clips().len());
    for clip in sync.clips() {
        println!("  {} ({}) by {} on {}", clip.title, clip.game, clip.uploader, clip.date);
    }
    println!();

    println!("Squad ({}):", sync.members().len());
    for member in sync.members() {
        let status = if member.is_live { "live" } else { "offline" };
        println!("  {} [{}] {}", member.name, status, member.twitch);
    }
    println!();

    let upcoming = sync.matches_with_status(Some(MatchStatus::Upcoming));
    println!("Upcoming matches ({}):", upcoming.len());
    for m in &upcoming {
        println!("  {} vs {} on {} at {}", m.team1, m.team2, m.date, m.time);
    }
}
