/// Cadence Player - command-line music player over simulated sources
use cadence_player::{search_results_json, AppState, PlayerConfig};
use cadence_playback::TransportSnapshot;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadence-player")]
#[command(about = "Cadence music player over simulated sources", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "CADENCE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List music sources and their authentication state
    Sources,
    /// Search one source or all of them
    Search {
        /// Search text
        query: String,
        /// Only search this source
        #[arg(short, long)]
        source: Option<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a scripted playback session against the simulated backend
    Demo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "cadence_player=info,cadence_playback=info,cadence_sources=info,cadence_library=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = PlayerConfig::load(cli.config.as_deref())?;
    let mut state = AppState::new(config)?;

    match cli.command {
        Commands::Sources => {
            list_sources(&state);
        }
        Commands::Search {
            query,
            source,
            json,
        } => {
            search(&state, &query, source.as_deref(), json).await?;
        }
        Commands::Demo => {
            demo(&mut state).await?;
        }
    }

    Ok(())
}

fn list_sources(state: &AppState) {
    for source in state.sources.iter() {
        let marker = if source.id() == state.sources.active_id() {
            "*"
        } else {
            " "
        };
        let auth = if source.is_authenticated() {
            "authenticated"
        } else {
            "not authenticated"
        };
        println!(
            "{} {:<15} {:<15} {}",
            marker,
            source.id(),
            source.info().name,
            auth
        );
    }
}

async fn search(
    state: &AppState,
    query: &str,
    source: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let results = state.search(query, source).await?;

    if json {
        println!("{}", search_results_json(&results)?);
        return Ok(());
    }

    for (source, found) in &results {
        println!(
            "{}: {} tracks, {} albums, {} playlists",
            source,
            found.tracks.len(),
            found.albums.len(),
            found.playlists.len()
        );
        for track in &found.tracks {
            println!("  {} - {} ({})", track.artist, track.title, track.album);
        }
    }
    Ok(())
}

async fn demo(state: &mut AppState) -> anyhow::Result<()> {
    let active = state.sources.active_id().to_string();
    state.sources.authenticate_source(&active).await?;

    let source = state
        .sources
        .active()
        .ok_or_else(|| anyhow::anyhow!("active source {} is not registered", active))?;
    let top_tracks = source.get_top_tracks().await?;
    tracing::info!(source = %active, tracks = top_tracks.len(), "Loaded top tracks");

    for track in top_tracks.iter().take(5) {
        state.playback.add_to_queue(track.clone());
    }

    let Some(first) = top_tracks.first().cloned() else {
        println!("Source {} returned no tracks", active);
        return Ok(());
    };

    state.play_track(first).await;
    state.pump_backend_events().await;
    print_notifications(state);
    print_snapshot("play", &state.playback.transport().snapshot());

    state.playback.backend_mut().advance(Duration::from_secs(30));
    state.pump_backend_events().await;
    print_snapshot("+30s", &state.playback.transport().snapshot());

    state.next().await;
    state.pump_backend_events().await;
    print_notifications(state);
    print_snapshot("next", &state.playback.transport().snapshot());

    state.previous().await;
    state.pump_backend_events().await;
    print_notifications(state);
    print_snapshot("previous", &state.playback.transport().snapshot());

    state.playback.toggle_mute();
    print_snapshot("mute", &state.playback.transport().snapshot());
    state.playback.toggle_mute();

    // Play through to the end and let the controller advance
    let remaining = state.playback.transport().duration();
    state.playback.backend_mut().advance(remaining);
    state.pump_backend_events().await;
    print_notifications(state);
    print_snapshot("ended", &state.playback.transport().snapshot());

    println!("Recently played:");
    for track in state.library.recently_played() {
        println!("  {} - {}", track.artist, track.title);
    }

    Ok(())
}

fn print_notifications(state: &mut AppState) {
    for line in state.take_notifications() {
        println!("> {}", line);
    }
}

fn print_snapshot(label: &str, snapshot: &TransportSnapshot) {
    let track = snapshot
        .current_track
        .as_ref()
        .map_or_else(|| "-".to_string(), |t| format!("{} - {}", t.artist, t.title));
    println!(
        "[{:<8}] {} | {} {:>4}s/{:>4}s | vol {:.2}{} | repeat {} | shuffle {} | queue {} | history {}",
        label,
        track,
        if snapshot.is_playing { "playing" } else { "paused" },
        snapshot.position.as_secs(),
        snapshot.duration.as_secs(),
        snapshot.volume,
        if snapshot.is_muted { " (muted)" } else { "" },
        snapshot.repeat,
        snapshot.shuffle,
        snapshot.queue.len(),
        snapshot.history.len()
    );
}
