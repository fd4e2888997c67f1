//! castway CLI — podcast gateway server and client.
//!
//! ```text
//! castway serve [--env dev] [--config path] [--data-dir path]
//! castway generate <user> <subject> [--name "My Podcast"] [--server http://localhost:8000]
//! castway audio <user> <podcast-id> [--out podcast.wav] [--server ...]
//! castway scripts <user> [--server ...]
//! castway items [--server ...]
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use castway_lib::config::Config;
use castway_lib::downstream::DownstreamClient;
use castway_lib::items::ItemStore;
use castway_lib::names::NameStore;
use castway_lib::server::{AppState, router};

/// castway — HTTP gateway for podcast script and audio generation
#[derive(Parser)]
#[command(name = "castway", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the gateway server
    Serve {
        /// Configuration profile, resolved as config/<env>.json
        #[arg(long, default_value = "dev")]
        env: String,
        /// Explicit config file path (overrides --env)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Data directory (overrides the DATA_PATH environment variable)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// Request a new script for a subject
    Generate {
        /// User the script belongs to
        user: String,
        /// Subject to generate a script about
        subject: String,
        /// Display name for the podcast (defaults to the subject)
        #[arg(long)]
        name: Option<String>,
        /// Gateway URL
        #[arg(long, default_value = "http://localhost:8000")]
        server: String,
    },
    /// Fetch generated audio for a script
    Audio {
        /// User the script belongs to
        user: String,
        /// Script identifier from a previous generate
        podcast_id: String,
        /// Write the audio to this file
        #[arg(long, default_value = "podcast.wav")]
        out: PathBuf,
        /// Gateway URL
        #[arg(long, default_value = "http://localhost:8000")]
        server: String,
    },
    /// List a user's generated scripts
    Scripts {
        /// User whose scripts to list
        user: String,
        /// Gateway URL
        #[arg(long, default_value = "http://localhost:8000")]
        server: String,
    },
    /// List the demo items
    Items {
        /// Gateway URL
        #[arg(long, default_value = "http://localhost:8000")]
        server: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            env,
            config,
            data_dir,
        } => serve(&env, config, data_dir).await,

        Command::Generate {
            user,
            subject,
            name,
            server,
        } => {
            let body = serde_json::json!({
                "user_id": user,
                "subject": subject,
                "podcast_name": name,
            });
            post_json(&server, "api/generate_script", &body).await;
        }

        Command::Audio {
            user,
            podcast_id,
            out,
            server,
        } => {
            let resp = reqwest::Client::new()
                .post(format!("{server}/api/audio"))
                .json(&serde_json::json!({ "user_id": user, "podcast_id": podcast_id }))
                .send()
                .await
                .expect("request failed");

            if !resp.status().is_success() {
                eprintln!("{}", resp.text().await.unwrap_or_default());
                std::process::exit(1);
            }

            let bytes = resp.bytes().await.expect("response read failed");
            tokio::fs::write(&out, &bytes).await.expect("write failed");
            println!("{} ({} bytes)", out.display(), bytes.len());
        }

        Command::Scripts { user, server } => {
            let body = serde_json::json!({ "user_id": user });
            post_json(&server, "api/scripts", &body).await;
        }

        Command::Items { server } => {
            let resp = reqwest::Client::new()
                .get(format!("{server}/api/items"))
                .send()
                .await
                .expect("request failed");
            println!("{}", resp.text().await.unwrap_or_default());
        }
    }
}

async fn serve(env: &str, config_path: Option<PathBuf>, data_dir: Option<PathBuf>) {
    let config = match config_path {
        Some(path) => Config::load_path(path),
        None => Config::load_env(env),
    }
    .expect("failed to load configuration");

    let data_dir = data_dir
        .or_else(|| std::env::var_os("DATA_PATH").map(PathBuf::from))
        .expect("DATA_PATH not set and --data-dir not given");

    let state = AppState {
        names: Arc::new(NameStore::new(&data_dir)),
        items: Arc::new(ItemStore::default()),
        downstream: Arc::new(DownstreamClient::new(&config)),
        data_dir,
    };
    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");
    eprintln!("castway listening on {addr}");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });

    wait_for_shutdown().await;
    eprintln!("castway shutting down");
}

/// Block until SIGINT or SIGTERM. In-flight requests are not drained.
async fn wait_for_shutdown() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut term = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => {}
            _ = term.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        let _ = ctrl_c.await;
    }
}

async fn post_json(server: &str, endpoint: &str, body: &serde_json::Value) {
    let resp = reqwest::Client::new()
        .post(format!("{server}/{endpoint}"))
        .json(body)
        .send()
        .await
        .expect("request failed");
    println!("{}", resp.text().await.unwrap_or_default());
}
