use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use anyhow::Result;
use axum::serve;
use clap::Parser;
use patrika_db::sea_orm::{ConnectOptions, Database};
use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::opt::{Cli, Commands, Run};

mod app;
mod auth;
mod identity;
mod opt;
mod routes;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3030;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(opt) => run(opt).await,
    }
}

async fn run(opt: Run) -> Result<()> {
    let mut connect_options = ConnectOptions::new(opt.database_url.clone());
    if let Some(min_connections) = opt.db.db_min_connections {
        connect_options.min_connections(min_connections);
    }
    if let Some(max_connections) = opt.db.db_max_connections {
        connect_options.max_connections(max_connections);
    }
    let pool = Database::connect(connect_options).await?;

    let admin_auth = auth::AdminAuth::new(
        &opt.admin.admin_token_secret,
        opt.admin.admin_setup_key,
        Duration::from_secs(60 * 60 * opt.admin.admin_token_ttl_hours),
    );

    let app = app::create_app(opt.auth, admin_auth, pool).await?;

    let host = opt.host.unwrap_or(DEFAULT_HOST);
    let port = opt.port.unwrap_or(DEFAULT_PORT);
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(%host, port, "listening");

    serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutting down");
}
