use std::net::IpAddr;

use clap::{Args, Parser, Subcommand};
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "patrika", about = "Run the club platform backend")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct Db {
    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct Auth {
    #[arg(long, required = true, env = "OIDC_ISSUER_URL")]
    pub(crate) oidc_issuer_url: Url,

    #[arg(long = "aud", default_value = "authenticated")]
    pub(crate) audience: String,

    #[arg(long)]
    pub(crate) origins: Vec<String>,
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct Admin {
    #[arg(long, env = "ADMIN_TOKEN_SECRET", hide_env_values = true)]
    pub(crate) admin_token_secret: String,

    #[arg(long, env = "ADMIN_SETUP_KEY", hide_env_values = true)]
    pub(crate) admin_setup_key: String,

    #[arg(long, default_value = "12", help = "Admin session lifetime in hours")]
    pub(crate) admin_token_ttl_hours: u64,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long)]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long)]
    pub(crate) port: Option<u16>,

    #[arg(long, env = "DATABASE_URL")]
    pub(crate) database_url: String,

    #[command(flatten)]
    pub(crate) db: Db,

    #[command(flatten)]
    pub(crate) auth: Auth,

    #[command(flatten)]
    pub(crate) admin: Admin,
}
