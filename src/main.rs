mod shell;

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use clap::{Parser, Subcommand};
use rolegate::{AuthApi, AuthClient, AuthorizationRouter, ConfigError, GatewayConfig};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Client(#[from] rolegate::AuthError),
    #[error("backend at {0} did not answer ping")]
    Unreachable(String),
    #[error("no authenticated session at {0}")]
    Unauthenticated(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "rolegate", about = "Session-cookie login and role-gated navigation client")]
struct Cli {
    /// Backend origin, e.g. `http://127.0.0.1:3000`.
    #[arg(long, env = "ROLEGATE_BASE_URL")]
    base_url: Option<String>,

    /// Session probe path.
    #[arg(long, env = "ROLEGATE_PROBE_PATH")]
    probe_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the backend is reachable.
    Ping,
    /// Probe the session; exits non-zero when anonymous.
    Check,
    /// Drive one session from a command stream, printing a decision per line.
    Shell {
        #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
        input: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let mut config = GatewayConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    if let Some(probe_path) = cli.probe_path.as_deref() {
        config = config.with_probe_path(probe_path)?;
    }
    tracing::debug!(base_url = %config.base_url, probe = %config.probe_path, "gateway configured");

    let client = AuthClient::new(&config)?;
    match cli.command {
        Command::Ping => run_ping(&client).await,
        Command::Check => run_check(&client).await,
        Command::Shell { input } => run_shell(AuthorizationRouter::new(client), &input).await,
    }
}

async fn run_ping(client: &AuthClient) -> Result<(), CliError> {
    if !client.ping().await {
        return Err(CliError::Unreachable(client.base_url().to_owned()));
    }
    println!("pong");
    Ok(())
}

async fn run_check(client: &AuthClient) -> Result<(), CliError> {
    if !client.is_authenticated().await {
        println!("anonymous");
        return Err(CliError::Unauthenticated(client.base_url().to_owned()));
    }
    println!("authenticated");
    Ok(())
}

async fn run_shell(router: AuthorizationRouter<AuthClient>, input: &str) -> Result<(), CliError> {
    let reader: Box<dyn BufRead> =
        if input == "-" { Box::new(BufReader::new(io::stdin())) } else { Box::new(BufReader::new(File::open(input)?)) };
    shell::run_session(&router, reader, io::stdout().lock()).await?;
    Ok(())
}
