mod api;
mod app_state;
mod commands;
mod config;
mod response;
mod routing;

use anyhow::{Context, Result};
use app_state::SharedState;
use axum::http::Uri;
use axum::routing::MethodRouter;
use axum::Router;
use clap::{Parser, Subcommand};
use response::AppError;
use std::convert::Infallible;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use wordpass_common::{OsRandom, REFERENCE_WORDS};

const API_PREFIX: &str = "/api";

pub type AppRouter = Router<SharedState>;
pub type AppMethodRouter = MethodRouter<SharedState, Infallible>;

////////////////////////////////////////////////////////////////////////////////
// Command line interface
////////////////////////////////////////////////////////////////////////////////
#[derive(Parser, Debug, Clone)]
#[clap(name = "wordpass", about = "Generate four-word passphrases")]
struct Opt {
    /// set the log level
    #[clap(short = 'l', long = "log", default_value = "info", global = true)]
    log_level: String,

    /// path to the config file (default: <config dir>/wordpass/config.ron)
    #[clap(short = 'c', long = "config", global = true)]
    config: Option<String>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Print new passphrases (the default)
    Generate {
        /// how many passphrases to print
        #[clap(short = 'n', long = "number", default_value = "1")]
        number: usize,

        /// also print the drawn word list positions
        #[clap(short = 'v', long = "verbose")]
        verbose: bool,
    },
    /// Print the word list and its fingerprint
    Words,
    /// Serve the passphrase API over HTTP
    Serve {
        /// set the listen addr (overrides the config file)
        #[clap(short = 'a', long = "addr")]
        addr: Option<String>,

        /// set the listen port (overrides the config file)
        #[clap(short = 'p', long = "port")]
        port: Option<u16>,

        /// open the web-browser automatically on startup
        #[clap(long = "open")]
        open: bool,
    },
}

////////////////////////////////////////////////////////////////////////////////
// HTTP API
////////////////////////////////////////////////////////////////////////////////
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(Some(uri.to_string()))
}

pub fn app(shared_state: SharedState) -> Router {
    Router::new()
        .merge(api::router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!("Unable to listen for shutdown signal: {}", e),
    }
}

async fn serve(
    server: config::ServerConfig,
    addr: Option<String>,
    port: Option<u16>,
    open: bool,
) -> Result<()> {
    let addr = addr.unwrap_or(server.addr);
    let port = port.unwrap_or(server.port);
    let ip = IpAddr::from_str(addr.as_str())
        .with_context(|| format!("Invalid listen address: {addr}"))?;
    let sock_addr = SocketAddr::from((ip, port));

    let shared_state = app_state::create_shared_state(REFERENCE_WORDS);
    let listener = tokio::net::TcpListener::bind(&sock_addr)
        .await
        .with_context(|| format!("Unable to bind socket: {sock_addr}"))?;
    info!("listening on http://{sock_addr}");
    info!("API docs at http://{sock_addr}{API_PREFIX}/docs/ui/");
    if open {
        if let Err(e) = open::that(format!("http://{sock_addr}{API_PREFIX}/passphrase/")) {
            warn!("Couldn't open web browser: {}", e);
        }
    }
    axum::serve(listener, app(shared_state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Error: server failed")?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    // Setup logging & RUST_LOG from args
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", format!("{},hyper=info,mio=info", opt.log_level))
    }
    // enable console logging; stdout carries passphrases
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                // Suppress DEBUG logging for HTTP requests:
                .add_directive("tower_http::trace=info".parse()?),
        )
        .init();

    let command = opt.command.clone().unwrap_or(Command::Generate {
        number: 1,
        verbose: false,
    });
    match command {
        Command::Generate { number, verbose } => {
            commands::generate(
                &mut OsRandom,
                &REFERENCE_WORDS,
                number,
                verbose,
                &mut io::stdout().lock(),
            )?;
        }
        Command::Words => {
            commands::list_words(&REFERENCE_WORDS, &mut io::stdout().lock())?;
        }
        Command::Serve { addr, port, open } => {
            let config_path = match opt.config {
                Some(path) => path,
                None => config::default_config_path()?,
            };
            let config = config::load_config(&config_path)?;
            serve(config.server, addr, port, open).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Opt::command().debug_assert();
    }

    #[test]
    fn generate_is_the_default() {
        let opt = Opt::parse_from(["wordpass"]);
        assert!(opt.command.is_none());
        let opt = Opt::parse_from(["wordpass", "generate", "-n", "3", "-v"]);
        assert!(matches!(
            opt.command,
            Some(Command::Generate {
                number: 3,
                verbose: true
            })
        ));
    }

    #[test]
    fn serve_flags_override() {
        let opt = Opt::parse_from(["wordpass", "serve", "-p", "9000", "--log", "debug"]);
        assert_eq!(opt.log_level, "debug");
        assert!(matches!(
            opt.command,
            Some(Command::Serve {
                addr: None,
                port: Some(9000),
                open: false
            })
        ));
    }
}
