pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod tui;

pub use application::session;
pub use cli::{Cli, RunMode};
pub use config::{AppConfig, ConfigError};
pub use domain::types;
pub use infrastructure::answer;

use answer::{AnswerService, HttpAnswerClient};
use application::{ChatSession, Phase};
use std::error::Error;
use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing(cli.mode, cli.log_file.as_deref())?;
    info!("Starting p3r4");
    debug!(
        mode = ?cli.mode,
        config = ?cli.config,
        backend_url = ?cli.backend_url,
        "CLI arguments parsed"
    );

    let config_path = cli.config.as_deref();
    let mut config = AppConfig::load(config_path)?;
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    }
    if let Some(url) = &cli.backend_url {
        info!(url = url.as_str(), "Overriding backend URL based on CLI flag");
        config = config.with_backend_url(url.clone())?;
    }

    let client = HttpAnswerClient::from_config(&config)?;
    info!(
        backend_url = config.backend_url.as_str(),
        timeout = ?config.request_timeout(),
        "Answer service configured"
    );

    match cli.mode {
        RunMode::Tui => {
            tui::install_panic_hook();
            let service: Arc<dyn AnswerService> = Arc::new(client);
            tui::run_chat(service, config.backend_url.clone()).await?;
        }
        RunMode::Ask => {
            let query = load_query(&cli)?;
            ask_once(&client, query).await?;
        }
    }
    info!("Client execution finished");
    Ok(())
}

/// One submit through a fresh session, printing the assistant message
async fn ask_once(service: &dyn AnswerService, query: String) -> Result<(), Box<dyn Error>> {
    let mut session = ChatSession::new();
    session.enter_chat();
    session.update_input(query);
    if !session.submit(service).await {
        return Err("query required via arguments or stdin".into());
    }

    if let Some(answer) = session.last_answer() {
        println!("{}", answer.text());
    }
    if session.phase() == Phase::Errored {
        return Err("answer service request failed".into());
    }
    Ok(())
}

fn load_query(cli: &Cli) -> Result<String, Box<dyn Error>> {
    if !cli.query.is_empty() {
        info!("Using query provided through CLI arguments");
        return Ok(cli.query.join(" "));
    }

    if !io::stdin().is_terminal() {
        info!("Reading query from standard input");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    warn!("Query not provided via arguments or stdin");
    Err("query required via arguments or stdin".into())
}

/// The TUI owns the terminal, so it only logs to a file when asked to
fn init_tracing(mode: RunMode, log_file: Option<&Path>) -> io::Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match (mode, log_file) {
        (_, Some(path)) => {
            let file = File::create(path)?;
            let _ = fmt()
                .with_env_filter(filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .try_init();
        }
        (RunMode::Tui, None) => {
            let _ = fmt().with_env_filter(EnvFilter::new("off")).try_init();
        }
        (RunMode::Ask, None) => {
            let _ = fmt()
                .with_env_filter(filter())
                .with_writer(io::stderr)
                .with_target(false)
                .with_level(true)
                .try_init();
        }
    }
    Ok(())
}
