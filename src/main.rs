//! visitor-counter
//!
//! Mounts one visitor counter, renders it to the terminal while it loads and
//! exits once the count is settled.
//!
//! ```text
//!   config (TOML + CLI flags)
//!        │
//!        ▼
//!   LocalStore ──cached count──▶ VisitorCounter ──mount──▶ fetch cycle ──GET──▶ counting endpoint
//!        ▲                             │                        │
//!        └──────── persist on ready ───┘◀──── snapshot ─────────┘
//!                                      │
//!                                      ▼
//!                            render::drive (spring + terminal)
//! ```

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;

use visitor_counter::config::{load_config, validate_config, ConfigError, CounterConfig};
use visitor_counter::counter::{CountClient, CycleOutcome, VisitorCounter};
use visitor_counter::lifecycle::signals::cancel_on_ctrl_c;
use visitor_counter::observability::{logging, metrics};
use visitor_counter::render::{drive, TerminalRenderer};
use visitor_counter::storage::{default_storage_path, LocalStore};

#[derive(Parser)]
#[command(name = "visitor-counter")]
#[command(about = "Fetch and display a site's visitor count", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Counting endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Storage file holding the last known count
    #[arg(short, long)]
    storage: Option<PathBuf>,

    /// Print only the final card
    #[arg(long)]
    no_animate: bool,

    /// Dump Prometheus metrics to stderr on exit
    #[arg(long)]
    print_metrics: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CounterConfig::default(),
    };
    if let Some(url) = cli.endpoint {
        config.endpoint.url = url;
    }
    if let Some(path) = cli.storage {
        config.storage.path = Some(path);
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_logging(&config.observability.log_filter);

    let metrics_handle = if cli.print_metrics {
        Some(metrics::install_prometheus()?)
    } else {
        None
    };

    let storage_path = match &config.storage.path {
        Some(path) => path.clone(),
        None => default_storage_path()?,
    };
    let store = match LocalStore::open(&storage_path) {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(error = %e, "Unreadable storage file, starting empty");
            LocalStore::new(Some(storage_path.clone()))
        }
    };

    tracing::info!(
        endpoint = %config.endpoint.url,
        storage = %storage_path.display(),
        max_attempts = config.retry.max_attempts,
        "Configuration loaded"
    );

    let client = CountClient::new(&config.endpoint, &config.timeouts)?;
    let mount = VisitorCounter::new(client, store, &config).mount();
    let interrupt = tokio::spawn(cancel_on_ctrl_c(mount.token().clone()));

    let stdout = std::io::stdout();
    let live = !cli.no_animate && stdout.is_terminal();
    let mut renderer = TerminalRenderer::new(stdout.lock(), live);

    let outcome = drive(mount, &mut renderer, &config.animation).await?;
    interrupt.abort();
    if let CycleOutcome::Failed { attempts, .. } = &outcome {
        tracing::debug!(attempts, "Showing last known total");
    }

    if let Some(handle) = metrics_handle {
        eprint!("{}", handle.render());
    }
    Ok(())
}
