mod cli_messages;
mod config;
mod consts;
mod dispatcher;
mod events;
mod logging;
mod orchestrator;
mod providers;
mod runtime;
mod session;
mod shutdown;
mod snapshot;
mod ui;
mod workers;

use crate::config::{SettingsStore, get_settings_path};
use crate::providers::board::DetectedBoard;
use crate::providers::network::SystemNetworkProvider;
use crate::providers::os_version::SystemVersionSource;
use crate::providers::{BoardInfoProvider, NetworkInfoProvider, OsVersionSource};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::snapshot::format_os_version;
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the status dashboard
    Start {
        /// Run without the terminal UI, logging refreshes to the console.
        #[arg(long)]
        headless: bool,
    },
    /// Print a one-shot snapshot of board and network state.
    Info,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start { headless } => {
            let settings = SettingsStore::new(get_settings_path()?);
            let session = setup_session(&settings).await;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session).await
            }
        }
        Command::Info => {
            print_board_info().await;
            Ok(())
        }
    }
}

/// Print the current board and network state without starting the
/// dashboard. Reads the same providers the orchestrator uses.
async fn print_board_info() {
    let board = DetectedBoard::new();
    let version = SystemVersionSource::new();
    let network = SystemNetworkProvider::new();

    crate::print_cmd_info!("Board", "{}", board.board_name());
    crate::print_cmd_info!("OS version", "{}", format_os_version(version.raw_version()));
    crate::print_cmd_info!("Device name", "{}", network.device_name());
    crate::print_cmd_info!("IPv4 address", "{}", network.current_ipv4_address());
    crate::print_cmd_info!(
        "Network",
        "{}",
        network
            .current_network_name()
            .unwrap_or_else(|| crate::snapshot::NOT_CONNECTED.to_string())
    );
    for adapter in network.network_adapters().await {
        crate::print_cmd_info!(
            "Adapter",
            "{} ipv4={} mac={}",
            adapter.name,
            adapter.ipv4.as_deref().unwrap_or("-"),
            adapter.mac.as_deref().unwrap_or("-")
        );
    }
}
