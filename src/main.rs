//! Switchboard server - Main entrypoint.
//!
//! This is the main entry point for the Switchboard server application.
//! It initializes the logging system, loads configuration, builds the
//! dispatcher, and runs the transport loop.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use switchboard_lib::config::{self, ConfigLoader};
use switchboard_lib::error::{set_error_reporter, SwitchboardError, SwitchboardResult, TracingErrorReporter};
use switchboard_lib::protocol::jsonrpc::create_dispatcher;
use switchboard_lib::transport::StdioTransport;

/// Command line arguments for the Switchboard server.
#[derive(Parser, Debug)]
#[clap(name = "Switchboard", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Start the server
    Start,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging() -> SwitchboardResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_file(true)
        .with_thread_names(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| SwitchboardError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> SwitchboardResult<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    // Set up error reporter
    set_error_reporter(Arc::new(TracingErrorReporter));

    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    // Load configuration
    let env_prefix = "SWITCHBOARD";
    let config_loader = ConfigLoader::new(args.config.as_deref(), env_prefix);

    match args.command.unwrap_or(Command::Start) {
        Command::Start => {
            info!("Starting Switchboard server");

            // Load and validate configuration
            let config = match config_loader.load() {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("Configuration error: {}", e);
                    process::exit(1);
                }
            };

            // Initialize global configuration
            config::init_global_config(config);

            let config = config::get_global_config();
            let server = &config.get().server;
            info!(
                "Server configured with name: {}, transport: {:?}, worker threads: {}",
                server.name, server.transport, server.worker_threads
            );

            // Register all standard methods, then share the dispatcher
            // read-only with the transport.
            let dispatcher = Arc::new(create_dispatcher());
            let transport = StdioTransport::new(dispatcher, server.max_message_size);

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(server.worker_threads)
                .enable_all()
                .build()
                .map_err(SwitchboardError::Io)?;

            runtime.block_on(transport.run())
        }
        Command::Validate => {
            info!("Validating configuration");
            match config_loader.load() {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = config::SwitchboardConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(SwitchboardError::Io)?;
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| SwitchboardError::Custom(format!("Failed to serialize config: {e}")))?;

            // Write to file
            std::fs::write(&output, toml).map_err(SwitchboardError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
