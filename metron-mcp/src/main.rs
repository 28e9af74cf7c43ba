//! Metron MCP Server
//!
//! Line-delimited JSON-RPC over stdio. Logs go to stderr; stdout carries the
//! protocol only.
//!
//! Tools:
//! - encode: Magnitude and unit to wire JSON
//! - decode: Wire JSON to kind, unit and magnitude
//! - convert: Convert a quantity to another unit of its kind
//! - list_kinds: Kinds, units and abbreviations
//!
//! Resources:
//! - metron://schemas - Every schema, keyed by name
//! - metron://schemas/{name} - Schema of one kind, or of the open quantity
//!
//! Configuration (environment):
//! - METRON_WIRE_FORMAT: Abbreviated | ExplicitUnitAndKind (required)
//! - METRON_CULTURE: culture of abbreviations (optional)
//! - METRON_DOCS_URL: schema documentation link (optional)

mod server;

use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use metron_serde::{build_schemas, WireConfig};
use server::{Server, PROTOCOL_VERSION, SERVER_VERSION};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Configuration errors stop the process before any request is read
    let config = match WireConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let schemas = match build_schemas(&config) {
        Ok(schemas) => Arc::new(schemas),
        Err(e) => {
            error!(error = %e, "failed to build schemas");
            return ExitCode::FAILURE;
        }
    };

    info!(
        version = SERVER_VERSION,
        protocol = PROTOCOL_VERSION,
        format = %config.format,
        culture = %config.culture,
        "Metron MCP server started"
    );

    let server = Server::new(config, schemas);
    match serve(&server).await {
        Ok(()) => {
            info!("server shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "i/o error");
            ExitCode::FAILURE
        }
    }
}

async fn serve(server: &Server) -> io::Result<()> {
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    info!("server ready, waiting for requests");

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        debug!(bytes = line.len(), "received");

        if let Some(response) = server.handle_line(line) {
            stdout.write_all(response.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }

    // EOF - client disconnected
    info!("client disconnected");
    Ok(())
}
