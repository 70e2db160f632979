//! Tracing setup. Logs go to stderr so stdout stays the progress transcript
//! or a single JSON document.

use tracing_subscriber::{prelude::*, EnvFilter};

pub const LOG_ENV: &str = "MCP_NPM_KIT_LOG";

/// Initialize tracing. Call once at process startup.
/// `MCP_NPM_KIT_LOG` takes precedence over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let level = if verbose {
        "mcp_npm_kit=debug"
    } else {
        "mcp_npm_kit=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
