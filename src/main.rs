use clap::Parser;

mod cli;
mod commands;
mod domain;
mod error;
mod services;

pub use cli::{Cli, Commands};
pub use domain::models::GenerateReport;
pub use domain::profile::PackageProfile;
pub use services::mcp_config::client_config;
pub use services::output::print_one;
pub use services::profile::profile_to_toml;
pub use services::templates::render_package;
pub use services::writer::{ensure_out_dir, write_artifact};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    services::logging::init_tracing(cli.verbose);

    let profile = services::profile::load_profile(cli.profile.as_deref())?;

    if commands::handle_scaffold_commands(&cli, &profile)? {
        return Ok(());
    }
    if commands::handle_inspect_commands(&cli, &profile)? {
        return Ok(());
    }

    anyhow::bail!("unhandled command: {:?}", cli.command)
}
