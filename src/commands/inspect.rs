use crate::*;

pub fn handle_inspect_commands(cli: &Cli, profile: &PackageProfile) -> anyhow::Result<bool> {
    match &cli.command {
        Some(Commands::Profile) => {
            let text = profile_to_toml(profile)?;
            print_one(cli.json, profile, |_| text.trim_end().to_string())?;
        }
        Some(Commands::McpConfig { url }) => {
            let config = client_config(profile, url.as_deref());
            let text = serde_json::to_string_pretty(&config)?;
            print_one(cli.json, config, |_| text.clone())?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}
