use crate::domain::profile::PackageProfile;
use serde_json::{json, Value};

/// Client snippet for `.cursor/mcp.json`.
///
/// Without a URL the entry launches the installed package binary; with one it
/// points at the `/mcp` endpoint of a deployed HTTP server.
pub fn client_config(profile: &PackageProfile, url: Option<&str>) -> Value {
    let entry = match url {
        Some(base) => json!({ "url": format!("{}/mcp", base.trim_end_matches('/')) }),
        None => json!({ "command": profile.package.name }),
    };
    let mut servers = serde_json::Map::new();
    servers.insert(profile.server.server_key.clone(), entry);
    json!({ "mcpServers": servers })
}
