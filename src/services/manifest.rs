use crate::domain::constants::{INSTALL_HOOK_FILE, LAUNCHER_FILE};
use crate::domain::models::{
    ManifestEngines, ManifestRepository, ManifestScripts, PackageManifest, RuntimeDependencies,
};
use crate::domain::profile::PackageProfile;
use crate::error::{Result, ScaffoldError};
use std::collections::BTreeMap;

pub fn build_manifest(profile: &PackageProfile) -> PackageManifest {
    let pkg = &profile.package;
    let server = &profile.server;

    let mut bin = BTreeMap::new();
    bin.insert(pkg.name.clone(), format!("./{}", LAUNCHER_FILE));

    PackageManifest {
        name: pkg.name.clone(),
        version: pkg.version.clone(),
        description: pkg.description.clone(),
        main: LAUNCHER_FILE.to_string(),
        bin,
        scripts: ManifestScripts {
            postinstall: format!("node {}", INSTALL_HOOK_FILE),
            start: format!("node {}", LAUNCHER_FILE),
            test: format!(
                "{} -c \"from {} import mcp; print('✅ MCP server ready:', mcp.name)\"",
                server.python, server.import_path
            ),
        },
        keywords: pkg.keywords.clone(),
        author: pkg.author.clone(),
        license: pkg.license.clone(),
        repository: ManifestRepository {
            kind: "git".to_string(),
            url: pkg.repository.clone(),
        },
        dependencies: RuntimeDependencies::default(),
        engines: ManifestEngines {
            node: pkg.node_engine.clone(),
        },
    }
}

/// Two-space pretty JSON, no trailing newline.
pub fn render_manifest(manifest: &PackageManifest) -> Result<String> {
    serde_json::to_string_pretty(manifest).map_err(|source| ScaffoldError::EncodeJson {
        what: "package.json",
        source,
    })
}
