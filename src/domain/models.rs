use crate::domain::constants::{
    CHALK_VERSION, CROSS_SPAWN_VERSION, INSTALL_HOOK_FILE, LAUNCHER_FILE, MANIFEST_FILE,
    README_FILE,
};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One of the four files making up the generated package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Manifest,
    Launcher,
    InstallHook,
    Readme,
}

impl Artifact {
    /// Write order used by `generate`.
    pub const ALL: [Artifact; 4] = [
        Artifact::Manifest,
        Artifact::Launcher,
        Artifact::InstallHook,
        Artifact::Readme,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::Manifest => MANIFEST_FILE,
            Artifact::Launcher => LAUNCHER_FILE,
            Artifact::InstallHook => INSTALL_HOOK_FILE,
            Artifact::Readme => README_FILE,
        }
    }

    pub fn is_executable(self) -> bool {
        matches!(self, Artifact::Launcher)
    }
}

/// Typed `package.json`. Field order here is the order on disk.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub main: String,
    pub bin: BTreeMap<String, String>,
    pub scripts: ManifestScripts,
    pub keywords: Vec<String>,
    pub author: String,
    pub license: String,
    pub repository: ManifestRepository,
    pub dependencies: RuntimeDependencies,
    pub engines: ManifestEngines,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ManifestScripts {
    pub postinstall: String,
    pub start: String,
    pub test: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ManifestRepository {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

/// The launcher and install hook require exactly these two packages.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RuntimeDependencies {
    #[serde(rename = "cross-spawn")]
    pub cross_spawn: String,
    pub chalk: String,
}

impl Default for RuntimeDependencies {
    fn default() -> Self {
        Self {
            cross_spawn: CROSS_SPAWN_VERSION.to_string(),
            chalk: CHALK_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ManifestEngines {
    pub node: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct WrittenFile {
    pub name: String,
    pub path: String,
    pub bytes: usize,
    pub sha256: String,
    pub executable: bool,
    pub overwritten: bool,
}

#[derive(Serialize, Debug)]
pub struct GenerateReport {
    pub out_dir: String,
    pub package: String,
    pub version: String,
    pub files: Vec<WrittenFile>,
}
