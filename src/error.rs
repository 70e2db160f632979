use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("failed to read profile {}: {source}", path.display())]
    ReadProfile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid profile {}: {source}", path.display())]
    ParseProfile {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to register template {name}: {source}")]
    Template {
        name: &'static str,
        source: Box<handlebars::TemplateError>,
    },
    #[error("failed to render {name}: {source}")]
    Render {
        name: &'static str,
        source: Box<handlebars::RenderError>,
    },
    #[error("failed to encode {what} as JSON: {source}")]
    EncodeJson {
        what: &'static str,
        source: serde_json::Error,
    },
    #[error("failed to encode profile as TOML: {source}")]
    EncodeToml { source: toml::ser::Error },
    #[error("failed to create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to set permissions on {}: {source}", path.display())]
    Permissions {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
