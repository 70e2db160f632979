use serde::{Deserialize, Serialize};

/// Every value interpolated into the generated package.
///
/// Each section defaults field by field, so a profile file only needs the
/// keys it wants to change. Unknown keys are rejected. `PackageProfile::default()` describes the
/// Cursor Automation Builder MCP package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageProfile {
    pub package: PackageSection,
    pub server: ServerSection,
    pub readme: ReadmeSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageSection {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub license: String,
    pub repository: String,
    pub keywords: Vec<String>,
    pub node_engine: String,
}

impl Default for PackageSection {
    fn default() -> Self {
        Self {
            name: "cursor-automation-builder-mcp".to_string(),
            version: "1.0.0".to_string(),
            description: "Intelligent automation system builder for Cursor via MCP".to_string(),
            author: "Your Name <your.email@example.com>".to_string(),
            license: "MIT".to_string(),
            repository: "https://github.com/yourusername/cursor-automation-builder-mcp"
                .to_string(),
            keywords: ["mcp", "cursor", "automation", "ai", "code-generation"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            node_engine: ">=14.0.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    /// Used in progress and launcher messages.
    pub display_name: String,
    /// README heading.
    pub title: String,
    pub tagline: String,
    /// Key under `mcpServers` in the client config.
    pub server_key: String,
    pub python: String,
    /// Module run with `python -m`.
    pub module: String,
    /// Module exposing the `mcp` object, imported by `npm test`.
    pub import_path: String,
    pub python_min: String,
    pub requirements: String,
    pub fallback_packages: Vec<String>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            display_name: "Cursor Automation Builder MCP".to_string(),
            title: "Cursor Automation System Builder MCP".to_string(),
            tagline: "Intelligent automation system builder for Cursor via Model Context Protocol (MCP)."
                .to_string(),
            server_key: "cursor-automation-builder".to_string(),
            python: "python".to_string(),
            module: "app.mcp.mcp".to_string(),
            import_path: "app.mcp.server".to_string(),
            python_min: "3.8".to_string(),
            requirements: "mcp_requirements.txt".to_string(),
            fallback_packages: ["fastmcp", "pydantic", "pandas", "pathlib2"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReadmeSection {
    /// Prompts shown under Usage, each prefixed with `@<server_key>`.
    pub usage: Vec<String>,
    /// Trailing line after the tool list.
    pub more_tools: Option<String>,
    pub tools: Vec<ToolEntry>,
}

impl Default for ReadmeSection {
    fn default() -> Self {
        Self {
            usage: [
                "analyze my workspace",
                "build a data processing system",
                "list available templates",
            ]
            .iter()
            .map(|u| u.to_string())
            .collect(),
            more_tools: Some("And 6 more powerful tools!".to_string()),
            tools: vec![
                ToolEntry::new("build_automation_system", "Build complete automation systems"),
                ToolEntry::new("analyze_workspace", "Smart workspace analysis"),
                ToolEntry::new("list_templates", "Browse automation templates"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolEntry {
    pub name: String,
    pub summary: String,
}

impl ToolEntry {
    pub fn new(name: &str, summary: &str) -> Self {
        Self {
            name: name.to_string(),
            summary: summary.to_string(),
        }
    }
}
