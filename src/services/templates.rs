use crate::domain::models::Artifact;
use crate::domain::profile::{PackageProfile, PackageSection, ReadmeSection, ServerSection};
use crate::error::{Result, ScaffoldError};
use crate::services::manifest::{build_manifest, render_manifest};
use crate::services::mcp_config::client_config;
use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;

const LAUNCHER_TEMPLATE: &str = include_str!("../../templates/server.js.hbs");
const INSTALL_HOOK_TEMPLATE: &str = include_str!("../../templates/install.js.hbs");
const README_TEMPLATE: &str = include_str!("../../templates/README.md.hbs");

/// Values visible to the templates. List-shaped fields are pre-joined so the
/// templates stay free of block helpers and their whitespace rules.
#[derive(Serialize)]
struct TemplateContext<'a> {
    package: &'a PackageSection,
    server: &'a ServerSection,
    readme: &'a ReadmeSection,
    fallback_install: String,
    mcp_config: String,
    usage_lines: String,
    tool_lines: String,
}

impl<'a> TemplateContext<'a> {
    fn new(profile: &'a PackageProfile) -> Result<Self> {
        let mcp_config = serde_json::to_string_pretty(&client_config(profile, None))
            .map_err(|source| ScaffoldError::EncodeJson {
                what: "mcp client config",
                source,
            })?;

        let usage_lines = profile
            .readme
            .usage
            .iter()
            .map(|u| format!("@{} {}", profile.server.server_key, u))
            .collect::<Vec<_>>()
            .join("\n");

        let mut tools: Vec<String> = profile
            .readme
            .tools
            .iter()
            .map(|t| format!("- `{}` - {}", t.name, t.summary))
            .collect();
        if let Some(more) = profile.readme.more_tools.as_deref() {
            if !more.is_empty() {
                tools.push(format!("- {}", more));
            }
        }

        Ok(Self {
            package: &profile.package,
            server: &profile.server,
            readme: &profile.readme,
            fallback_install: fallback_install_command(&profile.server.fallback_packages),
            mcp_config,
            usage_lines,
            tool_lines: tools.join("\n"),
        })
    }
}

fn fallback_install_command(packages: &[String]) -> String {
    let mut parts = vec!["pip install".to_string()];
    parts.extend(packages.iter().cloned());
    parts.join(" ")
}

/// Escapes a value for the inside of a single-quoted JS string literal.
pub fn escape_js_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

handlebars_helper!(js_str: |value: str| escape_js_literal(value));

pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_helper("js_str", Box::new(js_str));
        for artifact in [Artifact::Launcher, Artifact::InstallHook, Artifact::Readme] {
            let name = artifact.file_name();
            if let Some(source) = template_source(artifact) {
                registry
                    .register_template_string(name, source)
                    .map_err(|e| ScaffoldError::Template {
                        name,
                        source: Box::new(e),
                    })?;
            }
        }
        Ok(Self { registry })
    }

    /// Renders one of the free-form artifacts. The manifest is not a template;
    /// use `render_package` or `services::manifest` for it.
    pub fn render(&self, artifact: Artifact, profile: &PackageProfile) -> Result<String> {
        let ctx = TemplateContext::new(profile)?;
        let name = artifact.file_name();
        self.registry
            .render(name, &ctx)
            .map_err(|e| ScaffoldError::Render {
                name,
                source: Box::new(e),
            })
    }
}

fn template_source(artifact: Artifact) -> Option<&'static str> {
    match artifact {
        Artifact::Manifest => None,
        Artifact::Launcher => Some(LAUNCHER_TEMPLATE),
        Artifact::InstallHook => Some(INSTALL_HOOK_TEMPLATE),
        Artifact::Readme => Some(README_TEMPLATE),
    }
}

/// Builds all four file bodies in write order. Nothing touches disk here.
pub fn render_package(profile: &PackageProfile) -> Result<Vec<(Artifact, String)>> {
    let renderer = TemplateRenderer::new()?;
    let mut out = Vec::with_capacity(Artifact::ALL.len());
    for artifact in Artifact::ALL {
        let body = match artifact {
            Artifact::Manifest => render_manifest(&build_manifest(profile))?,
            _ => renderer.render(artifact, profile)?,
        };
        out.push((artifact, body));
    }
    Ok(out)
}
