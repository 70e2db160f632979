use crate::domain::profile::PackageProfile;
use crate::error::{Result, ScaffoldError};
use std::path::Path;

/// Built-in profile when `path` is `None`; otherwise the TOML file layered
/// over the defaults field by field.
pub fn load_profile(path: Option<&Path>) -> Result<PackageProfile> {
    let Some(path) = path else {
        return Ok(PackageProfile::default());
    };
    let raw = std::fs::read_to_string(path).map_err(|source| ScaffoldError::ReadProfile {
        path: path.to_path_buf(),
        source,
    })?;
    let profile = parse_profile(&raw).map_err(|source| ScaffoldError::ParseProfile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), package = %profile.package.name, "loaded profile");
    Ok(profile)
}

pub fn parse_profile(raw: &str) -> std::result::Result<PackageProfile, toml::de::Error> {
    toml::from_str(raw)
}

pub fn profile_to_toml(profile: &PackageProfile) -> Result<String> {
    toml::to_string_pretty(profile).map_err(|source| ScaffoldError::EncodeToml { source })
}

#[cfg(test)]
mod tests {
    use super::{load_profile, parse_profile, profile_to_toml};
    use crate::domain::profile::PackageProfile;
    use crate::error::ScaffoldError;

    #[test]
    fn empty_document_is_the_default_profile() {
        assert_eq!(parse_profile("").unwrap(), PackageProfile::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let p = parse_profile(
            r#"
[package]
name = "weather-mcp"

[server]
module = "weather.main"
"#,
        )
        .unwrap();
        assert_eq!(p.package.name, "weather-mcp");
        assert_eq!(p.package.version, "1.0.0");
        assert_eq!(p.server.module, "weather.main");
        assert_eq!(p.server.requirements, "mcp_requirements.txt");
        assert_eq!(p.readme, PackageProfile::default().readme);
    }

    #[test]
    fn tools_parse_as_table_array() {
        let p = parse_profile(
            r#"
[readme]
usage = ["forecast Berlin"]

[[readme.tools]]
name = "forecast"
summary = "Daily forecast"
"#,
        )
        .unwrap();
        assert_eq!(p.readme.usage, vec!["forecast Berlin".to_string()]);
        assert_eq!(p.readme.tools.len(), 1);
        assert_eq!(p.readme.tools[0].name, "forecast");
    }

    #[test]
    fn encoded_profile_reloads_unchanged() {
        let p = PackageProfile::default();
        let text = profile_to_toml(&p).unwrap();
        assert!(text.contains("[package]"));
        assert_eq!(parse_profile(&text).unwrap(), p);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_profile(Some(std::path::Path::new("/nonexistent/profile.toml"))).unwrap_err();
        assert!(matches!(err, ScaffoldError::ReadProfile { .. }));
    }

    #[test]
    fn bad_types_are_a_parse_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("profile.toml");
        std::fs::write(&path, "[package]\nkeywords = \"not-a-list\"\n").unwrap();
        let err = load_profile(Some(&path)).unwrap_err();
        assert!(matches!(err, ScaffoldError::ParseProfile { .. }));
        assert!(err.to_string().contains("profile.toml"));
    }

    #[test]
    fn misspelled_key_is_rejected() {
        let err = parse_profile("[server]\nmodul = \"weather.main\"\n").unwrap_err();
        assert!(err.to_string().contains("modul"));

        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("profile.toml");
        std::fs::write(&path, "[server]\nmodul = \"weather.main\"\n").unwrap();
        let err = load_profile(Some(&path)).unwrap_err();
        assert!(matches!(err, ScaffoldError::ParseProfile { .. }));
    }

    #[test]
    fn unknown_section_and_tool_key_are_rejected() {
        assert!(parse_profile("[sever]\nmodule = \"x\"\n").is_err());
        assert!(parse_profile(
            "[[readme.tools]]\nname = \"a\"\nsummary = \"b\"\ndescription = \"c\"\n"
        )
        .is_err());
    }
}
