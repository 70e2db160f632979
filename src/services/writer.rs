use crate::domain::constants::LAUNCHER_MODE;
use crate::domain::models::{Artifact, WrittenFile};
use crate::error::{Result, ScaffoldError};
use sha2::{Digest, Sha256};
use std::path::Path;

pub fn ensure_out_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| ScaffoldError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Overwrites `dir/<artifact file>` with `content`.
///
/// There is no backup and no atomic rename: last writer wins. A pre-existing
/// file with different content is reported with a warning and replaced.
pub fn write_artifact(dir: &Path, artifact: Artifact, content: &str) -> Result<WrittenFile> {
    let path = dir.join(artifact.file_name());

    let overwritten = existing_file(&path, content);

    std::fs::write(&path, content).map_err(|source| ScaffoldError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote artifact");

    let executable = artifact.is_executable() && mark_executable(&path)?;

    Ok(WrittenFile {
        name: artifact.file_name().to_string(),
        path: path.display().to_string(),
        bytes: content.len(),
        sha256: sha256_hex(content.as_bytes()),
        executable,
        overwritten,
    })
}

/// Whether something already sits at `path`. Only `NotFound` counts as
/// absent; other read failures are logged and treated as present.
fn existing_file(path: &Path, content: &str) -> bool {
    match std::fs::read(path) {
        Ok(existing) => {
            if existing != content.as_bytes() {
                tracing::warn!(path = %path.display(), "overwriting existing file with different content");
            }
            true
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read existing file, overwriting");
            true
        }
    }
}

/// Sets mode 0755. Returns whether the platform has an executable bit at all.
pub fn mark_executable(path: &Path) -> Result<bool> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let map = |source| ScaffoldError::Permissions {
            path: path.to_path_buf(),
            source,
        };
        let mut perms = std::fs::metadata(path).map_err(map)?.permissions();
        perms.set_mode(LAUNCHER_MODE);
        std::fs::set_permissions(path, perms).map_err(map)?;
        Ok(true)
    }
    #[cfg(not(unix))]
    {
        tracing::debug!(path = %path.display(), mode = LAUNCHER_MODE, "no executable bit on this platform");
        Ok(false)
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::{existing_file, sha256_hex, write_artifact};
    use crate::domain::models::Artifact;
    use tempfile::TempDir;

    #[test]
    fn write_reports_digest_and_overwrite() {
        let tmp = TempDir::new().unwrap();
        let first = write_artifact(tmp.path(), Artifact::Readme, "# one\n").unwrap();
        assert!(!first.overwritten);
        assert_eq!(first.bytes, 6);
        assert_eq!(first.sha256, sha256_hex(b"# one\n"));

        let second = write_artifact(tmp.path(), Artifact::Readme, "# two\n").unwrap();
        assert!(second.overwritten);
        assert_eq!(
            std::fs::read_to_string(tmp.path().join("README.md")).unwrap(),
            "# two\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn launcher_gets_exec_bits_and_others_do_not() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = TempDir::new().unwrap();
        let launcher = write_artifact(tmp.path(), Artifact::Launcher, "#!/usr/bin/env node\n").unwrap();
        let hook = write_artifact(tmp.path(), Artifact::InstallHook, "// hook\n").unwrap();
        assert!(launcher.executable);
        assert!(!hook.executable);

        let mode = std::fs::metadata(tmp.path().join("server.js")).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn unreadable_existing_entry_counts_as_present() {
        let tmp = TempDir::new().unwrap();
        assert!(!existing_file(&tmp.path().join("README.md"), "x"));

        // a directory is not NotFound, even though it cannot be read as a file
        let dir = tmp.path().join("server.js");
        std::fs::create_dir(&dir).unwrap();
        assert!(existing_file(&dir, "x"));
        assert!(write_artifact(tmp.path(), Artifact::Launcher, "x").is_err());
    }

    #[test]
    fn sha256_of_empty_input_is_well_known() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
