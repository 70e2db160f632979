use crate::*;
use std::path::Path;

pub fn handle_scaffold_commands(cli: &Cli, profile: &PackageProfile) -> anyhow::Result<bool> {
    if !matches!(cli.command, None | Some(Commands::Generate)) {
        return Ok(false);
    }

    let report = generate(&cli.out_dir, profile, !cli.json)?;
    print_one(cli.json, report, |r| {
        format!(
            "\n🎉 NPM package structure created!\n\
             \n📦 To publish:\n\
             1. npm login\n\
             2. npm publish\n\
             \n👥 Others can then install with:\n\
             npm install -g {}",
            r.package
        )
    })?;

    Ok(true)
}

/// Renders every file first, then writes them in order. A write failure
/// stops the run; files already written stay on disk.
pub fn generate(
    out_dir: &Path,
    profile: &PackageProfile,
    progress: bool,
) -> anyhow::Result<GenerateReport> {
    if progress {
        println!(
            "🚀 Creating NPM package for {}...",
            profile.server.display_name
        );
    }

    let files = render_package(profile)?;
    ensure_out_dir(out_dir)?;

    if progress {
        println!("📝 Writing package files...");
    }
    let mut written = Vec::with_capacity(files.len());
    for (artifact, body) in &files {
        let file = write_artifact(out_dir, *artifact, body)?;
        if progress {
            println!("✅ Created {}", file.name);
        }
        written.push(file);
    }

    tracing::info!(
        out_dir = %out_dir.display(),
        package = %profile.package.name,
        files = written.len(),
        "package scaffold written"
    );

    Ok(GenerateReport {
        out_dir: out_dir.display().to_string(),
        package: profile.package.name.clone(),
        version: profile.package.version.clone(),
        files: written,
    })
}
