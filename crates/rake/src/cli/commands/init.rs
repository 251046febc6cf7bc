//! Implementation of `rake init`.

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use rake_config::{
    CONFIG_FILENAME, global_config_path, global_template, is_home_dir, local_template,
};
use rake_highlight::{Highlighter, indent_content, subheader};
use tracing::info;

use crate::cli::{args::InitCommand, context::CommandContext};

/// Where `rake init` writes, and which template it uses.
enum Target {
    /// `~/.rake.toml`, with the global template.
    Global(PathBuf),
    /// `.rake.toml` in the working directory, with the project template.
    Project(PathBuf),
}

impl Target {
    /// Picks the target. The home directory always gets the global template.
    fn select(ctx: &CommandContext, cmd: &InitCommand) -> Option<Self> {
        if cmd.global || is_home_dir(&ctx.cwd) {
            global_config_path().map(Self::Global)
        } else {
            Some(Self::Project(ctx.cwd.join(CONFIG_FILENAME)))
        }
    }

    /// Path the template is written to.
    fn path(&self) -> &Path {
        match self {
            Self::Global(path) | Self::Project(path) => path,
        }
    }

    /// Template text for this target.
    fn template(&self) -> String {
        match self {
            Self::Global(_) => global_template(),
            Self::Project(_) => local_template(),
        }
    }
}

/// Writes a commented `.rake.toml` template.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let Some(target) = Target::select(ctx, cmd) else {
        eprintln!("error: could not determine home directory");
        return ExitCode::FAILURE;
    };
    let path = target.path();

    if path.exists() && !cmd.force {
        eprintln!("error: {} already exists (use --force to overwrite)", path.display());
        return ExitCode::FAILURE;
    }

    let template = target.template();
    if let Err(e) = fs::write(path, &template) {
        eprintln!("error: failed to write {}: {e}", path.display());
        return ExitCode::FAILURE;
    }
    info!(path = %path.display(), "wrote config template");

    println!("Created {}", path.display());
    println!();
    println!("{}", subheader("Stopword and extraction defaults:"));
    println!(
        "{}",
        indent_content(&Highlighter::new().highlight_toml(&template))
    );

    ExitCode::SUCCESS
}
