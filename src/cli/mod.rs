use crate::error::{Error, Result};
use crate::templates::run_scaffold;
use crate::utils::check_git_requirements;
use clap::{Arg, ArgAction, Command};
use log::info;
use std::path::PathBuf;

/// Command line arguments for gem-templater
#[derive(Debug)]
pub struct Args {
    /// Path to the project directory
    pub path: PathBuf,

    /// Explicit template file path
    pub template: Option<PathBuf>,

    /// Whether to merge in the user-level template
    pub import_user_template: bool,

    /// Whether to skip the post-generation version control actions
    pub skip_vcs: bool,

    /// Whether to disable automatic restore on error
    pub disable_restore: bool,
}

/// Configures and runs the CLI
pub fn run() -> Result<Args> {
    let mut cmd = Command::new("gem-templater")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for applying declarative dependency templates to new Ruby applications")
        .long_about(
            "gem-templater applies a scaffold template to a freshly generated Ruby application. \
            It reads the template's dependency declarations, writes them into the project's \
            Gemfile grouped by environment, and finishes by initializing a git repository \
            with an initial commit. Installing the bundle is left to the user.",
        );

    cmd = cmd.arg(
        Arg::new("PATH")
            .help("The path to the project directory to scaffold")
            .long_help(
                "Specifies the directory of the freshly generated application. \
                This should be the root directory of your project where the \
                Gemfile lives (or will be created).",
            )
            .value_parser(clap::value_parser!(PathBuf))
            .default_value("."),
    );

    cmd = cmd.arg(
        Arg::new("template")
            .long("template")
            .help("Path to the scaffold template file")
            .long_help(
                "Specifies the template file to apply. When omitted, the project \
                directory is probed for template.toml, template.json, template.yml \
                or template.yaml, in that order.",
            )
            .value_parser(clap::value_parser!(PathBuf)),
    );

    cmd = cmd.arg(
        Arg::new("import-user-template")
            .long("import-user-template")
            .help("Merge declarations from the user-level template")
            .long_help(
                "Reads and merges the declarations defined in your user-level template \
                (~/.config/gem-templater/template.toml). This is useful for gems you want \
                in every application you generate. User declarations are applied after \
                the project template's, so they win on conflicting names.",
            )
            .action(ArgAction::SetTrue),
    );

    cmd = cmd.arg(
        Arg::new("skip-vcs")
            .long("skip-vcs")
            .help("Skip the post-generation version control actions")
            .long_help(
                "When this flag is set, the repository initialization sequence (git init, \
                git add ., git commit) is skipped entirely. The template's dependency \
                declarations are still applied to the Gemfile.",
            )
            .action(ArgAction::SetTrue),
    );

    cmd = cmd.arg(
        Arg::new("disable-restore")
            .long("disable-restore")
            .help("Disable automatic file restore on error")
            .long_help(
                "When this flag is set, the tool will not attempt to restore the Gemfile to \
                its original state if an error occurs while applying the template. This can \
                be useful in automated environments or when you want to inspect the partial \
                state.",
            )
            .action(ArgAction::SetTrue),
    );

    let after_help = "EXAMPLES:
# Apply the template found in the current directory
gem-templater .

# Apply a specific template file
gem-templater . --template rails_base.toml

# Merge in the gems from your user-level template
gem-templater . --import-user-template

# Apply the template without touching version control
gem-templater . --skip-vcs

# Apply without automatic restore on error
gem-templater . --disable-restore";

    cmd = cmd.after_help(after_help);

    let matches = cmd.get_matches();

    let args = Args {
        path: matches
            .get_one::<PathBuf>("PATH")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(".")),
        template: matches.get_one::<PathBuf>("template").cloned(),
        import_user_template: matches.get_flag("import-user-template"),
        skip_vcs: matches.get_flag("skip-vcs"),
        disable_restore: matches.get_flag("disable-restore"),
    };

    execute(&args)?;
    Ok(args)
}

/// Execute the scaffold with the provided arguments
pub fn execute(args: &Args) -> Result<()> {
    info!("Starting gem-templater...");

    // Check git requirements before touching the project
    if !args.skip_vcs {
        check_git_requirements().map_err(Error::VersionControl)?;
    }

    info!("Scaffolding project at: {}", args.path.display());

    run_scaffold(
        &args.path,
        args.template.as_deref(),
        args.import_user_template,
        args.skip_vcs,
        !args.disable_restore,
    )?;

    info!("Template applied successfully!");
    Ok(())
}
