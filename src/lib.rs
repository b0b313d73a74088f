// Declare modules for the library build
pub mod actions;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod models;
pub mod templates;
pub mod utils;

/// Applies a template with already-parsed arguments, for library callers
pub fn execute_with_args(args: &cli::Args) -> crate::error::Result<()> {
    templates::run_scaffold(
        &args.path,
        args.template.as_deref(),
        args.import_user_template,
        args.skip_vcs,
        !args.disable_restore,
    )
}
