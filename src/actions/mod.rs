use crate::error::{Error, Result};
use crate::utils::git::GitCommandBuilder;
use log::info;
use std::path::Path;

/// Commit message used for the initial commit
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// The fixed post-generation command sequence, as explicit argument vectors:
/// initialize the repository, stage everything, create the initial commit
pub fn post_generation_actions() -> Vec<Vec<String>> {
    vec![
        vec!["init".to_string()],
        vec!["add".to_string(), ".".to_string()],
        vec![
            "commit".to_string(),
            "-m".to_string(),
            INITIAL_COMMIT_MESSAGE.to_string(),
        ],
    ]
}

/// Runs the post-generation version control sequence against the project
/// directory.
///
/// The sequence refuses to run when the directory already contains a
/// repository. A step failing aborts the remaining steps; completed steps are
/// left in place.
pub fn run_post_generation_actions(project_dir: &Path) -> Result<()> {
    let git_dir = project_dir.join(".git");
    if git_dir.exists() {
        return Err(Error::VersionControl(format!(
            "A repository already exists at {}. Remove it or rerun with --skip-vcs.",
            git_dir.display()
        )));
    }

    for action in post_generation_actions() {
        let builder = GitCommandBuilder::new()
            .map_err(Error::VersionControl)?
            .args(action.iter().cloned())
            .working_dir(project_dir);

        match builder.execute_success() {
            Ok(_) => info!("git {} completed", action.join(" ")),
            Err(e) => {
                return Err(Error::VersionControl(format!(
                    "git {} failed: {}",
                    action[0], e
                )));
            }
        }
    }

    info!("Repository initialized with an initial commit");
    Ok(())
}
