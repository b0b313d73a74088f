pub mod file_ops;
pub mod git;
pub mod user_template;

pub use file_ops::FileTrackerGuard;
pub use git::check_git_requirements;
pub use user_template::load_user_template;
