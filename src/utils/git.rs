use log::info;
use semver::Version;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Minimum required git version
const MIN_GIT_VERSION: &str = "2.0.0";

/// Environment variable that overrides the git executable.
///
/// Points the builder at an alternative binary, which the test suite uses to
/// substitute a stub that records its invocations.
pub const GIT_PROGRAM_ENV: &str = "GEM_TEMPLATER_GIT";

/// Helper function to find the git executable, honoring the override variable
pub fn find_git_path() -> Result<PathBuf, String> {
    if let Ok(program) = std::env::var(GIT_PROGRAM_ENV) {
        return Ok(PathBuf::from(program));
    }

    which::which("git").map_err(|e| format!(
        "The 'git' command is not available. Please install git and ensure it's in your PATH. Error: {}",
        e
    ))
}

/// Gets the current git version
///
/// Returns a semver Version that can be compared against the minimum
/// supported release
pub fn get_git_version() -> Result<Version, String> {
    let git_path = find_git_path()?;

    // Get the version by executing git --version
    let output = Command::new(&git_path)
        .arg("--version")
        .output()
        .map_err(|e| format!("Failed to execute git --version: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("Failed to get git version: {}", stderr));
    }

    let version_output = String::from_utf8_lossy(&output.stdout);
    log::debug!("Raw git version output: {}", version_output);

    // git prints "git version X.Y.Z", so the token we want is the third one
    let version_str = version_output
        .split_whitespace()
        .nth(2)
        .ok_or_else(|| format!("Unexpected git version format: '{}'", version_output))?;

    log::debug!("Parsed version string: {}", version_str);

    parse_git_version(version_str)
}

/// Parses a git version token into a semver Version.
///
/// Vendor builds append suffixes semver rejects (e.g. "2.39.2.windows.1"),
/// and some builds truncate to two components, so the token is normalized to
/// exactly three numeric parts before parsing.
pub fn parse_git_version(token: &str) -> Result<Version, String> {
    let numeric: String = token
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut parts: Vec<&str> = numeric.split('.').filter(|p| !p.is_empty()).collect();
    if parts.is_empty() {
        return Err(format!("Unexpected git version token: '{}'", token));
    }
    while parts.len() < 3 {
        parts.push("0");
    }

    let candidate = parts[..3].join(".");
    Version::parse(&candidate)
        .map_err(|e| format!("Failed to parse git version '{}': {}", token, e))
}

/// Command builder for git operations
pub struct GitCommandBuilder {
    git_path: PathBuf,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl GitCommandBuilder {
    /// Create a new command builder with the git executable
    pub fn new() -> Result<Self, String> {
        let git_path = find_git_path()?;
        Ok(Self {
            git_path,
            args: Vec::new(),
            working_dir: None,
        })
    }

    /// Add an argument to the command
    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments to the command
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for arg in args {
            self.args.push(arg.into());
        }
        self
    }

    /// Set the working directory for the command
    pub fn working_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Execute the command and return the output
    pub fn execute(self) -> Result<Output, String> {
        let mut command = Command::new(&self.git_path);
        command.args(&self.args);

        if let Some(dir) = self.working_dir {
            command.current_dir(dir);
        }

        info!("Executing git command: {:?}", self.args);
        command
            .output()
            .map_err(|e| format!("Failed to execute git command: {}", e))
    }

    /// Execute the command and check for success
    pub fn execute_success(self) -> Result<(), String> {
        let output = self.execute()?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(format!("git command failed: {}", stderr))
        }
    }
}

pub fn check_git_requirements() -> Result<(), String> {
    let _git_path = find_git_path()?;

    // If git is found, check its version
    let current_version = get_git_version()?;

    let min_version = Version::parse(MIN_GIT_VERSION)
        .map_err(|e| format!("Failed to parse minimum version: {}", e))?;

    if current_version < min_version {
        return Err(format!(
            "git version {} or higher is required. Found version {}",
            MIN_GIT_VERSION, current_version
        ));
    }

    Ok(())
}
