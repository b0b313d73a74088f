use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for gem-templater operations
#[derive(Debug)]
pub enum Error {
    /// I/O errors (file access, permissions, etc.)
    Io(io::Error),

    /// TOML template parsing errors
    Toml(toml::de::Error),

    /// JSON template parsing errors
    Json(serde_json::Error),

    /// YAML template parsing errors
    Yaml(serde_yml::Error),

    /// Errors related to locating a scaffold template
    TemplateDetection(String),

    /// Errors related to dependency declarations
    Declaration(String),

    /// Errors from version control command execution
    VersionControl(String),

    /// Errors related to file operations
    FileOperation { path: PathBuf, message: String },

    /// General errors
    General(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Toml(err) => write!(f, "TOML parsing error: {}", err),
            Error::Json(err) => write!(f, "JSON parsing error: {}", err),
            Error::Yaml(err) => write!(f, "YAML parsing error: {}", err),
            Error::TemplateDetection(msg) => write!(f, "Template detection error: {}", msg),
            Error::Declaration(msg) => write!(f, "Declaration error: {}", msg),
            Error::VersionControl(msg) => write!(f, "Version control command failed: {}", msg),
            Error::FileOperation { path, message } => {
                write!(f, "File operation error on {}: {}", path.display(), message)
            }
            Error::General(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error {
    /// Check if the error message contains a specific string
    #[allow(dead_code)]
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            Error::FileOperation { path: _, message } => message.contains(needle),
            _ => {
                let message = self.to_string();
                message.contains(needle)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Toml(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Yaml(err) => Some(err),
            _ => None,
        }
    }
}

// Implement From conversions for common error types
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<serde_yml::Error> for Error {
    fn from(err: serde_yml::Error) -> Self {
        Error::Yaml(err)
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::General(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::General(err.to_string())
    }
}

/// Result type alias for gem-templater operations
pub type Result<T> = std::result::Result<T, Error>;
