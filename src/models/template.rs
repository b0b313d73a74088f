use serde::Deserialize;

/// Represents the top-level structure of a scaffold template file
#[derive(Deserialize, Debug, Default)]
pub struct Template {
    /// Free-form description of what the template sets up
    #[allow(dead_code)] // Field used through Serde deserialization
    pub description: Option<String>,

    /// Dependencies active in every environment
    #[serde(default)]
    pub dependencies: Vec<DependencyEntry>,

    /// Group blocks pairing environment labels with further dependencies
    #[serde(default, rename = "group")]
    pub groups: Vec<GroupBlock>,
}

/// A dependency entry, either a bare name or a name with a version requirement
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum DependencyEntry {
    /// Bare package name, e.g. `"sorcery"`
    Name(String),

    /// Name with an optional version requirement,
    /// e.g. `{ name = "pry", version = "~> 0.14" }`
    Detailed {
        name: String,
        version: Option<String>,
    },
}

impl DependencyEntry {
    /// The package name of the entry
    pub fn name(&self) -> &str {
        match self {
            DependencyEntry::Name(name) => name,
            DependencyEntry::Detailed { name, .. } => name,
        }
    }

    /// The version requirement of the entry, if any
    pub fn version(&self) -> Option<&str> {
        match self {
            DependencyEntry::Name(_) => None,
            DependencyEntry::Detailed { version, .. } => version.as_deref(),
        }
    }
}

/// A set of environment labels with the dependencies restricted to them
#[derive(Deserialize, Debug, Clone)]
pub struct GroupBlock {
    /// Environment group labels, e.g. `["development", "test"]`
    pub labels: Vec<String>,

    /// Dependencies active only in the listed environments
    #[serde(default)]
    pub dependencies: Vec<DependencyEntry>,
}
