/// Represents a single dependency request read from a scaffold template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The name of the requested package
    pub name: String,

    /// Optional version requirement (e.g. "~> 3.1")
    pub version: Option<String>,

    /// Environments the declaration is active in
    pub scope: Scope,
}

/// Represents the environments a declaration applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Active in every environment
    Everywhere,

    /// Restricted to the named environment groups (e.g. "development", "test")
    Groups(Vec<String>),
}

impl Scope {
    /// Builds a scope from a list of group labels, treating an empty list as
    /// unrestricted
    pub fn from_labels(labels: Vec<String>) -> Self {
        if labels.is_empty() {
            Scope::Everywhere
        } else {
            Scope::Groups(labels)
        }
    }

    /// Group labels for this scope, empty when unrestricted
    pub fn labels(&self) -> &[String] {
        match self {
            Scope::Everywhere => &[],
            Scope::Groups(labels) => labels,
        }
    }
}

impl Declaration {
    /// Creates a new declaration with the given name and scope
    pub fn new(name: String, scope: Scope) -> Self {
        Self {
            name,
            version: None,
            scope,
        }
    }

    /// Adds a version requirement to the declaration
    pub fn with_version(mut self, version: String) -> Self {
        self.version = Some(version);
        self
    }
}

/// Ordered accumulator of declarations consumed by the manifest writer.
///
/// Duplicate names resolve last-wins: the later declaration replaces the
/// earlier one and takes the later position.
#[derive(Debug, Default)]
pub struct DeclarationList {
    entries: Vec<Declaration>,
}

impl DeclarationList {
    /// Creates an empty declaration list
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a declaration, replacing any earlier declaration with the same
    /// name
    pub fn declare(&mut self, declaration: Declaration) {
        if let Some(position) = self
            .entries
            .iter()
            .position(|existing| existing.name == declaration.name)
        {
            self.entries.remove(position);
        }
        self.entries.push(declaration);
    }

    /// Number of effective declarations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no declarations
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the declarations in application order
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.entries.iter()
    }

    /// Consumes the list, returning the declarations in application order
    pub fn into_vec(self) -> Vec<Declaration> {
        self.entries
    }
}
