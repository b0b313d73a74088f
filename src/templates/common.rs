use crate::error::Result;
use crate::models::{Declaration, DeclarationList, DependencyEntry, Scope, Template};

/// Flattens a parsed template into declarations: the flat dependency list
/// first, then each group block in file order
pub fn declarations_from_template(template: &Template) -> Vec<Declaration> {
    let mut declarations = Vec::new();

    for entry in &template.dependencies {
        declarations.push(declaration_from_entry(entry, Scope::Everywhere));
    }

    for block in &template.groups {
        let scope = Scope::from_labels(block.labels.clone());
        for entry in &block.dependencies {
            declarations.push(declaration_from_entry(entry, scope.clone()));
        }
    }

    declarations
}

fn declaration_from_entry(entry: &DependencyEntry, scope: Scope) -> Declaration {
    let mut declaration = Declaration::new(entry.name().to_string(), scope);
    if let Some(version) = entry.version() {
        declaration = declaration.with_version(version.to_string());
    }
    declaration
}

/// Folds raw declarations into the ordered accumulator, applying the
/// last-wins duplicate policy
pub fn resolve_declarations(declarations: Vec<Declaration>) -> Vec<Declaration> {
    let mut list = DeclarationList::new();
    for declaration in declarations {
        list.declare(declaration);
    }
    list.into_vec()
}

/// Loads declarations from the user-level template, if present
pub fn load_user_declarations() -> Result<Vec<Declaration>> {
    match crate::utils::load_user_template()? {
        Some(template) => Ok(declarations_from_template(&template)),
        None => Ok(vec![]),
    }
}
