use crate::error::{Error, Result};
use crate::models::{Declaration, Scope};
use crate::templates::ManifestTool;
use crate::utils::FileTrackerGuard;
use log::{debug, info, warn};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Name of the dependency manifest this writer maintains
pub const GEMFILE_NAME: &str = "Gemfile";

/// Source line written into a newly created Gemfile
const GEMFILE_SOURCE: &str = "source \"https://rubygems.org\"";

/// Returns true when the name satisfies the RubyGems name grammar: letters,
/// digits, underscore, dash and dot, with at least one letter
pub fn is_valid_gem_name(name: &str) -> bool {
    let re = Regex::new(r"^[A-Za-z0-9_.\-]+$").unwrap();
    re.is_match(name) && name.chars().any(|c| c.is_ascii_alphabetic())
}

/// Returns true when the label is usable as a Ruby group symbol
pub fn is_valid_group_label(label: &str) -> bool {
    let re = Regex::new(r"^[a-z_][a-z0-9_]*$").unwrap();
    re.is_match(label)
}

/// Collects gem names already declared in an existing Gemfile
fn existing_gems(contents: &str) -> Vec<String> {
    let re = Regex::new(r#"^\s*gem\s+["']([A-Za-z0-9_.\-]+)["']"#).unwrap();
    contents
        .lines()
        .filter_map(|line| re.captures(line).map(|captures| captures[1].to_string()))
        .collect()
}

/// Formats a declaration as a Gemfile gem line, without indentation
pub fn format_declaration(declaration: &Declaration) -> String {
    match &declaration.version {
        Some(version) => format!("gem \"{}\", \"{}\"", declaration.name, version),
        None => format!("gem \"{}\"", declaration.name),
    }
}

/// Renders declarations into Gemfile text.
///
/// Unrestricted declarations become top-level gem lines in declaration order.
/// Declarations sharing a label set share one `group ... do` block; blocks
/// appear in first-appearance order of their label set and entries keep
/// declaration order within a block.
pub fn render_declarations(declarations: &[Declaration]) -> Result<String> {
    for declaration in declarations {
        if !is_valid_gem_name(&declaration.name) {
            return Err(Error::Declaration(format!(
                "'{}' is not a valid gem name",
                declaration.name
            )));
        }
        for label in declaration.scope.labels() {
            if !is_valid_group_label(label) {
                return Err(Error::Declaration(format!(
                    "'{}' is not a valid environment group label",
                    label
                )));
            }
        }
    }

    let mut top_level: Vec<&Declaration> = Vec::new();
    let mut blocks: Vec<(&[String], Vec<&Declaration>)> = Vec::new();

    for declaration in declarations {
        match &declaration.scope {
            Scope::Everywhere => top_level.push(declaration),
            Scope::Groups(labels) => {
                if let Some((_, entries)) = blocks
                    .iter_mut()
                    .find(|(block_labels, _)| *block_labels == labels.as_slice())
                {
                    entries.push(declaration);
                } else {
                    blocks.push((labels.as_slice(), vec![declaration]));
                }
            }
        }
    }

    let mut rendered = String::new();

    for declaration in &top_level {
        rendered.push_str(&format_declaration(declaration));
        rendered.push('\n');
    }

    for (labels, entries) in &blocks {
        if !rendered.is_empty() {
            rendered.push('\n');
        }
        let symbols: Vec<String> = labels.iter().map(|label| format!(":{}", label)).collect();
        rendered.push_str(&format!("group {} do\n", symbols.join(", ")));
        for declaration in entries {
            rendered.push_str("  ");
            rendered.push_str(&format_declaration(declaration));
            rendered.push('\n');
        }
        rendered.push_str("end\n");
    }

    Ok(rendered)
}

/// Gemfile manifest writer.
///
/// Creates the Gemfile when missing and appends to it otherwise. Gems the
/// manifest already declares are skipped rather than duplicated.
pub struct GemfileWriter;

impl ManifestTool for GemfileWriter {
    fn apply_declarations(
        &self,
        project_dir: &Path,
        tracker: &mut FileTrackerGuard,
        declarations: &[Declaration],
    ) -> Result<()> {
        let gemfile_path = project_dir.join(GEMFILE_NAME);
        tracker.track_file(&gemfile_path)?;

        let mut contents = if gemfile_path.exists() {
            debug!("Appending to existing {}", gemfile_path.display());
            fs::read_to_string(&gemfile_path).map_err(|e| Error::FileOperation {
                path: gemfile_path.clone(),
                message: format!("Failed to read Gemfile: {}", e),
            })?
        } else {
            info!("No Gemfile found, creating one");
            format!("{}\n", GEMFILE_SOURCE)
        };

        let present = existing_gems(&contents);
        let mut fresh: Vec<&Declaration> = Vec::new();
        for declaration in declarations {
            if present.iter().any(|name| name == &declaration.name) {
                warn!(
                    "Gem '{}' is already declared in the Gemfile, skipping",
                    declaration.name
                );
            } else {
                fresh.push(declaration);
            }
        }

        let owned: Vec<Declaration> = fresh.into_iter().cloned().collect();
        let rendered = render_declarations(&owned)?;

        if !rendered.is_empty() {
            if !contents.ends_with('\n') {
                contents.push('\n');
            }
            contents.push('\n');
            contents.push_str(&rendered);
        }

        fs::write(&gemfile_path, &contents).map_err(|e| Error::FileOperation {
            path: gemfile_path.clone(),
            message: format!("Failed to write Gemfile: {}", e),
        })?;

        info!(
            "Wrote {} declaration(s) to {}",
            owned.len(),
            gemfile_path.display()
        );
        Ok(())
    }
}
