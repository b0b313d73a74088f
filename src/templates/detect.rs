use crate::error::{Error, Result};
use log::info;
use std::path::{Path, PathBuf};

/// Template file formats understood by the scaffolder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Toml,
    Json,
    Yaml,
}

/// A resolved template location and its format
#[derive(Debug, Clone)]
pub struct TemplateFile {
    pub kind: TemplateKind,
    pub path: PathBuf,
}

/// File names probed, in order, when no explicit template path is given
const TEMPLATE_CANDIDATES: [&str; 4] = [
    "template.toml",
    "template.json",
    "template.yml",
    "template.yaml",
];

/// Resolves the template to apply: an explicit path wins, otherwise the
/// project directory is probed for the well-known template file names.
pub fn detect_template(project_dir: &Path, explicit: Option<&Path>) -> Result<TemplateFile> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::TemplateDetection(format!(
                "Template file '{}' does not exist",
                path.display()
            )));
        }
        let kind = kind_from_extension(path)?;
        return Ok(TemplateFile {
            kind,
            path: path.to_path_buf(),
        });
    }

    for candidate in TEMPLATE_CANDIDATES {
        let path = project_dir.join(candidate);
        if path.exists() {
            info!("Found template file {}", path.display());
            let kind = kind_from_extension(&path)?;
            return Ok(TemplateFile { kind, path });
        }
    }

    Err(Error::TemplateDetection(
        "Unable to find a scaffold template. Pass one with --template or add a template.toml, template.json or template.yml to the project directory.".to_string(),
    ))
}

fn kind_from_extension(path: &Path) -> Result<TemplateKind> {
    match path.extension().and_then(|extension| extension.to_str()) {
        Some("toml") => Ok(TemplateKind::Toml),
        Some("json") => Ok(TemplateKind::Json),
        Some("yml") | Some("yaml") => Ok(TemplateKind::Yaml),
        other => Err(Error::TemplateDetection(format!(
            "Unsupported template extension '{}' for '{}'",
            other.unwrap_or(""),
            path.display()
        ))),
    }
}
