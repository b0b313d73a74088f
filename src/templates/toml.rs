use crate::error::{Error, Result};
use crate::models::{Declaration, Template};
use crate::templates::{TemplateSource, common};
use log::debug;
use std::fs;
use std::path::Path;

/// Extracts declarations from TOML scaffold templates
pub struct TomlTemplateSource;

impl TemplateSource for TomlTemplateSource {
    fn extract_declarations(&self, template_path: &Path) -> Result<Vec<Declaration>> {
        let contents = fs::read_to_string(template_path).map_err(|e| Error::FileOperation {
            path: template_path.to_path_buf(),
            message: format!("Failed to read template: {}", e),
        })?;

        let template: Template = ::toml::from_str(&contents)?;
        debug!("Parsed TOML template {}", template_path.display());

        Ok(common::declarations_from_template(&template))
    }
}
