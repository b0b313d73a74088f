use crate::error::{Error, Result};
use crate::models::{Declaration, Template};
use crate::templates::{TemplateSource, common};
use log::debug;
use std::fs;
use std::path::Path;

/// Extracts declarations from YAML scaffold templates
pub struct YamlTemplateSource;

impl TemplateSource for YamlTemplateSource {
    fn extract_declarations(&self, template_path: &Path) -> Result<Vec<Declaration>> {
        let contents = fs::read_to_string(template_path).map_err(|e| Error::FileOperation {
            path: template_path.to_path_buf(),
            message: format!("Failed to read template: {}", e),
        })?;

        let template: Template = serde_yml::from_str(&contents)?;
        debug!("Parsed YAML template {}", template_path.display());

        Ok(common::declarations_from_template(&template))
    }
}
