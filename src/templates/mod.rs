use crate::error::{Error, Result};
use crate::manifest::GemfileWriter;
use crate::models::Declaration;
use crate::templates::detect::{TemplateKind, detect_template};
use crate::utils::FileTrackerGuard;
use log::info;
use std::path::Path;

pub mod common;
pub mod detect;
pub mod json;
pub mod toml;
pub mod yaml;

/// Trait for sources that can extract declarations from template files
pub trait TemplateSource {
    /// Extracts declarations from the template file
    fn extract_declarations(&self, template_path: &Path) -> Result<Vec<Declaration>>;
}

/// Trait for tools that can apply declarations to a project manifest
pub trait ManifestTool {
    /// Writes the declarations into the project's dependency manifest
    fn apply_declarations(
        &self,
        project_dir: &Path,
        tracker: &mut FileTrackerGuard,
        declarations: &[Declaration],
    ) -> Result<()>;
}

/// Runs the scaffold process
pub fn run_scaffold(
    project_dir: &Path,
    template_path: Option<&Path>,
    import_user_template: bool,
    skip_vcs: bool,
    restore_enabled: bool,
) -> Result<()> {
    let mut tracker = FileTrackerGuard::new_with_restore(restore_enabled);

    let result: Result<()> = (|| {
        let template_file = detect_template(project_dir, template_path)?;
        info!("Detected template format: {:?}", template_file.kind);

        let source: Box<dyn TemplateSource> = match template_file.kind {
            TemplateKind::Toml => Box::new(toml::TomlTemplateSource),
            TemplateKind::Json => Box::new(json::JsonTemplateSource),
            TemplateKind::Yaml => Box::new(yaml::YamlTemplateSource),
        };

        let mut declarations = source.extract_declarations(&template_file.path)?;
        info!("Extracted {} declaration(s)", declarations.len());

        if import_user_template {
            let user_declarations = common::load_user_declarations()?;
            if !user_declarations.is_empty() {
                info!(
                    "Merging {} declaration(s) from the user template",
                    user_declarations.len()
                );
                declarations.extend(user_declarations);
            }
        }

        let resolved = common::resolve_declarations(declarations);

        let tool = GemfileWriter;
        tool.apply_declarations(project_dir, &mut tracker, &resolved)?;
        info!("Manifest updated");

        Ok(())
    })();

    if let Err(error) = &result {
        info!("An error occurred while applying the template. Rolling back changes...");
        tracker.force_rollback();
        drop(tracker);

        return Err(Error::General(format!(
            "{}\nNote: Manifest changes have been rolled back to their original state.",
            error
        )));
    }

    // The manifest is in its final state from here on. Version control runs
    // outside the tracked section: completed steps are never rolled back.
    drop(tracker);

    if skip_vcs {
        info!("Skipping version control actions");
        return Ok(());
    }

    crate::actions::run_post_generation_actions(project_dir)?;

    Ok(())
}
