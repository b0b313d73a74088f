use crate::models::Template;
use std::path::PathBuf;

/// Environment variable that overrides the user template location, used by
/// tests to point at a throwaway file
pub const USER_TEMPLATE_ENV: &str = "GEM_TEMPLATER_USER_TEMPLATE";

/// Location of the user-level template inside the configuration directory
pub fn user_template_path() -> Result<PathBuf, String> {
    if let Ok(path) = std::env::var(USER_TEMPLATE_ENV) {
        return Ok(PathBuf::from(path));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| "Unable to determine configuration directory".to_string())?;
    Ok(config_dir.join("gem-templater").join("template.toml"))
}

/// Reads the user-level template, if one exists.
///
/// The user template supplements the project template with declarations the
/// user wants in every application they generate.
pub fn load_user_template() -> Result<Option<Template>, String> {
    let path = user_template_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read user template '{}': {}", path.display(), e))?;

    let template: Template = toml::from_str(&contents)
        .map_err(|e| format!("Failed to parse user template '{}': {}", path.display(), e))?;

    Ok(Some(template))
}
