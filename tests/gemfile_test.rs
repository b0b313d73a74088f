use gem_templater::manifest::GemfileWriter;
use gem_templater::manifest::gemfile::{
    format_declaration, is_valid_gem_name, render_declarations,
};
use gem_templater::models::{Declaration, Scope};
use gem_templater::templates::ManifestTool;
use gem_templater::utils::FileTrackerGuard;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[cfg(test)]
mod tests {
    use super::*;

    /// Creates a temporary project directory.
    fn setup_project() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path().to_path_buf();
        (temp_dir, project_dir)
    }

    fn everywhere(name: &str) -> Declaration {
        Declaration::new(name.to_string(), Scope::Everywhere)
    }

    fn grouped(name: &str, labels: &[&str]) -> Declaration {
        Declaration::new(
            name.to_string(),
            Scope::Groups(labels.iter().map(|label| label.to_string()).collect()),
        )
    }

    /// Tests gem line formatting with and without a version requirement.
    #[test]
    fn test_format_declaration() {
        assert_eq!(format_declaration(&everywhere("sorcery")), "gem \"sorcery\"");

        let versioned = everywhere("rails").with_version("~> 7.1".to_string());
        assert_eq!(format_declaration(&versioned), "gem \"rails\", \"~> 7.1\"");
    }

    /// Tests the gem name grammar.
    #[test]
    fn test_gem_name_validation() {
        assert!(is_valid_gem_name("rspec-rails"));
        assert!(is_valid_gem_name("active_designer"));
        assert!(is_valid_gem_name("net-http2"));
        assert!(!is_valid_gem_name("bad name"));
        assert!(!is_valid_gem_name(""));
        assert!(!is_valid_gem_name("123"));
    }

    /// Tests rendering of unrestricted and grouped declarations.
    ///
    /// This test verifies that:
    /// 1. Unrestricted declarations render as top-level gem lines
    /// 2. Declarations sharing a label set share one group block naming
    ///    exactly those labels
    /// 3. Blocks appear in first-appearance order of their label set
    #[test]
    fn test_render_groups() {
        let declarations = vec![
            everywhere("sorcery"),
            grouped("pry", &["development", "test"]),
            grouped("capybara", &["test"]),
            grouped("active_designer", &["development", "test"]),
        ];

        let rendered = render_declarations(&declarations).unwrap();
        let expected = "\
gem \"sorcery\"

group :development, :test do
  gem \"pry\"
  gem \"active_designer\"
end

group :test do
  gem \"capybara\"
end
";
        assert_eq!(rendered, expected);
    }

    /// Tests that an invalid gem name fails rendering.
    #[test]
    fn test_render_rejects_invalid_gem_name() {
        let declarations = vec![everywhere("bad name")];
        let error = render_declarations(&declarations).unwrap_err();
        assert!(error.contains("not a valid gem name"));
    }

    /// Tests that an invalid group label fails rendering.
    #[test]
    fn test_render_rejects_invalid_group_label() {
        let declarations = vec![grouped("pry", &["Development"])];
        let error = render_declarations(&declarations).unwrap_err();
        assert!(error.contains("not a valid environment group label"));
    }

    /// Tests that applying to a project without a Gemfile creates one.
    ///
    /// This test verifies that:
    /// 1. The created manifest starts with the rubygems source line
    /// 2. The declarations follow, separated by a blank line
    #[test]
    fn test_apply_creates_gemfile() {
        let (_temp_dir, project_dir) = setup_project();
        let mut guard = FileTrackerGuard::new();

        let declarations = vec![everywhere("sorcery"), grouped("capybara", &["test"])];
        GemfileWriter
            .apply_declarations(&project_dir, &mut guard, &declarations)
            .unwrap();

        let contents = fs::read_to_string(project_dir.join("Gemfile")).unwrap();
        let expected = "\
source \"https://rubygems.org\"

gem \"sorcery\"

group :test do
  gem \"capybara\"
end
";
        assert_eq!(contents, expected);
    }

    /// Tests that applying to an existing Gemfile appends and skips gems the
    /// manifest already declares.
    ///
    /// This test verifies that:
    /// 1. The original manifest content is preserved verbatim
    /// 2. A gem already present is not declared a second time
    /// 3. New declarations are appended after the original content
    #[test]
    fn test_apply_appends_and_skips_existing() {
        let (_temp_dir, project_dir) = setup_project();
        let gemfile_path = project_dir.join("Gemfile");
        let original = "source \"https://rubygems.org\"\n\ngem \"rails\", \"~> 7.1\"\n";
        fs::write(&gemfile_path, original).unwrap();

        let mut guard = FileTrackerGuard::new();
        let declarations = vec![everywhere("rails"), everywhere("sorcery")];
        GemfileWriter
            .apply_declarations(&project_dir, &mut guard, &declarations)
            .unwrap();

        let contents = fs::read_to_string(&gemfile_path).unwrap();
        assert!(contents.starts_with(original));
        assert_eq!(contents.matches("gem \"rails\"").count(), 1);
        assert!(contents.contains("gem \"sorcery\""));
    }

    /// Tests that an empty declaration list still leaves a valid manifest.
    #[test]
    fn test_apply_empty_declarations() {
        let (_temp_dir, project_dir) = setup_project();
        let mut guard = FileTrackerGuard::new();

        GemfileWriter
            .apply_declarations(&project_dir, &mut guard, &[])
            .unwrap();

        let contents = fs::read_to_string(project_dir.join("Gemfile")).unwrap();
        assert_eq!(contents, "source \"https://rubygems.org\"\n");
    }
}
