use gem_templater::utils::FileTrackerGuard;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[cfg(test)]
mod tests {
    use super::*;

    /// Creates a temporary test environment with directory and file.
    ///
    /// Returns:
    /// - TempDir: The temporary directory handle (automatically cleaned up when dropped)
    /// - PathBuf: Path to the project directory
    /// - PathBuf: Path to a test file within the project directory
    fn setup_test_environment() -> (TempDir, PathBuf, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path().to_path_buf();
        let test_file = project_dir.join("Gemfile");
        fs::write(&test_file, "source \"https://rubygems.org\"\n").unwrap();
        (temp_dir, project_dir, test_file)
    }

    /// Tests that an existing file can be tracked successfully.
    #[test]
    fn test_track_existing_file() {
        let (_temp_dir, _project_dir, test_file) = setup_test_environment();
        let mut guard = FileTrackerGuard::new();
        assert!(guard.track_file(&test_file).is_ok());
    }

    /// Tests that tracking the same file twice is idempotent.
    #[test]
    fn test_track_same_file_twice() {
        let (_temp_dir, _project_dir, test_file) = setup_test_environment();
        let mut guard = FileTrackerGuard::new();

        assert!(guard.track_file(&test_file).is_ok());
        assert!(guard.track_file(&test_file).is_ok());
    }

    /// Tests rollback of a file created during the run.
    ///
    /// This test verifies that:
    /// 1. A path that did not exist at tracking time is removed on rollback
    /// 2. The rollback occurs when the guard is dropped
    #[test]
    fn test_rollback_removes_created_file() {
        let (_temp_dir, project_dir, _) = setup_test_environment();
        let created = project_dir.join("created.txt");

        {
            let mut guard = FileTrackerGuard::new();
            guard.track_file(&created).unwrap();
            fs::write(&created, "scaffold output").unwrap();
            guard.force_rollback();
        } // Guard is dropped here

        assert!(!created.exists());
    }

    /// Tests rollback restoring the original content of a modified file.
    ///
    /// This test verifies that:
    /// 1. Content at tracking time is preserved
    /// 2. Rollback restores the file byte-for-byte
    #[test]
    fn test_rollback_restores_content() {
        let (_temp_dir, _project_dir, test_file) = setup_test_environment();

        {
            let mut guard = FileTrackerGuard::new();
            guard.track_file(&test_file).unwrap();
            fs::write(&test_file, "source \"https://rubygems.org\"\n\ngem \"sorcery\"\n").unwrap();
            guard.force_rollback();
        } // Guard is dropped here

        let content = fs::read_to_string(&test_file).unwrap();
        assert_eq!(content, "source \"https://rubygems.org\"\n");
    }

    /// Tests that nothing is rolled back unless a rollback is forced.
    #[test]
    fn test_no_rollback_without_force() {
        let (_temp_dir, _project_dir, test_file) = setup_test_environment();

        {
            let mut guard = FileTrackerGuard::new();
            guard.track_file(&test_file).unwrap();
            fs::write(&test_file, "modified").unwrap();
        } // Guard is dropped here

        let content = fs::read_to_string(&test_file).unwrap();
        assert_eq!(content, "modified");
    }

    /// Tests that a guard created with restore disabled leaves changes in
    /// place even when a rollback is forced.
    #[test]
    fn test_restore_disabled() {
        let (_temp_dir, _project_dir, test_file) = setup_test_environment();

        {
            let mut guard = FileTrackerGuard::new_with_restore(false);
            guard.track_file(&test_file).unwrap();
            fs::write(&test_file, "modified").unwrap();
            guard.force_rollback();
        } // Guard is dropped here

        let content = fs::read_to_string(&test_file).unwrap();
        assert_eq!(content, "modified");
    }

    /// Tests tracking of multiple files in one run.
    #[test]
    fn test_multiple_operations() {
        let (_temp_dir, project_dir, _) = setup_test_environment();
        let mut guard = FileTrackerGuard::new();

        let file1 = project_dir.join("file1.txt");
        let file2 = project_dir.join("file2.txt");

        fs::write(&file1, "content1").unwrap();
        fs::write(&file2, "content2").unwrap();

        assert!(guard.track_file(&file1).is_ok());
        assert!(guard.track_file(&file2).is_ok());
    }
}
