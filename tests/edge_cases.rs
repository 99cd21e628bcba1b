//! Edge case and error handling tests for treeprint


use harness::{TestDir, run_treeprint, tree_lines};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_file() {
    let dir = TestDir::new();
    dir.add_file("target.txt", "abc");
    symlink(dir.path().join("target.txt"), dir.path().join("link.txt"))
        .expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_treeprint(dir.path(), &["-s"]);
    assert!(success, "treeprint should succeed with symlink");
    assert_eq!(
        tree_lines(&stdout),
        vec!["├───link.txt [3.0B]", "└───target.txt [3.0B]"]
    );
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let dir = TestDir::new();
    dir.add_file("subdir/file.txt", "");
    symlink("..", dir.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_treeprint(dir.path(), &["--stats"]);
    assert!(success, "treeprint should not hang on parent symlink");
    assert_eq!(
        tree_lines(&stdout),
        vec!["└───subdir/", "    ├───file.txt", "    └───parent/"]
    );
    assert!(stdout.contains("Directories: 2\nFiles: 1"), "{}", stdout);
}

#[test]
fn test_symlinked_directory_is_followed() {
    let dir = TestDir::new();
    dir.add_file("real/inside.txt", "");
    symlink("real", dir.path().join("link")).expect("Failed to create directory symlink");

    let (stdout, _stderr, success) = run_treeprint(dir.path(), &["--stats"]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec![
            "├───link/",
            "│   └───inside.txt",
            "└───real/",
            "    └───inside.txt",
        ]
    );
    assert!(stdout.contains("Directories: 2\nFiles: 2"), "{}", stdout);
}

#[test]
fn test_broken_symlink() {
    let dir = TestDir::new();
    dir.add_file("real.txt", "");
    symlink("nonexistent.txt", dir.path().join("broken_link.txt"))
        .expect("Failed to create broken symlink");

    let (stdout, _stderr, success) = run_treeprint(dir.path(), &[]);
    assert!(success, "treeprint should handle broken symlinks");
    assert!(stdout.contains("real.txt"));
    assert!(!stdout.contains("broken_link.txt"), "broken links are skipped");
}

#[test]
fn test_self_referential_symlink() {
    let dir = TestDir::new();
    dir.add_file("file.txt", "");
    symlink("selfref", dir.path().join("selfref"))
        .expect("Failed to create self-referential symlink");

    let (stdout, _stderr, success) = run_treeprint(dir.path(), &[]);
    assert!(success, "treeprint should handle self-referential symlinks");
    assert_eq!(tree_lines(&stdout), vec!["└───file.txt"]);
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
fn test_unreadable_directory_aborts() {
    let dir = TestDir::new();
    dir.add_file("readable/file.txt", "");
    let unreadable = dir.add_dir("unreadable");
    fs::write(unreadable.join("hidden.txt"), "").expect("Failed to write file");

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&unreadable, perms).expect("Failed to set permissions");

    // Privileged users can still list the directory; nothing to check then.
    let still_readable = fs::read_dir(&unreadable).is_ok();
    let (stdout, stderr, success) = run_treeprint(dir.path(), &[]);

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&unreadable, perms).expect("Failed to restore permissions");

    if still_readable {
        return;
    }
    assert!(!success, "listing failures are fatal");
    assert!(stderr.contains("cannot access"), "{}", stderr);
    assert!(stderr.contains("unreadable"), "{}", stderr);
    assert!(stdout.is_empty(), "nothing is printed on failure");
    assert!(!dir.path().join("tree.txt").exists());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = TestDir::sample();
    let (_stdout, stderr, success) =
        run_treeprint(dir.path(), &["-o", "missing-dir/tree.txt"]);
    assert!(!success);
    assert!(stderr.contains("cannot write"), "{}", stderr);
}

// ============================================================================
// Special Filenames
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let dir = TestDir::new();
    dir.add_file("file with spaces.txt", "");
    dir.add_file("dir with spaces/nested.txt", "");

    let (stdout, _stderr, success) = run_treeprint(dir.path(), &[]);
    assert!(success, "treeprint should handle spaces in filenames");
    assert_eq!(
        tree_lines(&stdout),
        vec![
            "├───file with spaces.txt",
            "└───dir with spaces/",
            "    └───nested.txt",
        ]
    );
}

#[test]
fn test_filename_with_unicode() {
    let dir = TestDir::new();
    dir.add_file("日本語.txt", "");
    dir.add_file("émoji_🎉.txt", "");
    dir.add_file("中文目录/文件.txt", "");

    let (stdout, _stderr, success) = run_treeprint(dir.path(), &[]);
    assert!(success, "treeprint should handle unicode filenames");
    assert!(stdout.contains("日本語.txt"));
    assert!(stdout.contains("émoji_🎉.txt"));
    assert!(stdout.contains("└───中文目录/"));
    assert!(stdout.contains("    └───文件.txt"));
}

#[test]
fn test_mixed_case_ordering() {
    let dir = TestDir::new();
    for name in ["B.txt", "a.txt", "C.txt"] {
        dir.add_file(name, "");
    }
    dir.add_dir("Zoo");
    dir.add_dir("apple");

    let (stdout, _stderr, success) = run_treeprint(dir.path(), &[]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec![
            "├───a.txt",
            "├───B.txt",
            "├───C.txt",
            "├───apple/",
            "└───Zoo/",
        ]
    );
}

// ============================================================================
// Structure Edge Cases
// ============================================================================

#[test]
fn test_empty_directory() {
    let dir = TestDir::new();
    let (stdout, _stderr, success) = run_treeprint(dir.path(), &["--stats"]);
    assert!(success);
    assert!(tree_lines(&stdout).is_empty());
    assert!(stdout.contains("Directories: 0\nFiles: 0"), "{}", stdout);
}

#[test]
fn test_only_excluded_entries() {
    let dir = TestDir::new();
    dir.add_file("node_modules/a.js", "");
    dir.add_file("__pycache__/b.pyc", "");

    let (stdout, _stderr, success) = run_treeprint(dir.path(), &["--stats"]);
    assert!(success);
    assert!(tree_lines(&stdout).is_empty());
    assert!(stdout.contains("Directories: 0\nFiles: 0"), "{}", stdout);
}

#[test]
fn test_empty_subdirectories_are_shown() {
    let dir = TestDir::new();
    dir.add_dir("empty_a");
    dir.add_dir("empty_b");

    let (stdout, _stderr, success) = run_treeprint(dir.path(), &[]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["├───empty_a/", "└───empty_b/"]);
}

#[test]
fn test_deep_nesting_guides() {
    let dir = TestDir::new();
    dir.add_file("a/b/c/d.txt", "");
    dir.add_file("a/z.txt", "");
    dir.add_file("y.txt", "");

    let (stdout, _stderr, success) = run_treeprint(dir.path(), &[]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec![
            "├───y.txt",
            "└───a/",
            "    ├───z.txt",
            "    └───b/",
            "        └───c/",
            "            └───d.txt",
        ]
    );
}

#[test]
fn test_depth_zero() {
    let dir = TestDir::sample();
    let (stdout, _stderr, success) = run_treeprint(dir.path(), &["-d", "0", "--stats"]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["├───file1.txt", "├───file2.py"]);
    // directories at the root level are still counted
    assert!(stdout.contains("Directories: 2\nFiles: 2"), "{}", stdout);
}
