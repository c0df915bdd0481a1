use pl2dist::manifest::{read_skip_patterns, write_manifest, MANIFEST_FILE};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_manifest_lists_sorted_files_and_itself() {
    let temp_dir = TempDir::new().unwrap();
    let tree = temp_dir.path();
    fs::write(tree.join("b.txt"), "b").unwrap();
    fs::write(tree.join("a.txt"), "a").unwrap();
    fs::create_dir(tree.join("t")).unwrap();
    fs::write(tree.join("t/compile.t"), "test").unwrap();

    write_manifest(tree).unwrap();

    let manifest = fs::read_to_string(tree.join(MANIFEST_FILE)).unwrap();
    assert_eq!(manifest, "MANIFEST\na.txt\nb.txt\nt/compile.t\n");
}

#[test]
fn test_skip_patterns_exclude_files() {
    let temp_dir = TempDir::new().unwrap();
    let tree = temp_dir.path();
    fs::write(tree.join("MANIFEST.SKIP"), "*.bak\n.releaserc\n").unwrap();
    fs::write(tree.join("old.bak"), "x").unwrap();
    fs::write(tree.join(".releaserc"), "cpan_user X").unwrap();
    fs::write(tree.join("keep.txt"), "keep").unwrap();

    write_manifest(tree).unwrap();

    let manifest = fs::read_to_string(tree.join(MANIFEST_FILE)).unwrap();
    assert_eq!(manifest, "MANIFEST\nMANIFEST.SKIP\nkeep.txt\n");
}

#[test]
fn test_missing_skip_file_excludes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let skip = read_skip_patterns(temp_dir.path()).unwrap();

    assert!(!skip.is_match("anything.txt"));
}

#[test]
fn test_blank_lines_and_comments_are_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let tree = temp_dir.path();
    fs::write(tree.join("MANIFEST.SKIP"), "# droppings\n\n*.old\n").unwrap();

    let skip = read_skip_patterns(tree).unwrap();
    assert!(skip.is_match("Makefile.old"));
    assert!(!skip.is_match("# droppings"));
}
