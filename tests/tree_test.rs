use pl2dist::config::ScaffoldContext;
use pl2dist::error::Error;
use pl2dist::tree::create_output_tree;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn context(root: &Path) -> ScaffoldContext {
    ScaffoldContext {
        script_path: root.join("foo.pl"),
        script_name: "foo.pl".to_string(),
        out_dir: root.join("foo.pl.d"),
        home: root.to_path_buf(),
        override_dir: root.join(".pl2dist"),
        dir_sep: "/",
        dist_version: "0.10",
        minimum_perl: 5,
        dependencies: vec![],
        verbose: false,
        skip_git: true,
        cpan_user: String::new(),
    }
}

#[test]
fn test_creates_tree_with_test_subdir() {
    let temp_dir = TempDir::new().unwrap();
    let context = context(temp_dir.path());

    create_output_tree(&context).unwrap();

    assert!(context.out_dir.is_dir());
    assert!(context.out_dir.join("t").is_dir());
}

#[cfg(unix)]
#[test]
fn test_tree_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let context = context(temp_dir.path());

    create_output_tree(&context).unwrap();

    let mode = fs::metadata(&context.out_dir).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn test_existing_output_dir_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let context = context(temp_dir.path());

    fs::create_dir(&context.out_dir).unwrap();
    fs::write(context.out_dir.join("keep.txt"), "untouched").unwrap();

    match create_output_tree(&context) {
        Err(Error::OutputDirectoryExists { .. }) => (),
        other => panic!("expected OutputDirectoryExists, got {:?}", other),
    }

    // The earlier scaffold is left exactly as it was.
    let contents = fs::read_to_string(context.out_dir.join("keep.txt")).unwrap();
    assert_eq!(contents, "untouched");
    assert!(!context.out_dir.join("t").exists());
}
