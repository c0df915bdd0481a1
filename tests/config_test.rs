use pl2dist::config::{dir_separator, ScaffoldContext, DIST_VERSION};
use pl2dist::deps::Dependency;
use std::path::PathBuf;

fn context() -> ScaffoldContext {
    ScaffoldContext {
        script_path: PathBuf::from("bin/foo.pl"),
        script_name: "foo.pl".to_string(),
        out_dir: PathBuf::from("foo.pl.d"),
        home: PathBuf::from("/home/tester"),
        override_dir: PathBuf::from("/home/tester/.pl2dist"),
        dir_sep: "/",
        dist_version: DIST_VERSION,
        minimum_perl: 5,
        dependencies: vec![],
        verbose: false,
        skip_git: false,
        cpan_user: String::new(),
    }
}

#[test]
fn test_dir_separator() {
    assert_eq!(dir_separator("windows"), "\\");
    assert_eq!(dir_separator("linux"), "/");
    assert_eq!(dir_separator("macos"), "/");
}

#[test]
fn test_placeholder_values_for_known_keys() {
    let context = context();

    assert_eq!(context.placeholder_value("script"), Some("foo.pl".to_string()));
    assert_eq!(context.placeholder_value("out_dir"), Some("foo.pl.d".to_string()));
    assert_eq!(context.placeholder_value("version"), Some("0.10".to_string()));
    assert_eq!(context.placeholder_value("minimum_perl"), Some("5".to_string()));
    assert_eq!(context.placeholder_value("cpan_user"), Some(String::new()));
}

#[test]
fn test_placeholder_value_for_unknown_key() {
    assert_eq!(context().placeholder_value("no_such_key"), None);
}

#[test]
fn test_prereq_lines_for_empty_dependency_list() {
    assert_eq!(context().prereq_lines(), "");
}

#[test]
fn test_prereq_lines_preserve_discovery_order() {
    let mut context = context();
    context.dependencies = vec![
        Dependency { module: "List::Util".to_string(), version: Some("1.50".to_string()) },
        Dependency { module: "Carp".to_string(), version: None },
    ];

    assert_eq!(
        context.prereq_lines(),
        "        'List::Util' => '1.50',\n        'Carp' => '0',"
    );
}
