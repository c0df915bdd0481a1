use clap::Parser;
use pl2dist::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("pl2dist")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let parsed = Args::try_parse_from(make_args(&["foo.pl"])).unwrap();
    assert_eq!(parsed.script, PathBuf::from("foo.pl"));
}

#[test]
fn test_script_path_with_directories() {
    let parsed = Args::try_parse_from(make_args(&["src/bin/foo.pl"])).unwrap();
    assert_eq!(parsed.script, PathBuf::from("src/bin/foo.pl"));
}

#[test]
fn test_missing_args() {
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["foo.pl", "bar.pl"])).is_err());
}
