use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tombot::cli::{print_usage, Args};

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("tombot")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["--template", "python", "./output"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template, "python");
    assert_eq!(parsed.directory, PathBuf::from("./output"));
    assert!(parsed.vars.is_empty());
    assert!(!parsed.no_input);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "-t",
        "python",
        "--templates-dir",
        "/srv/templates",
        "--var",
        "name=demo",
        "--var",
        "author=me",
        "--no-input",
        "-v",
        "./output",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.templates_dir, PathBuf::from("/srv/templates"));
    assert_eq!(parsed.vars, vec!["name=demo", "author=me"]);
    assert!(parsed.no_input);
    assert!(parsed.verbose);
}

#[test]
fn test_missing_template() {
    let args = make_args(&["./output"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_missing_directory() {
    let args = make_args(&["-t", "python"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["-t", "python", "./output", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_print_usage() {
    assert!(print_usage().is_ok());
}
