use clap::Parser;
use rtuforge::cli::Args;
use rtuforge::config::{Config, DuplicatePolicy};
use rtuforge::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("rtuforge")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.conf, PathBuf::from("conf"));
    assert_eq!(parsed.tmpl, PathBuf::from("."));
    assert_eq!(parsed.output_dir, PathBuf::from("."));
    assert_eq!(parsed.delimiter, ',');
    assert_eq!(parsed.duplicates, DuplicatePolicy::LastWins);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--conf",
        "./workbook",
        "--tmpl",
        "./templates",
        "--output-dir",
        "./out",
        "--delimiter",
        ";",
        "--duplicates",
        "reject",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.conf, PathBuf::from("./workbook"));
    assert_eq!(parsed.tmpl, PathBuf::from("./templates"));
    assert_eq!(parsed.output_dir, PathBuf::from("./out"));
    assert_eq!(parsed.delimiter, ';');
    assert_eq!(parsed.duplicates, DuplicatePolicy::Reject);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-c", "wb", "-t", "tpl", "-o", "out", "-d", ";", "-v"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.conf, PathBuf::from("wb"));
    assert_eq!(parsed.tmpl, PathBuf::from("tpl"));
    assert_eq!(parsed.output_dir, PathBuf::from("out"));
    assert!(parsed.verbose);
}

#[test]
fn test_invalid_duplicate_policy() {
    let args = make_args(&["--duplicates", "first-wins"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_unexpected_positional() {
    let args = make_args(&["extra"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_config_from_args() {
    let parsed = Args::try_parse_from(make_args(&["-d", ";", "-o", "out"])).unwrap();
    let config = Config::from_args(&parsed).unwrap();

    assert_eq!(config.delimiter, b';');
    assert_eq!(config.output_root, PathBuf::from("out"));
    assert_eq!(config.workbook, PathBuf::from("conf"));
}

#[test]
fn test_config_rejects_non_ascii_delimiter() {
    let parsed = Args::try_parse_from(make_args(&["-d", "§"])).unwrap();
    assert!(matches!(Config::from_args(&parsed), Err(Error::ConfigError(_))));
}
