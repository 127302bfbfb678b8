//! Tests for extract and build.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_extract_defaults() {
    match parse(&["redirmap", "extract", "sitemaps"]) {
        CliCommand::Extract { root, out, txt } => {
            assert_eq!(root, PathBuf::from("sitemaps"));
            assert_eq!(out, PathBuf::from("all_urls.csv"));
            assert!(txt.is_none());
        }
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_extract_txt() {
    match parse(&["redirmap", "extract", "s", "--out", "u.csv", "--txt", "u.txt"]) {
        CliCommand::Extract { out, txt, .. } => {
            assert_eq!(out, PathBuf::from("u.csv"));
            assert_eq!(txt, Some(PathBuf::from("u.txt")));
        }
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_build() {
    match parse(&["redirmap", "build", "--old", "old.csv", "--new", "new.csv"]) {
        CliCommand::Build {
            old,
            new,
            overrides,
            out_dir,
            relative_targets,
            json,
        } => {
            assert_eq!(old, PathBuf::from("old.csv"));
            assert_eq!(new, PathBuf::from("new.csv"));
            assert!(overrides.is_none());
            assert_eq!(out_dir, PathBuf::from("."));
            assert!(!relative_targets);
            assert!(!json);
        }
        _ => panic!("expected Build"),
    }
}

#[test]
fn cli_parse_build_all_flags() {
    match parse(&[
        "redirmap",
        "build",
        "--old",
        "o.txt",
        "--new",
        "n.txt",
        "--overrides",
        "fix.csv",
        "--out-dir",
        "out",
        "--relative-targets",
        "--json",
    ]) {
        CliCommand::Build {
            overrides,
            out_dir,
            relative_targets,
            json,
            ..
        } => {
            assert_eq!(overrides, Some(PathBuf::from("fix.csv")));
            assert_eq!(out_dir, PathBuf::from("out"));
            assert!(relative_targets);
            assert!(json);
        }
        _ => panic!("expected Build"),
    }
}

#[test]
fn cli_parse_build_requires_inventories() {
    assert!(Cli::try_parse_from(["redirmap", "build", "--old", "o.csv"]).is_err());
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["redirmap", "extract", "s", "--config", "alt.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
}
