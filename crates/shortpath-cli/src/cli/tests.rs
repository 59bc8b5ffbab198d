#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::wildcard_enum_match_arm)]

use clap::CommandFactory;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("arguments should parse")
}

/// The root help output must contain all top-level subcommand names.
#[test]
fn test_root_help_lists_all_subcommands() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());
    for name in ["path", "inspect"] {
        assert!(
            help.contains(name),
            "root help should mention subcommand '{name}'"
        );
    }
}

/// The root help output must describe every global flag.
#[test]
fn test_root_help_lists_global_flags() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());
    let expected_flags = [
        "--format",
        "--quiet",
        "--verbose",
        "--max-file-size",
        "--help",
        "--version",
    ];
    for flag in &expected_flags {
        assert!(
            help.contains(flag),
            "root help should mention flag '{flag}'"
        );
    }
}

/// `shortpath path --help` must mention the positionals and `--delimiter`.
#[test]
fn test_path_help() {
    let mut cmd = Cli::command();
    let sub = cmd
        .find_subcommand_mut("path")
        .expect("path subcommand should exist");
    let help = format!("{}", sub.render_help());
    for needle in ["FILE", "FROM", "TO", "--delimiter"] {
        assert!(help.contains(needle), "path help should mention {needle}");
    }
}

#[test]
fn test_clap_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_path_with_all_positionals() {
    let cli = parse(&["shortpath", "path", "edges.csv", "A", "D"]);
    match cli.command {
        Command::Path {
            file,
            from,
            to,
            delimiter,
        } => {
            assert_eq!(file, Some(PathOrStdin::Path(PathBuf::from("edges.csv"))));
            assert_eq!(from.as_deref(), Some("A"));
            assert_eq!(to.as_deref(), Some("D"));
            assert_eq!(delimiter, b',');
        }
        other => panic!("expected Path, got a different command: {}", matches_name(&other)),
    }
    assert_eq!(cli.format, OutputFormat::Human);
}

/// Positionals may be omitted so they can be prompted for.
#[test]
fn test_path_positionals_are_optional() {
    let cli = parse(&["shortpath", "path"]);
    match cli.command {
        Command::Path { file, from, to, .. } => {
            assert!(file.is_none());
            assert!(from.is_none());
            assert!(to.is_none());
        }
        other => panic!("expected Path, got {}", matches_name(&other)),
    }
}

#[test]
fn test_dash_means_stdin() {
    let cli = parse(&["shortpath", "inspect", "-"]);
    match cli.command {
        Command::Inspect { file, .. } => assert_eq!(file, PathOrStdin::Stdin),
        other => panic!("expected Inspect, got {}", matches_name(&other)),
    }
}

/// Global flags are accepted after the subcommand.
#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse(&[
        "shortpath",
        "path",
        "edges.csv",
        "A",
        "B",
        "-f",
        "json",
        "--verbose",
        "--max-file-size",
        "1024",
    ]);
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(cli.verbose);
    assert_eq!(cli.max_file_size, 1024);
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let result = Cli::try_parse_from(["shortpath", "-q", "-v", "inspect", "x.csv"]);
    assert!(result.is_err());
}

#[test]
fn test_delimiter_flag() {
    let cli = parse(&["shortpath", "inspect", "x.tsv", "--delimiter", "tab"]);
    match cli.command {
        Command::Inspect { delimiter, .. } => assert_eq!(delimiter, b'\t'),
        other => panic!("expected Inspect, got {}", matches_name(&other)),
    }
}

#[test]
fn test_bad_delimiter_is_rejected() {
    let result = Cli::try_parse_from(["shortpath", "inspect", "x.csv", "-d", ";;"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_delimiter() {
    assert_eq!(parse_delimiter(","), Ok(b','));
    assert_eq!(parse_delimiter(";"), Ok(b';'));
    assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
    assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
    assert!(parse_delimiter("").is_err());
    assert!(parse_delimiter("ab").is_err());
    assert!(parse_delimiter("é").is_err());
}

#[test]
fn test_path_or_stdin_label() {
    assert_eq!(PathOrStdin::Stdin.label(), "-");
    assert_eq!(
        PathOrStdin::Path(PathBuf::from("data/edges.csv")).label(),
        "data/edges.csv"
    );
}

fn matches_name(cmd: &Command) -> &'static str {
    match cmd {
        Command::Path { .. } => "path",
        Command::Inspect { .. } => "inspect",
    }
}
