use std::ffi::OsString;
use std::path::PathBuf;

use clap::ArgMatches;

use crate::command::clap_command;

/// Where a pattern comes from, in command-line order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PatternSource {
    Inline(String),
    File(PathBuf),
}

/// Parsed command-line options.
#[derive(Debug, Default)]
pub(crate) struct ParsedArgs {
    pub(crate) show_help: bool,
    pub(crate) show_version: bool,
    pub(crate) patterns: Vec<PatternSource>,
    pub(crate) paths: Vec<OsString>,
    pub(crate) paths_from: Vec<OsString>,
    pub(crate) from0: bool,
    pub(crate) walk: Option<PathBuf>,
    pub(crate) anchor: Option<String>,
    pub(crate) unmatched: bool,
    pub(crate) check: bool,
    pub(crate) output: Option<PathBuf>,
    pub(crate) verbose: u8,
    pub(crate) info: Vec<String>,
    pub(crate) debug: Vec<String>,
}

impl ParsedArgs {
    /// Reports whether any candidate source was given.
    pub(crate) fn has_candidates(&self) -> bool {
        !self.paths.is_empty() || !self.paths_from.is_empty() || self.walk.is_some()
    }
}

pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let mut matches = clap_command().try_get_matches_from(arguments)?;

    let patterns = ordered_patterns(&mut matches);

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        patterns,
        paths: remove_all(&mut matches, "paths"),
        paths_from: remove_all(&mut matches, "paths-from"),
        from0: matches.get_flag("from0"),
        walk: matches.remove_one::<OsString>("walk").map(PathBuf::from),
        anchor: matches.remove_one::<String>("anchor"),
        unmatched: matches.get_flag("unmatched"),
        check: matches.get_flag("check"),
        output: matches.remove_one::<OsString>("output").map(PathBuf::from),
        verbose: matches.get_count("verbose"),
        info: remove_all(&mut matches, "info"),
        debug: remove_all(&mut matches, "debug"),
    })
}

fn remove_all<T>(matches: &mut ArgMatches, id: &str) -> Vec<T>
where
    T: Clone + Send + Sync + 'static,
{
    matches
        .remove_many::<T>(id)
        .map(Iterator::collect)
        .unwrap_or_default()
}

/// Merges `--pattern` and `--patterns-from` occurrences by their position on
/// the command line.
fn ordered_patterns(matches: &mut ArgMatches) -> Vec<PatternSource> {
    let inline_indices: Vec<usize> = matches
        .indices_of("pattern")
        .map(Iterator::collect)
        .unwrap_or_default();
    let file_indices: Vec<usize> = matches
        .indices_of("patterns-from")
        .map(Iterator::collect)
        .unwrap_or_default();

    let inline = remove_all::<String>(matches, "pattern")
        .into_iter()
        .map(PatternSource::Inline);
    let files = remove_all::<OsString>(matches, "patterns-from")
        .into_iter()
        .map(|path| PatternSource::File(PathBuf::from(path)));

    let mut ordered: Vec<(usize, PatternSource)> = inline_indices
        .into_iter()
        .zip(inline)
        .chain(file_indices.into_iter().zip(files))
        .collect();
    ordered.sort_by_key(|(index, _)| *index);
    ordered.into_iter().map(|(_, source)| source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ParsedArgs {
        parse_args(std::iter::once("fsfilter").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn patterns_keep_command_line_order() {
        let parsed = parse(&[
            "--patterns-from",
            "a.txt",
            "-p",
            "*.go",
            "--patterns-from=b.txt",
            "--pattern",
            "!main.go",
        ]);
        assert_eq!(
            parsed.patterns,
            [
                PatternSource::File(PathBuf::from("a.txt")),
                PatternSource::Inline("*.go".to_owned()),
                PatternSource::File(PathBuf::from("b.txt")),
                PatternSource::Inline("!main.go".to_owned()),
            ]
        );
    }

    #[test]
    fn positional_paths_and_flags() {
        let parsed = parse(&["-vv", "--unmatched", "--from0", "x", "y/z"]);
        assert_eq!(parsed.verbose, 2);
        assert!(parsed.unmatched);
        assert!(parsed.from0);
        assert_eq!(parsed.paths, [OsString::from("x"), OsString::from("y/z")]);
        assert!(parsed.has_candidates());
    }

    #[test]
    fn verbosity_lists_are_split_on_commas() {
        let parsed = parse(&["--info=stats,skip2", "--debug", "filter", "--debug=fs3"]);
        assert_eq!(parsed.info, ["stats", "skip2"]);
        assert_eq!(parsed.debug, ["filter", "fs3"]);
    }

    #[test]
    fn anchor_requires_walk() {
        let result = parse_args(["fsfilter", "--anchor", ".git"]);
        assert!(result.is_err());
        let parsed = parse(&["--walk", "src", "--anchor", ".git"]);
        assert_eq!(parsed.walk, Some(PathBuf::from("src")));
        assert_eq!(parsed.anchor.as_deref(), Some(".git"));
    }

    #[test]
    fn check_conflicts_with_output() {
        assert!(parse_args(["fsfilter", "--check", "-o", "out.txt", "a"]).is_err());
    }

    #[test]
    fn owned_os_string_arguments_parse() {
        let args: Vec<OsString> = ["fsfilter", "-p", "*.rs", "main.rs"]
            .into_iter()
            .map(OsString::from)
            .collect();
        let parsed = parse_args(args).unwrap();
        assert_eq!(parsed.patterns, [PatternSource::Inline("*.rs".to_owned())]);
        assert_eq!(parsed.paths, [OsString::from("main.rs")]);
    }

    #[test]
    fn no_candidates_detected() {
        assert!(!parse(&["-p", "*"]).has_candidates());
        assert!(parse(&["--paths-from", "-"]).has_candidates());
    }
}
