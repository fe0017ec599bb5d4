use clap::{Arg, ArgAction, Command as ClapCommand, builder::OsStringValueParser};

/// Program name used in diagnostics and the version banner.
pub(crate) const PROGRAM_NAME: &str = "fsfilter";

/// Deterministic help text describing the supported options.
pub(crate) const HELP_TEXT: &str = concat!(
    "Usage: fsfilter [OPTIONS] [PATH...]\n",
    "\n",
    "Print each PATH selected by an ordered list of gitignore-style patterns.\n",
    "A pattern prefixed with '!' un-matches paths an earlier pattern matched;\n",
    "the last matching pattern decides. A pattern naming a directory also\n",
    "matches everything below it.\n",
    "\n",
    "Options:\n",
    "  -p, --pattern=PATTERN     Add a pattern; may be repeated, order is kept.\n",
    "      --patterns-from=FILE  Read patterns from FILE, one per line ('#' starts a comment).\n",
    "      --paths-from=FILE     Read candidate paths from FILE ('-' reads standard input).\n",
    "      --from0               Input lists and output are NUL-terminated.\n",
    "      --walk=DIR            Evaluate every entry below DIR, relative to DIR.\n",
    "      --anchor=NAME         Walk from the nearest directory at or above DIR containing NAME.\n",
    "      --unmatched           Select paths the patterns do not match.\n",
    "      --check               Print nothing; exit 0 if any path is selected, 3 otherwise.\n",
    "  -o, --output=FILE         Write selected paths to FILE, creating parent directories.\n",
    "  -v, --verbose             Increase verbosity; may be supplied multiple times.\n",
    "      --info=FLAGS          Adjust informational messages (name, skip, stats, misc).\n",
    "      --debug=FLAGS         Adjust debug messages (filter, fs, cmd).\n",
    "  -h, --help                Show this help message and exit.\n",
    "  -V, --version             Output version information and exit.\n",
    "\n",
    "Exit status: 0 success, 1 usage error, 2 invalid pattern,\n",
    "3 no path selected with --check, 4 i/o error.\n",
);

/// Version banner written by `--version`.
pub(crate) fn version_text() -> String {
    format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"))
}

pub(crate) fn clap_command() -> ClapCommand {
    ClapCommand::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("pattern")
                .long("pattern")
                .short('p')
                .value_name("PATTERN")
                .help("Add a pattern; may be repeated, order is kept.")
                .action(ArgAction::Append)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("patterns-from")
                .long("patterns-from")
                .value_name("FILE")
                .help("Read patterns from FILE, one per line.")
                .action(ArgAction::Append)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("paths-from")
                .long("paths-from")
                .value_name("FILE")
                .help("Read candidate paths from FILE ('-' reads standard input).")
                .action(ArgAction::Append)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("from0")
                .long("from0")
                .help("Input lists and output are NUL-terminated.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("walk")
                .long("walk")
                .value_name("DIR")
                .help("Evaluate every entry below DIR.")
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("anchor")
                .long("anchor")
                .value_name("NAME")
                .help("Walk from the nearest directory at or above DIR containing NAME.")
                .requires("walk"),
        )
        .arg(
            Arg::new("unmatched")
                .long("unmatched")
                .help("Select paths the patterns do not match.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Print nothing; report through the exit status.")
                .action(ArgAction::SetTrue)
                .conflicts_with("output"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Write selected paths to FILE.")
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase verbosity; may be supplied multiple times.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .value_name("FLAGS")
                .help("Adjust informational messages.")
                .action(ArgAction::Append)
                .value_delimiter(','),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .value_name("FLAGS")
                .help("Adjust debug messages.")
                .action(ArgAction::Append)
                .value_delimiter(','),
        )
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .action(ArgAction::Append)
                .value_parser(OsStringValueParser::new()),
        )
}
