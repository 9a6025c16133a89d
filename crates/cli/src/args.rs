use std::ffi::OsString;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser, value_parser};

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default)]
pub(crate) struct ParsedArgs {
    pub(crate) show_help: bool,
    pub(crate) show_version: bool,
    pub(crate) dry_run: bool,
    pub(crate) quiet: bool,
    pub(crate) verbose: u8,
    pub(crate) port: Option<u16>,
    pub(crate) ignore_file: Option<OsString>,
    pub(crate) operands: Vec<OsString>,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new("escp")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
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
            Arg::new("ignore-file")
                .long("ignore-file")
                .short('i')
                .value_name("FILE")
                .help("Read ignore patterns from FILE instead of ./.scpignore.")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .short('n')
                .help("List the paths that would be copied without copying them.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .short('P')
                .value_name("PORT")
                .help("Connect to PORT on the remote host.")
                .value_parser(value_parser!(u16).range(1..))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase logging verbosity; repeat for more detail.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Suppress informational output.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("operands")
                .value_name("OPERAND")
                .num_args(0..)
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Append),
        )
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from("escp"));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let operands = matches
        .remove_many::<OsString>("operands")
        .map(|values| values.collect())
        .unwrap_or_default();

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        dry_run: matches.get_flag("dry-run"),
        quiet: matches.get_flag("quiet"),
        verbose: matches.get_count("verbose"),
        port: matches.remove_one::<u16>("port"),
        ignore_file: matches.remove_one::<OsString>("ignore-file"),
        operands,
    })
}
