//! Lightweight detection of help and version flags.
//!
//! Only the first argument after the program name is examined, so a caller
//! can answer `--help`/`--version` before handing the rest to a full parser.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliFlag {
    Help,
    Version,
}

pub fn sniff_cli_flags<S: AsRef<str>>(args: &[S]) -> Option<CliFlag> {
    match args.get(1).map(AsRef::as_ref) {
        Some("-h" | "--help") => Some(CliFlag::Help),
        Some("-v" | "--version") => Some(CliFlag::Version),
        _ => None,
    }
}
