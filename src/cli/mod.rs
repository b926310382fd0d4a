pub mod commands;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Printed to stdout whenever the argument count is wrong.
pub const USAGE: &str = "Usage: clean-appcast <appcast_file> <channel_name>\n\
                         Example: clean-appcast appcast.xml edge";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "clean-appcast")]
#[command(about = "Remove every release of one Sparkle channel from an appcast", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Appcast file to rewrite in place
    #[arg(allow_hyphen_values = true)]
    pub appcast_file: PathBuf,

    /// Sparkle channel whose releases are removed (e.g. "edge")
    #[arg(allow_hyphen_values = true)]
    pub channel_name: String,
}

impl Cli {
    /// Parse `args` (program name first). Returns `None` unless there are
    /// exactly two positional arguments.
    pub fn from_args<I, T>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != 3 {
            return None;
        }
        Self::try_parse_from(args).ok()
    }

    pub fn from_env() -> Option<Self> {
        Self::from_args(std::env::args_os())
    }
}
