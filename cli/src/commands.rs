use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use nparse_common::{config::Config, report::StateFilter};

/// Single-dash, multi-letter flags clap cannot express as shorts.
const LEGACY_FLAGS: &[(&str, &str)] = &[
    ("-op", "--open-ports"),
    ("-cp", "--closed-ports"),
    ("-fp", "--filtered-ports"),
];

#[derive(Parser, Debug)]
#[command(name = "nparser", version)]
#[command(about = "Parse Nmap scan results and list ports per host.")]
#[command(
    after_help = "Each output line reads `<host> -p <port>,<port>,...` and can be fed back to nmap."
)]
pub struct CommandLine {
    /// Path to the Nmap output text file
    pub input: PathBuf,

    /// Write the converted output to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Show only open ports (also `-op`)
    #[arg(long)]
    pub open_ports: bool,

    /// Show only closed ports (also `-cp`)
    #[arg(long)]
    pub closed_ports: bool,

    /// Show only filtered ports (also `-fp`)
    #[arg(long)]
    pub filtered_ports: bool,

    /// Hide the banner and headers, twice to also hide the summary
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Hide the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }

    pub fn filter(&self) -> Option<StateFilter> {
        StateFilter::from_flags(self.open_ports, self.closed_ports, self.filtered_ports)
    }

    /// True when more than one state flag was given.
    pub fn has_conflicting_filters(&self) -> bool {
        [self.open_ports, self.closed_ports, self.filtered_ports]
            .iter()
            .filter(|set| **set)
            .count()
            > 1
    }
}

/// Rewrites `-op`, `-cp` and `-fp` to their long forms.
///
/// Only whole arguments are rewritten, so a path such as `-op.txt` is left
/// alone. Everything after `--` is left alone too.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            LEGACY_FLAGS
                .iter()
                .find(|(short, _)| arg == *short)
                .map_or(arg, |(_, long)| OsString::from(long))
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
