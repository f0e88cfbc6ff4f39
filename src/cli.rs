// Command line parsing.

use crate::config::default_config_path;
use crate::error::{Error, Result};
use crate::run::Invocation;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Attach the file at the given path to an issue. A comment will
automatically be added to the issue with a link to the attachment.

CONFIG

  The config file must be a JSON formatted file and contain the following properties.

  jira_url - URL for the Jira instance.

  auth - API authentication credentials. The expected format is 'username:password'.";

#[derive(Parser, Debug)]
#[command(name = "jiraattach", version)]
#[command(about = "Attach a file to a Jira issue", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Path to config file [default: ~/.config/jiraattach/config.json]
    #[arg(long, env = "JIRAATTACH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Don't create comment with link to attachment
    #[arg(long)]
    pub no_comment: bool,

    /// Log level, used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// The key of the Jira issue to attach the file to
    pub key: String,

    /// Path to the file to attach
    pub path: PathBuf,
}

/// Outcome of a successful parse.
#[derive(Debug)]
pub enum Parsed {
    /// Arguments for a run.
    Run(Cli),
    /// `--help` or `--version` output for the caller to print.
    Info(clap::Error),
}

impl Cli {
    /// Parse arguments, accepting the single-dash `-config` and
    /// `-no-comment` spellings as well.
    pub fn parse_args<I, T>(args: I) -> Result<Parsed>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        match Cli::try_parse_from(rewrite_legacy_flags(args)) {
            Ok(cli) => Ok(Parsed::Run(cli)),
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Ok(Parsed::Info(e)),
                _ => Err(Error::Argument(e.render().to_string())),
            },
        }
    }

    pub fn invocation(&self) -> Invocation {
        Invocation {
            config_path: self.config.clone().unwrap_or_else(default_config_path),
            key: self.key.clone(),
            file_path: self.path.clone(),
            no_comment: self.no_comment,
        }
    }
}

/// Turn single-dash long flags such as `-config=<path>` into their
/// double-dash forms. Everything after a bare `--` is left alone.
fn rewrite_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut positional_only = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if positional_only {
                return arg;
            }
            let rewritten = match arg.to_str() {
                Some("--") => {
                    positional_only = true;
                    None
                }
                Some(text) if is_legacy_flag(text) => Some(OsString::from(format!("-{}", text))),
                _ => None,
            };
            rewritten.unwrap_or(arg)
        })
        .collect()
}

fn is_legacy_flag(arg: &str) -> bool {
    let name = arg.split('=').next().unwrap_or(arg);
    matches!(name, "-config" | "-no-comment" | "-log-level")
}
