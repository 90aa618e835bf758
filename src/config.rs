// Command line / environment configuration

use crate::console::ColorChoice;
use crate::error::MessagesError;
use crate::messages::{Catalog, Locale};
use crate::view::DEFAULT_STORE_FILE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "accounts-view", version, about = "List the saved accounts file")]
pub struct Cli {
    #[arg(
        short = 'f',
        long = "file",
        env = "ACCOUNTS_FILE",
        default_value = DEFAULT_STORE_FILE,
        help = "Accounts file written by the registration tool"
    )]
    pub file: PathBuf,

    #[arg(long = "lang", env = "ACCOUNTS_LANG", value_enum, default_value_t = Locale::En)]
    pub lang: Locale,

    #[arg(long = "messages", help = "JSON object of message key -> text, overriding the built-in texts")]
    pub messages: Option<PathBuf>,

    #[arg(long = "color", value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    #[arg(long = "no-wait", default_value_t = false, help = "Do not wait for Enter after the listing")]
    pub no_wait: bool,

    #[cfg(feature = "tui")]
    #[arg(long = "browse", default_value_t = false, help = "Open the interactive browser instead of printing")]
    pub browse: bool,
}

/// Resolved configuration used by the binary.
#[derive(Debug, Clone)]
pub struct Settings {
    pub store_path: PathBuf,
    pub locale: Locale,
    pub messages_file: Option<PathBuf>,
    pub color: ColorChoice,
    pub wait: bool,
    pub browse: bool,
}

impl Settings {
    /// Built-in catalog for the locale, overlaid with the messages file if any.
    pub fn catalog(&self) -> Result<Catalog, MessagesError> {
        let builtin = Catalog::builtin(self.locale);
        match &self.messages_file {
            Some(path) => Ok(builtin.merge(Catalog::load(path)?)),
            None => Ok(builtin),
        }
    }
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Settings {
            store_path: cli.file,
            locale: cli.lang,
            messages_file: cli.messages,
            color: cli.color,
            wait: !cli.no_wait,
            #[cfg(feature = "tui")]
            browse: cli.browse,
            #[cfg(not(feature = "tui"))]
            browse: false,
        }
    }
}
