// Accounts View - Core Library
// Parser, renderer and console plumbing for the saved-accounts listing

pub mod config;
pub mod console;
pub mod error;
pub mod mask;
pub mod messages;
pub mod parser;
pub mod record;
pub mod render;
pub mod view;

// Only compile the browser when the TUI feature is enabled
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use config::{Cli, Settings};
pub use console::{
    configure_output, AcknowledgmentGate, ColorChoice, ConsoleSink, MemorySink, NoWait,
    OutputSink, StdinGate,
};
pub use error::{MessagesError, StoreError};
pub use mask::{mask_token, NOT_AVAILABLE};
pub use messages::{Catalog, Locale, MessageProvider};
pub use parser::{Label, RecordParser, SEPARATOR, SEPARATOR_WIDTH};
pub use record::Record;
pub use render::{LineKind, ReportLine, ReportRenderer, RULE_WIDTH};
pub use view::{run, AccountsView, DEFAULT_STORE_FILE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
