use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use accounts_view::{
    configure_output, AccountsView, Catalog, Cli, ConsoleSink, NoWait, Settings, StdinGate,
};

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the listing.
    // RUST_LOG=accounts_view=debug shows parsing details; values are never logged.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("accounts_view=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from(Cli::parse());
    configure_output(settings.color);

    let catalog = settings.catalog().with_context(|| {
        format!(
            "Failed to load messages from {}",
            settings
                .messages_file
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    })?;

    if settings.browse {
        return run_browser(&settings, &catalog);
    }

    let sink = ConsoleSink::stdout();
    let path = settings.store_path.clone();
    if settings.wait {
        AccountsView::new(path, sink, StdinGate::new()).run(&catalog);
    } else {
        AccountsView::new(path, sink, NoWait).run(&catalog);
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_browser(settings: &Settings, catalog: &Catalog) -> Result<()> {
    use accounts_view::{ui, OutputSink};

    // Read errors are shown on the console before the terminal is taken over.
    let view = AccountsView::new(settings.store_path.clone(), ConsoleSink::stdout(), NoWait);
    let (records, notice) = view.load(catalog);
    if let Some(notice) = notice {
        let (mut sink, _) = view.into_parts();
        sink.emit(&[notice]);
    }

    let mut app = ui::App::new(records, catalog);
    ui::run_ui(&mut app).context("Failed to run the accounts browser")?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_browser(_settings: &Settings, _catalog: &Catalog) -> Result<()> {
    anyhow::bail!("Browser not available; rebuild with `--features tui`")
}
