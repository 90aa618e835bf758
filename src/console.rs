// Console collaborators: output sink, acknowledgment gate, color setup

use crate::render::{LineKind, ReportLine};
use crossterm::style::{style, Color, Stylize};
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::OnceLock;
use tracing::warn;

// ============================================================================
// OUTPUT SETUP
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

static COLOR_ENABLED: OnceLock<bool> = OnceLock::new();

/// Decide once per process whether ANSI colors are written.
///
/// `Auto` enables colors when stdout is a terminal and `NO_COLOR` is unset.
/// Only the first call decides; later calls return the cached answer.
pub fn configure_output(choice: ColorChoice) -> bool {
    *COLOR_ENABLED.get_or_init(|| match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
        }
    })
}

/// Whether colors were enabled by `configure_output` (false before the first call).
pub fn color_enabled() -> bool {
    COLOR_ENABLED.get().copied().unwrap_or(false)
}

// ============================================================================
// OUTPUT SINK
// ============================================================================

/// Receives rendered lines in display order.
pub trait OutputSink {
    fn emit(&mut self, lines: &[ReportLine]);
}

/// Writes lines to a terminal-like writer, decorated per kind.
pub struct ConsoleSink<W: Write> {
    out: W,
    color: bool,
}

impl ConsoleSink<io::Stdout> {
    /// Stdout sink following the process-wide color decision.
    pub fn stdout() -> Self {
        ConsoleSink::new(io::stdout(), color_enabled())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, color: bool) -> Self {
        ConsoleSink { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Terminal form of a single line.
    pub fn decorate(&self, line: &ReportLine) -> String {
        let text = line.text.as_str();
        match line.kind {
            LineKind::Title => self.paint(&format!("📄 {text}"), Color::Cyan),
            LineKind::Frame => self.paint(text, Color::Cyan),
            LineKind::Header => format!("\n{}", self.paint(&format!("👤 {text}"), Color::Cyan)),
            LineKind::Rule => self.paint(text, Color::Yellow),
            LineKind::Index => match text.split_once(' ') {
                Some((index, rest)) => format!(
                    "{} {}",
                    self.paint(index, Color::Green),
                    self.paint(rest, Color::Cyan)
                ),
                None => self.paint(text, Color::Cyan),
            },
            LineKind::Field { label_len } if text.is_char_boundary(label_len) => {
                let (label, value) = text.split_at(label_len);
                format!("{}{}", self.paint(label, Color::Yellow), value)
            }
            LineKind::Field { .. } => text.to_string(),
            LineKind::Notice => format!("\n{}", self.paint(&format!("📭 {text}"), Color::Yellow)),
            LineKind::Error => self.paint(&format!("❌ {text}"), Color::Red),
        }
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn emit(&mut self, lines: &[ReportLine]) {
        for line in lines {
            let text = self.decorate(line);
            if let Err(err) = writeln!(self.out, "{text}") {
                warn!("failed to write listing: {}", err);
                return;
            }
        }
        if let Err(err) = self.out.flush() {
            warn!("failed to flush listing: {}", err);
        }
    }
}

/// Collects emitted lines.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<ReportLine>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }
}

impl OutputSink for MemorySink {
    fn emit(&mut self, lines: &[ReportLine]) {
        self.lines.extend_from_slice(lines);
    }
}

// ============================================================================
// ACKNOWLEDGMENT GATE
// ============================================================================

/// Blocks until the operator lets the caller continue.
pub trait AcknowledgmentGate {
    fn wait(&mut self, prompt: &str);
}

/// Prints the prompt and waits for one line of input.
pub struct StdinGate<R: BufRead, W: Write> {
    input: R,
    prompt_out: W,
}

impl StdinGate<io::StdinLock<'static>, io::Stdout> {
    pub fn new() -> Self {
        StdinGate::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for StdinGate<io::StdinLock<'static>, io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdinGate<R, W> {
    pub fn with_io(input: R, prompt_out: W) -> Self {
        StdinGate { input, prompt_out }
    }
}

impl<R: BufRead, W: Write> AcknowledgmentGate for StdinGate<R, W> {
    fn wait(&mut self, prompt: &str) {
        let shown = write!(self.prompt_out, "🔙 {prompt}...").and_then(|_| self.prompt_out.flush());
        if let Err(err) = shown {
            warn!("failed to write prompt: {}", err);
        }

        // EOF counts as acknowledgment.
        let mut line = String::new();
        if let Err(err) = self.input.read_line(&mut line) {
            warn!("failed to read acknowledgment: {}", err);
        }
    }
}

/// Gate that never blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoWait;

impl AcknowledgmentGate for NoWait {
    fn wait(&mut self, _prompt: &str) {}
}
