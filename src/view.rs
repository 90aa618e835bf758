// "View accounts" menu action
//
// Loads the accounts file, prints the listing and waits for the operator.
// Never fails: read errors become a notice so the surrounding menu keeps running.

use crate::console::{AcknowledgmentGate, ConsoleSink, OutputSink, StdinGate};
use crate::messages::{self, MessageProvider};
use crate::parser::RecordParser;
use crate::record::Record;
use crate::render::{ReportLine, ReportRenderer};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name used by the program that writes the accounts.
pub const DEFAULT_STORE_FILE: &str = "cursor_accounts.txt";

/// Run the listing with the default file, stdout and a stdin gate.
///
/// Always returns `true`.
pub fn run(messages: &dyn MessageProvider) -> bool {
    let mut view = AccountsView::new(
        PathBuf::from(DEFAULT_STORE_FILE),
        ConsoleSink::stdout(),
        StdinGate::new(),
    );
    view.run(messages)
}

pub struct AccountsView<S: OutputSink, G: AcknowledgmentGate> {
    store_path: PathBuf,
    parser: RecordParser,
    renderer: ReportRenderer,
    sink: S,
    gate: G,
}

impl<S: OutputSink, G: AcknowledgmentGate> AccountsView<S, G> {
    pub fn new(store_path: PathBuf, sink: S, gate: G) -> Self {
        AccountsView {
            store_path,
            parser: RecordParser::new(),
            renderer: ReportRenderer::new(),
            sink,
            gate,
        }
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (S, G) {
        (self.sink, self.gate)
    }

    /// Load the records, reporting a read failure as a notice line.
    ///
    /// Returns the records (empty on failure) and the notice, if any.
    pub fn load(&self, messages: &dyn MessageProvider) -> (Vec<Record>, Option<ReportLine>) {
        match self.parser.parse(&self.store_path) {
            Ok(records) => {
                info!(records = records.len(), "loaded accounts");
                (records, None)
            }
            Err(err) => {
                warn!("{}", err);
                let notice = self.renderer.read_error_line(&err, messages);
                (Vec::new(), Some(notice))
            }
        }
    }

    /// Print the listing and wait for acknowledgment. Always returns `true`.
    pub fn run(&mut self, messages: &dyn MessageProvider) -> bool {
        let mut lines = self.renderer.frame_title(messages);

        let (records, notice) = self.load(messages);
        lines.extend(notice);
        lines.extend(self.renderer.render_lines(&records, messages));
        lines.extend(self.renderer.frame_close());

        self.sink.emit(&lines);
        self.gate.wait(&messages.get(messages::PRESS_ENTER, &[]));

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{MemorySink, NoWait};
    use crate::messages::{Catalog, Locale};
    use crate::parser::SEPARATOR;
    use crate::render::LineKind;
    use std::fs;
    use tempfile::TempDir;

    /// Gate that remembers the prompts it was shown.
    #[derive(Default)]
    struct RecordingGate {
        prompts: Vec<String>,
    }

    impl AcknowledgmentGate for RecordingGate {
        fn wait(&mut self, prompt: &str) {
            self.prompts.push(prompt.to_string());
        }
    }

    fn write_store(dir: &TempDir, blocks: &[&str]) -> PathBuf {
        let path = dir.path().join(DEFAULT_STORE_FILE);
        fs::write(&path, blocks.join(SEPARATOR)).unwrap();
        path
    }

    fn kinds(sink: &MemorySink, kind: LineKind) -> usize {
        sink.lines.iter().filter(|l| l.kind == kind).count()
    }

    #[test]
    fn test_round_trip_full_records() {
        let dir = TempDir::new().unwrap();
        let blocks: Vec<String> = (1..=4)
            .map(|n| {
                format!(
                    "Email: user{n}@example.com\nPassword: pass-{n}\nToken: {}\nUsage Limit: {n}0 requests/day",
                    "t".repeat(40)
                )
            })
            .collect();
        let block_refs: Vec<&str> = blocks.iter().map(String::as_str).collect();
        let path = write_store(&dir, &block_refs);

        let catalog = Catalog::builtin(Locale::En);
        let mut view = AccountsView::new(path, MemorySink::new(), NoWait);
        assert!(view.run(&catalog));

        let sink = view.sink();
        assert_eq!(kinds(sink, LineKind::Index), 4);
        let texts = sink.texts();
        for n in 1..=4 {
            assert!(texts.contains(&format!("  Email: user{n}@example.com").as_str()));
            assert!(texts.contains(&format!("  Password: pass-{n}").as_str()));
            assert!(texts.contains(&format!("  Usage Limit: {n}0 requests/day").as_str()));
        }
        assert!(texts.contains(&"  Token: tttttttttt...ttttt"));
    }

    #[test]
    fn test_block_count_matches_labeled_blocks() {
        let dir = TempDir::new().unwrap();
        let path = write_store(
            &dir,
            &[
                "Email: a@example.com",
                "   ",
                "no labels here",
                "Token: abc\nEmail: b@example.com\nEmail: c@example.com",
            ],
        );

        let catalog = Catalog::builtin(Locale::En);
        let mut view = AccountsView::new(path, MemorySink::new(), NoWait);
        view.run(&catalog);

        let sink = view.sink();
        assert_eq!(kinds(sink, LineKind::Index), 2);
        assert!(sink.texts().contains(&"Found 2 accounts"));
        assert!(sink.texts().contains(&"  Email: b@example.com"));
        assert!(!sink.texts().contains(&"  Email: c@example.com"));
    }

    #[test]
    fn test_missing_store_shows_only_notice() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::builtin(Locale::En);
        let mut view = AccountsView::new(
            dir.path().join("missing.txt"),
            MemorySink::new(),
            RecordingGate::default(),
        );

        assert!(view.run(&catalog));

        let (sink, gate) = view.into_parts();
        assert_eq!(kinds(&sink, LineKind::Notice), 1);
        assert_eq!(kinds(&sink, LineKind::Header), 0);
        assert_eq!(kinds(&sink, LineKind::Rule), 0);
        assert_eq!(kinds(&sink, LineKind::Error), 0);
        assert_eq!(gate.prompts, vec!["Press Enter to return to the main menu".to_string()]);
    }

    #[test]
    fn test_unreadable_store_reports_and_continues() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_STORE_FILE);
        fs::write(&path, b"Email: \xc3\x28\n").unwrap();

        let catalog = Catalog::builtin(Locale::Zh);
        let mut view = AccountsView::new(path, MemorySink::new(), RecordingGate::default());

        assert!(view.run(&catalog));

        let (sink, gate) = view.into_parts();
        let texts = sink.texts();
        let error_at = sink.lines.iter().position(|l| l.kind == LineKind::Error).unwrap();
        assert!(texts[error_at].starts_with("读取账号文件时出错: "));
        assert_eq!(sink.lines[error_at + 1].kind, LineKind::Notice);
        assert_eq!(texts[error_at + 1], "没有找到任何账号信息");
        assert_eq!(gate.prompts.len(), 1);
    }

    #[test]
    fn test_listing_is_framed() {
        let dir = TempDir::new().unwrap();
        let path = write_store(&dir, &["Email: a@example.com"]);

        let catalog = Catalog::builtin(Locale::En);
        let mut view = AccountsView::new(path, MemorySink::new(), NoWait);
        view.run(&catalog);

        let lines = &view.sink().lines;
        assert_eq!(lines[0].kind, LineKind::Frame);
        assert_eq!(lines[1].text, "View Account Information");
        assert_eq!(lines[2].kind, LineKind::Frame);
        assert_eq!(lines.last().map(|l| l.kind), Some(LineKind::Frame));
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let dir = TempDir::new().unwrap();
        let path = write_store(&dir, &["Email: a@example.com\nToken: 0123456789abcdefXYZ"]);

        let catalog = Catalog::builtin(Locale::En);
        let mut view = AccountsView::new(path, MemorySink::new(), NoWait);
        view.run(&catalog);
        let first = view.sink().lines.clone();
        view.run(&catalog);

        assert_eq!(view.sink().lines.len(), first.len() * 2);
        assert_eq!(&view.sink().lines[first.len()..], first.as_slice());
    }
}
