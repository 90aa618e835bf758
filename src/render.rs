// Report renderer
// Records → numbered listing lines (masking + N/A defaults applied here)

use crate::mask::{mask_token, NOT_AVAILABLE};
use crate::messages::{self, MessageProvider};
use crate::record::Record;
use std::fmt;

/// Width of the rules drawn between records and around the listing.
pub const RULE_WIDTH: usize = 60;

const RULE_CHAR: char = '─';
const FRAME_CHAR: char = '═';

/// What a line is, so an output sink can decorate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Banner title
    Title,
    /// Heavy rule framing the whole listing
    Frame,
    /// "N accounts found"
    Header,
    /// Light rule between records
    Rule,
    /// "[i] account info:"
    Index,
    /// "  label: value"; `label_len` is the byte length of "  label:"
    Field { label_len: usize },
    /// Empty listing notice
    Notice,
    /// Accounts file could not be read
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub kind: LineKind,
    pub text: String,
}

impl ReportLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        ReportLine {
            kind,
            text: text.into(),
        }
    }

    fn field(label: &str, value: &str) -> Self {
        let head = format!("  {label}:");
        let label_len = head.len();
        ReportLine::new(LineKind::Field { label_len }, format!("{head} {value}"))
    }

    fn rule() -> Self {
        ReportLine::new(LineKind::Rule, RULE_CHAR.to_string().repeat(RULE_WIDTH))
    }

    fn frame() -> Self {
        ReportLine::new(LineKind::Frame, FRAME_CHAR.to_string().repeat(RULE_WIDTH))
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// ReportRenderer - builds the account listing
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn new() -> Self {
        ReportRenderer
    }

    /// Listing as plain text lines.
    pub fn render(&self, records: &[Record], messages: &dyn MessageProvider) -> Vec<String> {
        self.render_lines(records, messages)
            .into_iter()
            .map(|line| line.text)
            .collect()
    }

    /// Listing with each line tagged by kind.
    pub fn render_lines(
        &self,
        records: &[Record],
        messages: &dyn MessageProvider,
    ) -> Vec<ReportLine> {
        if records.is_empty() {
            return vec![ReportLine::new(
                LineKind::Notice,
                messages.get(messages::NO_ACCOUNTS, &[]),
            )];
        }

        let mut lines = Vec::with_capacity(2 + records.len() * 6);
        lines.push(ReportLine::new(
            LineKind::Header,
            messages.get(messages::TOTAL_COUNT, &[("count", records.len().to_string())]),
        ));
        lines.push(ReportLine::rule());

        // Labels are looked up once; "Email" and "Token" stay literal tags.
        let account_info = messages.get(messages::ACCOUNT_INFO, &[]);
        let password = messages.get(messages::PASSWORD, &[]);
        let usage_limit = messages.get(messages::USAGE_LIMIT, &[]);

        for (i, record) in records.iter().enumerate() {
            lines.push(ReportLine::new(
                LineKind::Index,
                format!("[{}] {}:", i + 1, account_info),
            ));
            lines.push(ReportLine::field("Email", or_na(&record.email)));
            lines.push(ReportLine::field(&password, or_na(&record.password)));
            lines.push(ReportLine::field("Token", &mask_token(or_na(&record.token))));
            lines.push(ReportLine::field(&usage_limit, or_na(&record.usage_limit)));
            lines.push(ReportLine::rule());
        }

        lines
    }

    /// Banner printed before the listing.
    pub fn frame_title(&self, messages: &dyn MessageProvider) -> Vec<ReportLine> {
        vec![
            ReportLine::frame(),
            ReportLine::new(LineKind::Title, messages.get(messages::TITLE, &[])),
            ReportLine::frame(),
        ]
    }

    /// Rule printed after the listing.
    pub fn frame_close(&self) -> Vec<ReportLine> {
        vec![ReportLine::frame()]
    }

    /// Notice for an accounts file that exists but could not be read.
    pub fn read_error_line(
        &self,
        error: &dyn std::error::Error,
        messages: &dyn MessageProvider,
    ) -> ReportLine {
        ReportLine::new(
            LineKind::Error,
            messages.get(messages::READ_ERROR, &[("error", error.to_string())]),
        )
    }
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{Catalog, Locale};

    /// Echoes the key and its params, so tests can see which message was used.
    struct KeyEcho;

    impl MessageProvider for KeyEcho {
        fn get(&self, key: &str, params: &[(&str, String)]) -> String {
            let mut out = key.to_string();
            for (name, value) in params {
                out.push_str(&format!(" {name}={value}"));
            }
            out
        }
    }

    fn full_record(n: usize) -> Record {
        Record::new()
            .with_email(format!("user{n}@example.com"))
            .with_password(format!("secret-{n}"))
            .with_token(format!("tok{n}-abcdefghijklmnopqrstuvwxyz"))
            .with_usage_limit(format!("{n}00 requests/day"))
    }

    #[test]
    fn test_empty_listing_is_single_notice() {
        let lines = ReportRenderer::new().render(&[], &KeyEcho);
        assert_eq!(lines, vec!["accounts.no_accounts".to_string()]);
    }

    #[test]
    fn test_single_record_layout() {
        let record = Record::new()
            .with_email("a@example.com")
            .with_password("pw")
            .with_token("abcdefghijklmnopqrst")
            .with_usage_limit("500 requests/day");

        let lines = ReportRenderer::new().render(&[record], &KeyEcho);
        let rule = "─".repeat(RULE_WIDTH);

        assert_eq!(
            lines,
            vec![
                "accounts.total_count count=1".to_string(),
                rule.clone(),
                "[1] accounts.account_info:".to_string(),
                "  Email: a@example.com".to_string(),
                "  accounts.password: pw".to_string(),
                "  Token: abcdefghij...pqrst".to_string(),
                "  accounts.usage_limit: 500 requests/day".to_string(),
                rule,
            ]
        );
    }

    #[test]
    fn test_missing_fields_render_placeholder() {
        let lines = ReportRenderer::new().render(&[Record::new().with_email("only@x.y")], &KeyEcho);

        assert_eq!(lines[3], "  Email: only@x.y");
        assert_eq!(lines[4], "  accounts.password: N/A");
        assert_eq!(lines[5], "  Token: N/A");
        assert_eq!(lines[6], "  accounts.usage_limit: N/A");
    }

    #[test]
    fn test_stored_placeholder_token_is_not_masked() {
        let lines = ReportRenderer::new().render(&[Record::new().with_token("N/A")], &KeyEcho);
        assert_eq!(lines[5], "  Token: N/A");
    }

    #[test]
    fn test_rules_are_sixty_wide() {
        let lines = ReportRenderer::new().render_lines(&[full_record(1)], &KeyEcho);
        for line in lines.iter().filter(|l| l.kind == LineKind::Rule) {
            assert_eq!(line.text.chars().count(), RULE_WIDTH);
        }
    }

    #[test]
    fn test_blocks_follow_record_order() {
        let records: Vec<Record> = (1..=3).map(full_record).collect();
        let lines = ReportRenderer::new().render_lines(&records, &KeyEcho);

        let indexes: Vec<&str> = lines
            .iter()
            .filter(|l| l.kind == LineKind::Index)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(
            indexes,
            vec![
                "[1] accounts.account_info:",
                "[2] accounts.account_info:",
                "[3] accounts.account_info:",
            ]
        );
        assert_eq!(lines.len(), 2 + 3 * 6);
    }

    #[test]
    fn test_email_and_token_labels_are_not_translated() {
        let catalog = Catalog::builtin(Locale::Zh);
        let lines = ReportRenderer::new().render(&[full_record(7)], &catalog);

        assert_eq!(lines[0], "共找到 1 个账号");
        assert_eq!(lines[2], "[1] 账号信息:");
        assert_eq!(lines[3], "  Email: user7@example.com");
        assert_eq!(lines[4], "  密码: secret-7");
        assert!(lines[5].starts_with("  Token: tok7-abcde..."));
        assert_eq!(lines[6], "  使用限制: 700 requests/day");
    }

    #[test]
    fn test_field_label_len_covers_label() {
        let lines = ReportRenderer::new().render_lines(&[full_record(1)], &KeyEcho);

        for line in &lines {
            if let LineKind::Field { label_len } = line.kind {
                assert!(line.text[..label_len].ends_with(':'));
                assert_eq!(&line.text[label_len..label_len + 1], " ");
            }
        }
    }

    #[test]
    fn test_frame_lines() {
        let renderer = ReportRenderer::new();
        let title = renderer.frame_title(&KeyEcho);

        assert_eq!(title.len(), 3);
        assert_eq!(title[0].kind, LineKind::Frame);
        assert_eq!(title[1], ReportLine::new(LineKind::Title, "accounts.title"));
        assert_eq!(title[2].text, "═".repeat(RULE_WIDTH));
        assert_eq!(renderer.frame_close(), vec![ReportLine::frame()]);
    }

    #[test]
    fn test_read_error_line() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let line = ReportRenderer::new().read_error_line(&err, &KeyEcho);

        assert_eq!(line.kind, LineKind::Error);
        assert_eq!(line.text, "accounts.read_error error=denied");
    }
}
