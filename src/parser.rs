// Accounts file parser
// Block splitter + per-line label extraction

use crate::error::StoreError;
use crate::record::Record;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

// ============================================================================
// FILE FORMAT
// ============================================================================

/// Number of `=` characters in a block separator line.
///
/// Fixed by the program that writes the accounts file; must match exactly.
pub const SEPARATOR_WIDTH: usize = 50;

/// Full block separator: newline, 50 `=`, newline.
pub const SEPARATOR: &str =
    "\n==================================================\n";

/// Label - the four line tags recognised inside a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Email,
    Password,
    Token,
    UsageLimit,
}

impl Label {
    pub const ALL: [Label; 4] = [Label::Email, Label::Password, Label::Token, Label::UsageLimit];

    /// Tag as written in the file, without the `": "` suffix
    pub fn tag(&self) -> &'static str {
        match self {
            Label::Email => "Email",
            Label::Password => "Password",
            Label::Token => "Token",
            Label::UsageLimit => "Usage Limit",
        }
    }

    /// Line prefix that introduces a value for this label
    pub fn prefix(&self) -> &'static str {
        match self {
            Label::Email => "Email: ",
            Label::Password => "Password: ",
            Label::Token => "Token: ",
            Label::UsageLimit => "Usage Limit: ",
        }
    }

    /// Value carried by `line` for this label, if the line is tagged with it.
    ///
    /// The line must start with the prefix and carry at least one more
    /// character; the value is trimmed.
    pub fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        let rest = line.strip_prefix(self.prefix())?;
        if rest.is_empty() {
            return None;
        }
        Some(rest.trim())
    }

    fn slot<'r>(&self, record: &'r mut Record) -> &'r mut Option<String> {
        match self {
            Label::Email => &mut record.email,
            Label::Password => &mut record.password,
            Label::Token => &mut record.token,
            Label::UsageLimit => &mut record.usage_limit,
        }
    }
}

// ============================================================================
// PARSER
// ============================================================================

/// RecordParser - turns the accounts file into an ordered list of records
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordParser;

impl RecordParser {
    pub fn new() -> Self {
        RecordParser
    }

    /// Parse the accounts file at `path`.
    ///
    /// # Returns
    /// * `Ok(vec![])` - the file does not exist
    /// * `Ok(records)` - records in file order
    /// * `Err(StoreError::Read)` - the file exists but cannot be read as UTF-8
    pub fn parse(&self, path: &Path) -> Result<Vec<Record>, StoreError> {
        if !path.exists() {
            debug!(path = %path.display(), "accounts file absent");
            return Ok(Vec::new());
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            // Removed between the check and the read: still just absent.
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let records = self.parse_str(&content);
        debug!(path = %path.display(), records = records.len(), "parsed accounts file");
        Ok(records)
    }

    /// Parse already loaded file content.
    ///
    /// `\r\n` and lone `\r` line endings are read as `\n` first, so stores
    /// written on Windows split the same way.
    pub fn parse_str(&self, content: &str) -> Vec<Record> {
        let content = normalize_newlines(content);
        let mut records = Vec::new();

        for (index, block) in content.split(SEPARATOR).enumerate() {
            if block.trim().is_empty() {
                continue;
            }

            match self.parse_block(block) {
                Some(record) => records.push(record),
                None => debug!(block = index, "dropping block without recognised labels"),
            }
        }

        records
    }

    /// Extract one record from a block. `None` if no label matched.
    ///
    /// The first line carrying a label wins; later duplicates are ignored.
    pub fn parse_block(&self, block: &str) -> Option<Record> {
        let mut record = Record::new();

        for line in block.split('\n') {
            for label in Label::ALL {
                let slot = label.slot(&mut record);
                if slot.is_some() {
                    continue;
                }
                if let Some(value) = label.extract(line) {
                    *slot = Some(value.to_string());
                    break;
                }
            }
        }

        if record.is_empty() {
            None
        } else {
            Some(record)
        }
    }
}

fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

// ============================================================================
// TESTS
// ============================================================================
