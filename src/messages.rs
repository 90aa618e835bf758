// Message lookup for the accounts listing
//
// Labels and notices come through a MessageProvider so the listing can be
// localized; the built-in catalogs cover English and Chinese and a JSON file
// can override any entry.

use crate::error::MessagesError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const TITLE: &str = "accounts.title";
pub const NO_ACCOUNTS: &str = "accounts.no_accounts";
pub const TOTAL_COUNT: &str = "accounts.total_count";
pub const ACCOUNT_INFO: &str = "accounts.account_info";
pub const PASSWORD: &str = "accounts.password";
pub const USAGE_LIMIT: &str = "accounts.usage_limit";
pub const PRESS_ENTER: &str = "accounts.press_enter";
pub const READ_ERROR: &str = "accounts.read_error";

/// Resolves a message key to display text.
pub trait MessageProvider {
    /// Text for `key` with `{name}` placeholders replaced from `params`.
    ///
    /// Unknown keys resolve to the key itself.
    fn get(&self, key: &str, params: &[(&str, String)]) -> String;
}

/// Built-in catalog language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// Key → template table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    templates: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    pub fn builtin(locale: Locale) -> Self {
        let entries: &[(&str, &str)] = match locale {
            Locale::En => &[
                (TITLE, "View Account Information"),
                (NO_ACCOUNTS, "No account information found"),
                (TOTAL_COUNT, "Found {count} accounts"),
                (ACCOUNT_INFO, "Account Info"),
                (PASSWORD, "Password"),
                (USAGE_LIMIT, "Usage Limit"),
                (PRESS_ENTER, "Press Enter to return to the main menu"),
                (READ_ERROR, "Error reading accounts file: {error}"),
            ],
            Locale::Zh => &[
                (TITLE, "查看Cursor账号信息"),
                (NO_ACCOUNTS, "没有找到任何账号信息"),
                (TOTAL_COUNT, "共找到 {count} 个账号"),
                (ACCOUNT_INFO, "账号信息"),
                (PASSWORD, "密码"),
                (USAGE_LIMIT, "使用限制"),
                (PRESS_ENTER, "按Enter键返回主菜单"),
                (READ_ERROR, "读取账号文件时出错: {error}"),
            ],
        };

        entries.iter().copied().collect()
    }

    /// Parse a flat JSON object of key → template.
    pub fn from_json_str(json: &str) -> Result<Self, MessagesError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, MessagesError> {
        let json = fs::read_to_string(path).map_err(|source| MessagesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(key.into(), template.into());
    }

    /// Overlay `other` on top of this catalog; its entries win.
    pub fn merge(mut self, other: Catalog) -> Self {
        self.templates.extend(other.templates);
        self
    }

    pub fn template(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Catalog {
            templates: iter
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl MessageProvider for Catalog {
    fn get(&self, key: &str, params: &[(&str, String)]) -> String {
        match self.template(key) {
            Some(template) => substitute(template, params),
            None => key.to_string(),
        }
    }
}

/// Replace each `{name}` in `template` with its parameter value.
pub fn substitute(template: &str, params: &[(&str, String)]) -> String {
    params.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), value)
    })
}
