// Record - one entry of the accounts file

/// One stored account.
///
/// Fields missing from the source block stay `None`; the `N/A` placeholder is
/// only applied when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub email: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
    pub usage_limit: Option<String>,
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    /// Builder pattern: set the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builder pattern: set the password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Builder pattern: set the token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Builder pattern: set the usage limit
    pub fn with_usage_limit(mut self, usage_limit: impl Into<String>) -> Self {
        self.usage_limit = Some(usage_limit.into());
        self
    }

    /// True when no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password.is_none()
            && self.token.is_none()
            && self.usage_limit.is_none()
    }
}
