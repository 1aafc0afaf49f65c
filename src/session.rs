use std::fmt;
use std::time::Duration;

/// Delay between keep-alive renewals unless configured otherwise.
pub const DEFAULT_KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

/// Authentication state for one client: application key, credentials, the
/// current session token and the keep-alive settings.
///
/// A `Session` is a plain value. The client keeps the live copy behind a lock
/// and hands snapshots to the gateway, so every request sees one consistent
/// token.
#[derive(Clone)]
pub struct Session {
    application_key: String,
    username: String,
    password: String,
    token: Option<String>,
    keep_alive_enabled: bool,
    keep_alive_interval: Duration,
    locale: String,
}

impl Session {
    pub fn new(application_key: impl Into<String>) -> Self {
        Self {
            application_key: application_key.into(),
            username: String::new(),
            password: String::new(),
            token: None,
            keep_alive_enabled: false,
            keep_alive_interval: DEFAULT_KEEP_ALIVE_INTERVAL,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// A zero `interval` falls back to [`DEFAULT_KEEP_ALIVE_INTERVAL`].
    pub fn with_keep_alive(mut self, enabled: bool, interval: Duration) -> Self {
        self.keep_alive_enabled = enabled;
        self.keep_alive_interval = if interval.is_zero() {
            DEFAULT_KEEP_ALIVE_INTERVAL
        } else {
            interval
        };
        self
    }

    pub fn application_key(&self) -> &str {
        &self.application_key
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn keep_alive_enabled(&self) -> bool {
        self.keep_alive_enabled
    }

    pub fn keep_alive_interval(&self) -> Duration {
        self.keep_alive_interval
    }

    pub fn state(&self) -> SessionState {
        match self.token {
            Some(_) => SessionState::Authenticated,
            None => SessionState::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state() == SessionState::Authenticated
    }

    /// Empty tokens are treated as "no token".
    pub fn set_token(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.token = if token.is_empty() { None } else { Some(token) };
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn set_credentials(&mut self, username: Option<&str>, password: Option<&str>) {
        if let Some(username) = username {
            self.username = username.to_string();
        }
        if let Some(password) = password {
            self.password = password.to_string();
        }
    }

    pub fn set_keep_alive_enabled(&mut self, enabled: bool) {
        self.keep_alive_enabled = enabled;
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("application_key", &self.application_key)
            .field("username", &self.username)
            .field("password", &"***")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("keep_alive_enabled", &self.keep_alive_enabled)
            .field("keep_alive_interval", &self.keep_alive_interval)
            .field("locale", &self.locale)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_unauthenticated() {
        let session = Session::new("app-key");
        assert_eq!(session.state(), SessionState::Unauthenticated);
        assert_eq!(session.locale(), "en");
        assert_eq!(session.keep_alive_interval(), Duration::from_secs(3600));
        assert!(!session.keep_alive_enabled());
    }

    #[test]
    fn test_zero_keep_alive_interval_uses_default() {
        let session = Session::new("k").with_keep_alive(true, Duration::ZERO);
        assert!(session.keep_alive_enabled());
        assert_eq!(session.keep_alive_interval(), DEFAULT_KEEP_ALIVE_INTERVAL);

        let session = Session::new("k").with_keep_alive(true, Duration::from_secs(30));
        assert_eq!(session.keep_alive_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_token_lifecycle() {
        let mut session = Session::new("app-key");
        session.set_token("abc");
        assert_eq!(session.state(), SessionState::Authenticated);
        assert_eq!(session.token(), Some("abc"));

        session.set_token("");
        assert!(!session.is_authenticated());

        session.set_token("def");
        session.clear_token();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_credentials_override_only_given_fields() {
        let mut session = Session::new("k").with_credentials("alice", "secret");
        session.set_credentials(None, Some("rotated"));
        assert_eq!(session.username(), "alice");
        assert_eq!(session.password(), "rotated");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let mut session = Session::new("k").with_credentials("alice", "secret");
        session.set_token("tok-123");
        let printed = format!("{session:?}");
        assert!(!printed.contains("secret"));
        assert!(!printed.contains("tok-123"));
        assert!(printed.contains("alice"));
    }
}
