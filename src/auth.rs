// Basic authentication credentials taken from the config `auth` string.

use base64::Engine;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Split `username:password` on the first colon. Without a colon both
    /// halves are empty.
    pub fn parse(auth: &str) -> Self {
        match auth.split_once(':') {
            Some((user, pass)) => Self::new(user, pass),
            None => Self::default(),
        }
    }

    /// Value for the `Authorization` header.
    pub fn to_basic_auth(&self) -> String {
        let credentials = format!("{}:{}", self.username, self.password);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(credentials)
        )
    }
}
