//! Secure credential handling using the secrecy crate
//!
//! The recognizer API token is held in memory as a [`SecretString`]: memory
//! is zeroed on drop, Debug output is redacted, and code must call
//! `expose_secret()` to read the value.

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the traits required by `Secret`
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl From<&str> for SecretValue {
    fn from(s: &str) -> Self {
        SecretValue(s.to_string())
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Check if the secret value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SecretValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// Secret string type used for the recognizer API token
pub type SecretString = Secret<SecretValue>;

/// Wrap a plain string into a [`SecretString`]
pub fn secret_from(value: impl Into<String>) -> SecretString {
    Secret::new(SecretValue(value.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_debug_is_redacted() {
        let secret = secret_from("ner-service-token");
        let debug = format!("{secret:?}");
        assert!(!debug.contains("ner-service-token"));
    }

    #[test]
    fn test_expose_returns_value() {
        let secret = secret_from("ner-service-token");
        assert_eq!(secret.expose_secret().as_ref(), "ner-service-token");
    }

    #[test]
    fn test_deserializes_from_toml() {
        #[derive(serde::Deserialize)]
        struct Holder {
            token: SecretValue,
        }

        let holder: Holder = toml::from_str(r#"token = "abc""#).unwrap();
        assert_eq!(holder.token.as_ref(), "abc");
    }
}
