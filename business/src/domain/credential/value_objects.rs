use serde::{Deserialize, Serialize};

/// Placeholder shown when no credential is configured at all.
pub const MASK_PLACEHOLDER: &str = "<empty>";

/// Gemini API credential read from the process environment.
/// Wrapped so the raw token is only ever displayed in masked form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new ApiKey from any type that can be converted into a String.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Builds a key from an optional environment value; absence maps to
    /// the empty key so callers can treat "unset" and "empty" the same way.
    pub fn from_env_value(value: Option<String>) -> Self {
        Self(value.unwrap_or_default())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the raw token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Masked form for status displays: `<empty>` when absent, keys of
    /// eight characters or fewer unchanged, otherwise the first and last
    /// four characters around an ellipsis.
    pub fn masked(&self) -> String {
        if self.0.is_empty() {
            return MASK_PLACEHOLDER.to_string();
        }
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            return self.0.clone();
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

impl From<String> for ApiKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ApiKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_mask_empty_key_with_placeholder() {
        let key = ApiKey::new("");
        assert_eq!(key.masked(), "<empty>");
    }

    #[test]
    fn should_mask_missing_env_value_with_placeholder() {
        let key = ApiKey::from_env_value(None);
        assert!(key.is_empty());
        assert_eq!(key.masked(), "<empty>");
    }

    #[test]
    fn should_keep_short_keys_unchanged() {
        let key = ApiKey::new("abcd1234");
        assert_eq!(key.masked(), "abcd1234");
    }

    #[test]
    fn should_elide_middle_of_long_keys() {
        let key = ApiKey::new("AIzaSyA-1234567890abcdWXYZ");
        assert_eq!(key.masked(), "AIza...WXYZ");
    }

    #[test]
    fn should_mask_nine_character_key() {
        let key = ApiKey::new("123456789");
        assert_eq!(key.masked(), "1234...6789");
    }

    #[test]
    fn should_expose_raw_token() {
        let key = ApiKey::new("secret-token");
        assert_eq!(key.as_str(), "secret-token");
    }
}
