/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// Errors that can occur when creating a link target.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HrefError {
    #[error("href cannot be empty")]
    Empty,
    #[error("internal href must be an application path starting with '/': {0}")]
    NotAPath(String),
    #[error("external href must be an absolute http(s) URL: {0}")]
    NotAbsoluteUrl(String),
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    ///
    /// # Returns
    ///
    /// Returns `Ok(NonEmptyText)` if the trimmed input is non-empty,
    /// or `Err(TextError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

const PATH_RESOLUTION_HOST: &str = "app.invalid";
const PATH_RESOLUTION_BASE: &str = "https://app.invalid/";

/// The target address of a navigation link.
///
/// An `Href` is either an in-application path (`/patients`) used for client-side routing, or
/// an absolute `http`/`https` URL opened in a new browsing context. Which form is required is
/// decided by the caller through [`Href::internal`] and [`Href::external`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Href(String);

impl Href {
    fn new(input: impl AsRef<str>) -> Result<Self, HrefError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(HrefError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Creates an `Href` for a client-side routed link.
    ///
    /// The value must be an absolute application path that stays on the application's host
    /// when a browser resolves it. Protocol-relative values such as `//host/path`, and their
    /// browser-equivalent spellings `/\\host/path` and `/\t/host/path`, are rejected.
    pub fn internal(input: impl AsRef<str>) -> Result<Self, HrefError> {
        let href = Self::new(input)?;
        if !href.is_path() {
            return Err(HrefError::NotAPath(href.0));
        }
        Ok(href)
    }

    /// Creates an `Href` for a link opened outside the application.
    ///
    /// The value must parse as an absolute URL with an `http` or `https` scheme.
    pub fn external(input: impl AsRef<str>) -> Result<Self, HrefError> {
        let href = Self::new(input)?;
        match url::Url::parse(&href.0) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(href),
            _ => Err(HrefError::NotAbsoluteUrl(href.0)),
        }
    }

    /// Returns true when the target is an application path.
    ///
    /// The value is resolved against a placeholder origin the way a browser would; it is a path
    /// only if it starts with `/` and the resolved URL keeps that origin's host.
    pub fn is_path(&self) -> bool {
        if !self.0.starts_with('/') {
            return false;
        }
        url::Url::parse(PATH_RESOLUTION_BASE)
            .and_then(|base| base.join(&self.0))
            .is_ok_and(|resolved| resolved.host_str() == Some(PATH_RESOLUTION_HOST))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Href {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Href {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Href {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_text_trims_input() {
        let text = NonEmptyText::new("  Patient list \n").expect("should accept");
        assert_eq!(text.as_str(), "Patient list");
    }

    #[test]
    fn test_non_empty_text_rejects_whitespace_only() {
        assert_eq!(NonEmptyText::new("   "), Err(TextError::Empty));
        assert_eq!(NonEmptyText::new(""), Err(TextError::Empty));
    }

    #[test]
    fn test_non_empty_text_deserialize_rejects_empty() {
        let err = serde_json::from_str::<NonEmptyText>("\"  \"").expect_err("should reject");
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_href_internal_accepts_paths() {
        let href = Href::internal("/patients").expect("should accept path");
        assert_eq!(href.as_str(), "/patients");
        assert!(href.is_path());
        assert!(Href::internal("/").is_ok());
    }

    #[test]
    fn test_href_internal_rejects_non_paths() {
        assert_eq!(
            Href::internal("patients"),
            Err(HrefError::NotAPath("patients".into()))
        );
        assert_eq!(
            Href::internal("//evil.example/x"),
            Err(HrefError::NotAPath("//evil.example/x".into()))
        );
        assert_eq!(Href::internal("  "), Err(HrefError::Empty));
    }

    #[test]
    fn test_href_internal_rejects_paths_that_resolve_off_host() {
        for value in ["/\\evil.example/x", "/\t/evil.example/x", "/\n/evil.example", "\\\\evil.example"] {
            assert!(
                matches!(Href::internal(value), Err(HrefError::NotAPath(_))),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_href_internal_keeps_unusual_but_local_paths() {
        assert!(Href::internal("/@evil.example").is_ok());
        assert!(Href::internal("/clinical/letters?id=1#top").is_ok());
    }

    #[test]
    fn test_href_external_requires_http_url() {
        assert!(Href::external("https://ex.org").is_ok());
        assert!(Href::external("http://ex.org/path?q=1").is_ok());
        assert!(matches!(
            Href::external("/patients"),
            Err(HrefError::NotAbsoluteUrl(_))
        ));
        assert!(matches!(
            Href::external("javascript:alert(1)"),
            Err(HrefError::NotAbsoluteUrl(_))
        ));
    }

    #[test]
    fn test_href_serializes_as_string() {
        let href = Href::external("https://ex.org").expect("should accept URL");
        assert_eq!(
            serde_json::to_string(&href).expect("should serialise"),
            "\"https://ex.org\""
        );
    }
}
