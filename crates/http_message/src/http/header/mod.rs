mod map;

use std::fmt;

pub use map::*;
use smallvec::SmallVec;
use unicase::UniCase;

/// A header name, compared and hashed ignoring ASCII case
///
/// The spelling it was created with is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderName(UniCase<String>);

impl HeaderName {
    pub const HOST: &'static str = "Host";

    pub fn new(name: impl Into<String>) -> Self {
        Self(UniCase::new(name.into()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }
}

impl From<&str> for HeaderName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for HeaderName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The values of one header, most headers carry a single value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderValue {
    values: SmallVec<[String; 1]>,
}

impl HeaderValue {
    pub fn new() -> Self {
        Self {
            values: SmallVec::new(),
        }
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    pub fn extend(&mut self, values: impl IntoIterator<Item = String>) {
        self.values.extend(values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.values.iter()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.values.to_vec()
    }

    /// The values joined with `", "`
    pub fn to_line(&self) -> String {
        self.values.join(", ")
    }
}

impl FromIterator<String> for HeaderValue {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl std::ops::Index<usize> for HeaderValue {
    type Output = String;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_name_ignores_case() {
        assert_eq!(HeaderName::new("Content-Type"), HeaderName::new("content-type"));
        assert!(HeaderName::new("HOST").is("host"));
        assert_eq!(HeaderName::new("X-Custom").to_string(), "X-Custom");
    }

    #[test]
    fn test_header_value_line() {
        let mut value = HeaderValue::new();
        assert!(value.is_empty());
        value.push("gzip");
        value.push("br");
        assert_eq!(value.len(), 2);
        assert_eq!(value[1], "br");
        assert_eq!(value.to_line(), "gzip, br");
    }
}
