use std::str::FromStr;

use crate::http::InvalidArgument;

/// HTTP Version
/// SPEC: RFC 9110 - 2.5. Protocol Version
///
/// Only the versions in [`HttpVersion::SUPPORTED`] can be constructed from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpVersion {
    major: u8,
    minor: u8,
    text: &'static str,
}

impl HttpVersion {
    pub const HTTP_1_1: Self = Self::new(1, 1, "1.1");
    pub const HTTP_2_0: Self = Self::new(2, 0, "2.0");
    pub const HTTP_3_0: Self = Self::new(3, 0, "3.0");

    pub const SUPPORTED: [Self; 3] = [Self::HTTP_1_1, Self::HTTP_2_0, Self::HTTP_3_0];

    const fn new(major: u8, minor: u8, text: &'static str) -> Self {
        Self { major, minor, text }
    }

    pub const fn major(&self) -> u8 {
        self.major
    }

    pub const fn minor(&self) -> u8 {
        self.minor
    }

    /// The version as written in a request line, e.g. `HTTP/1.1`
    pub fn to_request_line(&self) -> String {
        format!("HTTP/{}", self)
    }

    pub const fn as_str(&self) -> &'static str {
        self.text
    }
}

impl Default for HttpVersion {
    fn default() -> Self {
        Self::HTTP_1_1
    }
}

impl FromStr for HttpVersion {
    type Err = InvalidArgument;

    /// Accepts `major.minor`, optionally prefixed with `HTTP/`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InvalidArgument::UnsupportedVersion(s.to_owned());
        let digits = s.strip_prefix("HTTP/").unwrap_or(s);
        let (major, minor) = digits.split_once('.').ok_or_else(err)?;
        if major.len() != 1 || minor.len() != 1 {
            return Err(err());
        }
        let major: u8 = major.parse().map_err(|_| err())?;
        let minor: u8 = minor.parse().map_err(|_| err())?;
        Self::SUPPORTED
            .into_iter()
            .find(|version| version.major == major && version.minor == minor)
            .ok_or_else(err)
    }
}

impl std::fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse_supported() {
        assert_eq!("1.1".parse(), Ok(HttpVersion::HTTP_1_1));
        assert_eq!("2.0".parse(), Ok(HttpVersion::HTTP_2_0));
        assert_eq!("3.0".parse(), Ok(HttpVersion::HTTP_3_0));
        assert_eq!("HTTP/1.1".parse(), Ok(HttpVersion::HTTP_1_1));
    }

    #[test]
    fn test_version_parse_unsupported() {
        for input in ["1.5", "1.0", "2", "", "1.1.1", "HTTP/0.9", "+1.1", "01.1"] {
            assert_eq!(
                input.parse::<HttpVersion>(),
                Err(InvalidArgument::UnsupportedVersion(input.to_owned())),
                "{input}"
            );
        }
    }

    #[test]
    fn test_version_display() {
        assert_eq!(HttpVersion::HTTP_2_0.to_string(), "2.0");
        assert_eq!(HttpVersion::HTTP_2_0.as_str(), "2.0");
        assert_eq!(HttpVersion::HTTP_1_1.to_request_line(), "HTTP/1.1");
    }

    #[test]
    fn test_version_text_matches_numbers() {
        for version in HttpVersion::SUPPORTED {
            let text = format!("{}.{}", version.major(), version.minor());
            assert_eq!(version.as_str(), text);
            assert_eq!(version.as_str().parse(), Ok(version));
        }
        assert_eq!(HttpVersion::HTTP_3_0.as_str(), "3.0");
    }
}
