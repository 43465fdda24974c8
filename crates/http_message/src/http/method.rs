use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use crate::http::InvalidArgument;

/// An HTTP Method
/// SPEC: Defined in RFC 9110 9.1
///
/// Only the nine methods registered by RFC 9110 and RFC 5789 are representable, extension
/// methods are rejected when parsing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Method(Builtin);

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Debug for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for Method {
    type Err = InvalidArgument;

    /// Parses a method in any letter case, the result is always upper-cased
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Builtin::from_upper(&s.to_ascii_uppercase())
            .map(Method)
            .ok_or_else(|| InvalidArgument::UnsupportedMethod(s.to_owned()))
    }
}

impl TryFrom<&str> for Method {
    type Error = InvalidArgument;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Default for Method {
    fn default() -> Self {
        Self::GET
    }
}

impl Method {
    pub const GET: Self = Self(Builtin::GET);
    pub const POST: Self = Self(Builtin::POST);
    pub const PUT: Self = Self(Builtin::PUT);
    pub const DELETE: Self = Self(Builtin::DELETE);
    pub const PATCH: Self = Self(Builtin::PATCH);
    pub const OPTIONS: Self = Self(Builtin::OPTIONS);
    pub const CONNECT: Self = Self(Builtin::CONNECT);
    pub const TRACE: Self = Self(Builtin::TRACE);
    pub const HEAD: Self = Self(Builtin::HEAD);

    pub const fn as_str(&self) -> &'static str {
        self.0.as_str()
    }

    /// Safe Methods are methods which are essentially read-only
    /// SPEC: [RFC 9110 9.2.1 Safe Methods](https://httpwg.org/specs/rfc9110.html#safe.methods)
    pub fn is_safe(&self) -> bool {
        matches!(
            self.0,
            Builtin::GET | Builtin::HEAD | Builtin::OPTIONS | Builtin::TRACE
        )
    }

    /// Idempotent Methods are requests where the side effects are the same if multiple identical
    /// requests are sent
    /// SPEC: [RFC 9110 9.2.2 Idempotent Methods](https://httpwg.org/specs/rfc9110.html#idempotent.methods)
    pub fn is_idempotent(&self) -> bool {
        match self.0 {
            Builtin::PUT | Builtin::DELETE => true,
            _ => self.is_safe(),
        }
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Builtin {
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    OPTIONS,
    CONNECT,
    TRACE,
    HEAD,
}

// The method is a plain tag, it should stay a single byte
static_assertions::assert_eq_size!(Method, u8);

impl Builtin {
    fn from_upper(value: &str) -> Option<Self> {
        Some(match value {
            "GET" => Self::GET,
            "POST" => Self::POST,
            "PUT" => Self::PUT,
            "DELETE" => Self::DELETE,
            "PATCH" => Self::PATCH,
            "OPTIONS" => Self::OPTIONS,
            "CONNECT" => Self::CONNECT,
            "TRACE" => Self::TRACE,
            "HEAD" => Self::HEAD,
            _ => return None,
        })
    }

    const fn as_str(&self) -> &'static str {
        match self {
            Self::GET => "GET",
            Self::POST => "POST",
            Self::PUT => "PUT",
            Self::DELETE => "DELETE",
            Self::PATCH => "PATCH",
            Self::OPTIONS => "OPTIONS",
            Self::CONNECT => "CONNECT",
            Self::TRACE => "TRACE",
            Self::HEAD => "HEAD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse_any_case() {
        let cases = [
            ("get", Method::GET),
            ("Post", Method::POST),
            ("pUt", Method::PUT),
            ("DELETE", Method::DELETE),
            ("patch", Method::PATCH),
            ("options", Method::OPTIONS),
            ("Connect", Method::CONNECT),
            ("trace", Method::TRACE),
            ("hEaD", Method::HEAD),
        ];
        for (input, expected) in cases {
            let method: Method = input.parse().unwrap();
            assert_eq!(method, expected);
            assert_eq!(method.as_str(), input.to_ascii_uppercase());
        }
    }

    #[test]
    fn test_method_parse_unsupported() {
        for input in ["GETX", "", "PROPFIND", "GET "] {
            assert_eq!(
                input.parse::<Method>(),
                Err(InvalidArgument::UnsupportedMethod(input.to_owned()))
            );
        }
    }

    #[test]
    fn test_method_properties() {
        assert!(Method::GET.is_safe());
        assert!(!Method::POST.is_safe());
        assert!(Method::PUT.is_idempotent());
        assert!(Method::HEAD.is_idempotent());
        assert!(!Method::PATCH.is_idempotent());
        assert_eq!(Method::default(), Method::GET);
    }
}
