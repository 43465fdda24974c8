//! Loosely typed arguments accepted when building a request
//!
//! Each argument type is a closed set of accepted shapes. The `from_any` constructors serve
//! callers holding values whose type is only known at runtime, such as bindings; they report
//! the rejected type by name.

use std::any::{Any, type_name};

use crate::http::{InvalidArgument, stream::Stream, uri::Uri};

/// Extracts text from the string types a caller may hold
fn as_text(value: &dyn Any) -> Option<String> {
    if let Some(s) = value.downcast_ref::<String>() {
        Some(s.clone())
    } else {
        value.downcast_ref::<&str>().map(|s| (*s).to_owned())
    }
}

/// A uri given either as text or as an already parsed [`Uri`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriArg {
    Text(String),
    Uri(Uri),
}

impl UriArg {
    pub fn from_any<T: Any>(value: T) -> Result<Self, InvalidArgument> {
        let value: &dyn Any = &value;
        if let Some(uri) = value.downcast_ref::<Uri>() {
            return Ok(Self::Uri(uri.clone()));
        }
        as_text(value)
            .map(Self::Text)
            .ok_or(InvalidArgument::UriType(type_name::<T>()))
    }

    pub fn into_uri(self) -> Result<Uri, InvalidArgument> {
        match self {
            Self::Text(text) => Uri::parse(&text),
            Self::Uri(uri) => Ok(uri),
        }
    }
}

impl Default for UriArg {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for UriArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for UriArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Uri> for UriArg {
    fn from(value: Uri) -> Self {
        Self::Uri(value)
    }
}

impl From<&Uri> for UriArg {
    fn from(value: &Uri) -> Self {
        Self::Uri(value.clone())
    }
}

/// A body given either as text or as a [`Stream`]
///
/// Values of any other type are carried as [`BodyArg::Unsupported`] and ignored, leaving the
/// request with an empty body.
#[derive(Debug, Clone)]
pub enum BodyArg {
    Text(String),
    Stream(Stream),
    Unsupported(&'static str),
}

impl BodyArg {
    pub fn from_any<T: Any>(value: T) -> Self {
        let value: &dyn Any = &value;
        if let Some(stream) = value.downcast_ref::<Stream>() {
            return Self::Stream(stream.clone());
        }
        as_text(value)
            .map(Self::Text)
            .unwrap_or(Self::Unsupported(type_name::<T>()))
    }

    pub fn into_stream(self) -> Stream {
        match self {
            Self::Text(text) => Stream::from_bytes(text),
            Self::Stream(stream) => stream,
            Self::Unsupported(ty) => {
                log::debug!("ignoring request body of type `{}`", ty);
                Stream::memory()
            }
        }
    }
}

impl Default for BodyArg {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for BodyArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for BodyArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Stream> for BodyArg {
    fn from(value: Stream) -> Self {
        Self::Stream(value)
    }
}

/// Text for [`super::Request::with_request_target_any`]
pub(crate) fn target_from_any<T: Any>(value: T) -> Result<String, InvalidArgument> {
    as_text(&value).ok_or(InvalidArgument::TargetType(type_name::<T>()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_uri_arg_from_any() {
        assert_eq!(
            UriArg::from_any("https://terryl.in").unwrap(),
            UriArg::Text("https://terryl.in".to_owned())
        );
        assert_eq!(
            UriArg::from_any(String::from("/a")).unwrap(),
            UriArg::Text("/a".to_owned())
        );
        let uri = Uri::parse("https://terryl.in").unwrap();
        assert_eq!(UriArg::from_any(uri.clone()).unwrap(), UriArg::Uri(uri));

        assert_eq!(
            UriArg::from_any(42u32),
            Err(InvalidArgument::UriType("u32"))
        );
    }

    #[test]
    fn test_uri_arg_error_names_type() {
        let err = UriArg::from_any(vec![1u8]).unwrap_err();
        assert!(err.to_string().contains("Vec<u8>"), "{err}");
    }

    #[test]
    fn test_body_arg_from_any() {
        assert!(matches!(BodyArg::from_any("text"), BodyArg::Text(t) if t == "text"));
        let stream = Stream::from_bytes("abc");
        match BodyArg::from_any(stream.clone()) {
            BodyArg::Stream(s) => assert!(s.ptr_eq(&stream)),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(BodyArg::from_any(3.5f64), BodyArg::Unsupported("f64")));
        assert_eq!(BodyArg::Unsupported("f64").into_stream().size(), Some(0));
    }

    #[test]
    fn test_target_from_any() {
        assert_eq!(target_from_any("/a").unwrap(), "/a");
        let map = HashMap::from([("foo", "bar")]);
        assert!(matches!(
            target_from_any(map),
            Err(InvalidArgument::TargetType(name)) if name.contains("HashMap")
        ));
    }
}
