//! Message interface contracts.
//!
//! Every `with_*` method leaves `self` untouched and returns a derived value.

use std::io::SeekFrom;

/// Conversion into the list of values stored for a single header name
pub trait IntoHeaderValues {
    fn into_header_values(self) -> Vec<String>;
}

impl IntoHeaderValues for &str {
    fn into_header_values(self) -> Vec<String> {
        vec![self.to_owned()]
    }
}

impl IntoHeaderValues for String {
    fn into_header_values(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoHeaderValues for Vec<String> {
    fn into_header_values(self) -> Vec<String> {
        self
    }
}

impl IntoHeaderValues for &[&str] {
    fn into_header_values(self) -> Vec<String> {
        self.iter().map(|v| (*v).to_owned()).collect()
    }
}

impl<const N: usize> IntoHeaderValues for [&str; N] {
    fn into_header_values(self) -> Vec<String> {
        self.iter().map(|v| (*v).to_owned()).collect()
    }
}

/// Sequential and random access over a byte resource
pub trait StreamInterface {
    type Chunk: AsRef<[u8]>;
    type Error: std::error::Error;

    fn read(&self, len: usize) -> Result<Self::Chunk, Self::Error>;
    fn write(&self, bytes: &[u8]) -> Result<usize, Self::Error>;
    fn seek(&self, pos: SeekFrom) -> Result<u64, Self::Error>;
    fn rewind(&self) -> Result<(), Self::Error> {
        self.seek(SeekFrom::Start(0)).map(|_| ())
    }
    fn tell(&self) -> Result<u64, Self::Error>;
    fn eof(&self) -> bool;
    fn size(&self) -> Option<u64>;
    /// Everything from the current position to the end of the stream
    fn contents(&self) -> Result<Self::Chunk, Self::Error>;
    fn is_readable(&self) -> bool;
    fn is_writable(&self) -> bool;
    fn is_seekable(&self) -> bool;
    fn close(&self);
}

/// A URI reference, see RFC 3986
pub trait UriInterface: Sized {
    type Error: std::error::Error;

    fn scheme(&self) -> &str;
    fn authority(&self) -> String;
    fn user_info(&self) -> &str;
    fn host(&self) -> &str;
    /// `None` when no port is set or the port is the default of the scheme
    fn port(&self) -> Option<u16>;
    fn path(&self) -> &str;
    fn query(&self) -> &str;
    fn fragment(&self) -> &str;

    fn with_scheme(&self, scheme: &str) -> Result<Self, Self::Error>;
    fn with_user_info(&self, user: &str, password: Option<&str>) -> Self;
    fn with_host(&self, host: &str) -> Result<Self, Self::Error>;
    fn with_port(&self, port: Option<u16>) -> Result<Self, Self::Error>;
    fn with_path(&self, path: &str) -> Self;
    fn with_query(&self, query: &str) -> Self;
    fn with_fragment(&self, fragment: &str) -> Self;
}

/// Protocol version, headers and body shared by requests and responses
pub trait HttpMessage: Sized {
    type Body: StreamInterface;
    type Error: std::error::Error;

    fn protocol_version(&self) -> &str;
    fn with_protocol_version(&self, version: &str) -> Result<Self, Self::Error>;

    /// All headers in insertion order
    ///
    /// `with_header` stores the name spelling it was given, `with_added_header` keeps the
    /// spelling of an existing entry.
    fn headers(&self) -> Vec<(String, Vec<String>)>;
    fn has_header(&self, name: &str) -> bool;
    fn header(&self, name: &str) -> Vec<String>;
    /// The values of a header joined with `", "`, empty when the header is absent
    fn header_line(&self, name: &str) -> String {
        self.header(name).join(", ")
    }
    fn with_header<V: IntoHeaderValues>(&self, name: &str, values: V) -> Self;
    fn with_added_header<V: IntoHeaderValues>(&self, name: &str, values: V) -> Self;
    fn without_header(&self, name: &str) -> Self;

    fn body(&self) -> &Self::Body;
    fn with_body(&self, body: Self::Body) -> Self;
}

/// An outgoing, client-side request
pub trait HttpRequest: HttpMessage {
    type Uri: UriInterface;

    fn request_target(&self) -> String;
    fn with_request_target(&self, target: &str) -> Result<Self, Self::Error>;
    fn method(&self) -> &str;
    fn with_method(&self, method: &str) -> Result<Self, Self::Error>;
    fn uri(&self) -> &Self::Uri;
    fn with_uri(&self, uri: Self::Uri, preserve_host: bool) -> Self;
}
