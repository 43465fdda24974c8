//! Immutable HTTP message value objects
//!
//! [`Request`], [`Uri`] and [`Stream`] implement the message interface contracts of
//! [`uhsapi::http`]. Values are never modified in place: every `with_*` method returns a new
//! value and leaves its receiver untouched.
//!
//! ```
//! use carbon_http_message::{Request, Uri};
//!
//! let request = Request::new("get", "https://terryl.in/zh/?test=test")?;
//! assert_eq!(request.method().as_str(), "GET");
//! assert_eq!(request.request_target(), "/zh/?test=test");
//! assert!(!request.has_header("Host"));
//!
//! let moved = request.with_uri(Uri::parse("https://example.com/")?, false);
//! assert_eq!(moved.header_line("Host"), "example.com");
//! assert!(!request.has_header("Host"));
//! # Ok::<(), carbon_http_message::InvalidArgument>(())
//! ```

pub mod factory;
pub mod http;

pub use http::{
    HttpVersion, InvalidArgument, StreamError,
    header::{HeaderMap, HeaderName, HeaderValue},
    message::Message,
    method::Method,
    request::{BodyArg, Request, RequestBuilder, RequestTargetForm, UriArg},
    stream::{Stream, StreamMode},
    uri::{Uri, UriHost},
};

// Published values can be shared across threads
static_assertions::assert_impl_all!(Request: Send, Sync, Clone);
static_assertions::assert_impl_all!(Uri: Send, Sync, Clone);
static_assertions::assert_impl_all!(Stream: Send, Sync, Clone);
